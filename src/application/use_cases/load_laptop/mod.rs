use crate::catalog::domain::{
    Component, ComponentKind, GraphicCard, LaptopAggregate, LaptopId, LaptopRecord, Processor, Ram,
    Screen, Storage, VariantSet, LAPTOP_LINK_COLUMN,
};
use crate::ports::inbound::LaptopLoadingPort;
use crate::ports::outbound::{cell_text, ObjectStore, ProgressReporter, RecordQuery, RecordStore};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::fmt;

/// Component rows fetched at once for a single kind
pub const MAX_CONCURRENT_FETCHES: usize = 10;

/// Why a laptop could not be loaded at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootFetchError {
    /// The root table has no row for the id
    NotFound,
    /// The root row could not be retrieved or decoded
    Unavailable(String),
}

impl fmt::Display for RootFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootFetchError::NotFound => write!(f, "laptop not found"),
            RootFetchError::Unavailable(reason) => write!(f, "laptop unavailable: {}", reason),
        }
    }
}

impl std::error::Error for RootFetchError {}

/// LoadLaptopUseCase - Assembles the product page aggregate
///
/// Fetches the root record first; once it is known to exist, the five
/// component kinds and the image folder are resolved concurrently. Every
/// failure after the root fetch degrades a single field and is reported
/// through the progress reporter, never returned to the caller.
///
/// # Type Parameters
/// * `RS` - RecordStore implementation
/// * `OS` - ObjectStore implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadLaptopUseCase<RS, OS, PR> {
    record_store: RS,
    object_store: OS,
    progress_reporter: PR,
}

impl<RS, OS, PR> LoadLaptopUseCase<RS, OS, PR>
where
    RS: RecordStore,
    OS: ObjectStore,
    PR: ProgressReporter,
{
    /// Creates a new LoadLaptopUseCase with injected dependencies
    pub fn new(record_store: RS, object_store: OS, progress_reporter: PR) -> Self {
        Self {
            record_store,
            object_store,
            progress_reporter,
        }
    }

    /// Loads a laptop, `None` if its root record is missing or unreachable
    pub async fn load(&self, laptop_id: &LaptopId) -> Option<LaptopAggregate> {
        self.load_detailed(laptop_id).await.ok()
    }

    /// Loads a laptop and tells a missing root row apart from a failed fetch
    pub async fn load_detailed(
        &self,
        laptop_id: &LaptopId,
    ) -> std::result::Result<LaptopAggregate, RootFetchError> {
        self.progress_reporter
            .report(&format!("🔍 Loading laptop {}...", laptop_id));

        // Step 1: the root record gates everything else
        let root = self.fetch_root(laptop_id).await?;

        // Step 2 + 3: fan out over the component kinds and the image folder
        let (graphic_cards, processors, rams, screens, storages, images) = futures::join!(
            self.resolve_kind::<GraphicCard>(laptop_id),
            self.resolve_kind::<Processor>(laptop_id),
            self.resolve_kind::<Ram>(laptop_id),
            self.resolve_kind::<Screen>(laptop_id),
            self.resolve_kind::<Storage>(laptop_id),
            self.resolve_images(laptop_id),
        );

        // Step 4: merge
        let mut aggregate = LaptopAggregate::from_root(root);
        aggregate.graphic_cards = graphic_cards;
        aggregate.processors = processors;
        aggregate.rams = rams;
        aggregate.screens = screens;
        aggregate.storages = storages;
        aggregate.images = images;

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {}: {} graphic card(s), {} processor(s), {} RAM option(s), {} screen(s), {} storage option(s), {} image(s)",
            aggregate.display_name(),
            aggregate.graphic_cards.len(),
            aggregate.processors.len(),
            aggregate.rams.len(),
            aggregate.screens.len(),
            aggregate.storages.len(),
            aggregate.images.as_ref().map_or(0, Vec::len),
        ));

        Ok(aggregate)
    }

    async fn fetch_root(
        &self,
        laptop_id: &LaptopId,
    ) -> std::result::Result<LaptopRecord, RootFetchError> {
        let query = RecordQuery::table(LaptopRecord::TABLE)
            .select(&LaptopRecord::COLUMNS)
            .eq("id", laptop_id.as_str());

        let row = match self.record_store.fetch_single(&query).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                self.progress_reporter
                    .report_error(&format!("❌ Laptop {} not found", laptop_id));
                return Err(RootFetchError::NotFound);
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Error fetching laptop data for {}: {}",
                    laptop_id, e
                ));
                return Err(RootFetchError::Unavailable(e.to_string()));
            }
        };

        serde_json::from_value(Value::Object(row)).map_err(|e| {
            self.progress_reporter.report_error(&format!(
                "❌ Laptop {} has a malformed root row: {}",
                laptop_id, e
            ));
            RootFetchError::Unavailable(format!("malformed laptop row: {}", e))
        })
    }

    /// Resolves one component kind: links first, then the linked rows with bounded concurrency
    async fn resolve_kind<C: Component>(&self, laptop_id: &LaptopId) -> VariantSet<C> {
        let kind = C::KIND;

        let component_ids = match self.fetch_link_ids(kind, laptop_id).await {
            Ok(ids) => ids,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch {} links for laptop {}: {}",
                    kind, laptop_id, e
                ));
                return VariantSet::Unavailable;
            }
        };

        // buffered keeps junction order in the result
        let attempts: Vec<Option<C>> = stream::iter(component_ids)
            .map(|component_id| async move { self.fetch_component::<C>(&component_id).await })
            .buffered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        VariantSet::gather(attempts)
    }

    async fn fetch_link_ids(
        &self,
        kind: ComponentKind,
        laptop_id: &LaptopId,
    ) -> Result<Vec<String>> {
        let query = RecordQuery::table(kind.junction_table())
            .select(&[kind.link_column()])
            .eq(LAPTOP_LINK_COLUMN, laptop_id.as_str());

        let rows = self.record_store.fetch_all(&query).await?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            match row.get(kind.link_column()).and_then(cell_text) {
                Some(id) => ids.push(id),
                None => self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Skipping {} link without {} for laptop {}",
                    kind,
                    kind.link_column(),
                    laptop_id
                )),
            }
        }
        Ok(ids)
    }

    /// Fetches a single component row; any failure drops just this id
    async fn fetch_component<C: Component>(&self, component_id: &str) -> Option<C> {
        let kind = C::KIND;
        let query = RecordQuery::table(kind.table())
            .select(kind.columns())
            .eq("id", component_id);

        let row = match self.record_store.fetch_first(&query).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Error fetching {} with id {}: no such row",
                    kind, component_id
                ));
                return None;
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Error fetching {} with id {}: {}",
                    kind, component_id, e
                ));
                return None;
            }
        };

        match serde_json::from_value::<C>(Value::Object(row)) {
            Ok(component) => Some(component),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Malformed {} with id {}: {}",
                    kind, component_id, e
                ));
                None
            }
        }
    }

    /// Lists the laptop's image folder and resolves public URLs in listing order
    async fn resolve_images(&self, laptop_id: &LaptopId) -> Option<Vec<String>> {
        let folder = laptop_id.image_folder();

        let files = match self.object_store.list_files(folder, None).await {
            Ok(files) => files,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Error fetching images from storage for laptop {}: {}",
                    laptop_id, e
                ));
                return None;
            }
        };

        if files.is_empty() {
            return None;
        }

        Some(
            files
                .iter()
                .map(|file| self.object_store.public_url(folder, &file.name))
                .collect(),
        )
    }
}

#[async_trait]
impl<RS, OS, PR> LaptopLoadingPort for LoadLaptopUseCase<RS, OS, PR>
where
    RS: RecordStore,
    OS: ObjectStore,
    PR: ProgressReporter,
{
    async fn load(&self, laptop_id: &LaptopId) -> Option<LaptopAggregate> {
        LoadLaptopUseCase::load(self, laptop_id).await
    }
}
