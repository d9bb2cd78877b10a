use crate::application::read_models::CatalogCard;
use crate::catalog::domain::{LaptopRecord, LaptopSummary};
use crate::ports::outbound::{ObjectStore, ProgressReporter, RecordQuery, RecordStore};
use crate::shared::Result;
use anyhow::Context;
use futures::stream::{self, StreamExt};
use serde_json::Value;

/// Default number of laptops on the catalog page
pub const DEFAULT_TOP_PICKS_LIMIT: usize = 5;

/// Image folders listed at once
pub const MAX_CONCURRENT_LISTINGS: usize = 10;

/// ListTopPicksUseCase - Builds the catalog page
///
/// Reads a page of laptops and looks up one thumbnail per laptop. A missing
/// or unreachable image folder only costs that laptop its thumbnail.
pub struct ListTopPicksUseCase<RS, OS, PR> {
    record_store: RS,
    object_store: OS,
    progress_reporter: PR,
}

impl<RS, OS, PR> ListTopPicksUseCase<RS, OS, PR>
where
    RS: RecordStore,
    OS: ObjectStore,
    PR: ProgressReporter,
{
    pub fn new(record_store: RS, object_store: OS, progress_reporter: PR) -> Self {
        Self {
            record_store,
            object_store,
            progress_reporter,
        }
    }

    /// Lists up to `limit` laptops with their thumbnails, in backend order
    ///
    /// # Errors
    /// Returns an error if the laptop table cannot be read or a row is malformed
    pub async fn execute(&self, limit: usize) -> Result<Vec<CatalogCard>> {
        self.progress_reporter
            .report(&format!("🛒 Fetching up to {} laptops...", limit));

        let query = RecordQuery::table(LaptopRecord::TABLE)
            .select(&LaptopSummary::COLUMNS)
            .limit(limit);
        let rows = self
            .record_store
            .fetch_all(&query)
            .await
            .context("Failed to fetch the laptop catalog")?;

        let summaries = rows
            .into_iter()
            .map(|row| serde_json::from_value::<LaptopSummary>(Value::Object(row)))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Malformed row in the laptop catalog")?;

        let laptop_ids: Vec<String> = summaries.iter().map(|s| s.id.clone()).collect();
        let thumbnails: Vec<Option<String>> = stream::iter(laptop_ids)
            .map(|laptop_id| async move { self.thumbnail(&laptop_id).await })
            .buffered(MAX_CONCURRENT_LISTINGS)
            .collect()
            .await;

        let cards: Vec<CatalogCard> = summaries
            .into_iter()
            .zip(thumbnails)
            .map(|(summary, thumbnail)| CatalogCard::new(summary, thumbnail))
            .collect();

        self.progress_reporter
            .report_completion(&format!("✅ Listed {} laptop(s)", cards.len()));

        Ok(cards)
    }

    async fn thumbnail(&self, laptop_id: &str) -> Option<String> {
        match self.object_store.list_files(laptop_id, Some(1)).await {
            Ok(files) => files
                .first()
                .map(|file| self.object_store.public_url(laptop_id, &file.name)),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Error fetching thumbnail for laptop {}: {}",
                    laptop_id, e
                ));
                None
            }
        }
    }
}
