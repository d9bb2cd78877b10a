use crate::application::dto::AddedLaptop;
use crate::catalog::domain::{
    Component, ImageUpload, LaptopDraft, LaptopRecord, LAPTOP_LINK_COLUMN,
};
use crate::ports::outbound::{cell_text, ObjectStore, ProgressReporter, RecordStore, Row};
use crate::shared::error::StoreError;
use crate::shared::Result;
use chrono::Utc;
use serde_json::{json, Value};

/// AddLaptopUseCase - Writes a new laptop from the admin entry form
///
/// Inserts the root row, then every component option with its junction row,
/// then uploads the images. Requests are issued one at a time so the first
/// failure stops the sequence. Rows written before a failure are not rolled
/// back.
pub struct AddLaptopUseCase<RS, OS, PR> {
    record_store: RS,
    object_store: OS,
    progress_reporter: PR,
}

impl<RS, OS, PR> AddLaptopUseCase<RS, OS, PR>
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

    /// Validates and stores a draft with its images
    ///
    /// # Errors
    /// - `StoreError::Validation` if the draft breaks any form rule (nothing is written)
    /// - `StoreError::CreationFailed` naming the step that failed
    pub async fn execute(
        &self,
        draft: &LaptopDraft,
        images: Vec<ImageUpload>,
    ) -> Result<AddedLaptop> {
        let category = draft.validate()?;

        self.progress_reporter.report(&format!(
            "🆕 Creating {} {}...",
            draft.brand.trim(),
            draft.model.trim()
        ));

        let root_row = draft.root_row(category);
        let root = self
            .insert_row(LaptopRecord::TABLE, root_row, "inserting the laptop")
            .await?;
        let laptop_id = row_id(&root, "inserting the laptop")?;

        self.link_all(&laptop_id, &draft.graphic_cards).await?;
        self.link_all(&laptop_id, &draft.processors).await?;
        self.link_all(&laptop_id, &draft.rams).await?;
        self.link_all(&laptop_id, &draft.screens).await?;
        self.link_all(&laptop_id, &draft.storages).await?;

        let image_urls = self.upload_images(&laptop_id, draft, images).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Created laptop {} with {} image(s)",
            laptop_id,
            image_urls.len()
        ));

        Ok(AddedLaptop {
            laptop_id,
            image_urls,
        })
    }

    /// Inserts each option followed by the junction row pointing at it
    async fn link_all<C: Component>(&self, laptop_id: &str, options: &[C]) -> Result<()> {
        let kind = C::KIND;

        for (index, option) in options.iter().enumerate() {
            let step = format!("inserting {} {} of {}", kind, index + 1, options.len());
            let value = serde_json::to_value(option).map_err(|e| creation_failed(&step, e))?;

            let row = self.insert_row(kind.table(), value, &step).await?;
            let component_id = row_id(&row, &step)?;

            let link_step = format!("linking {} {} of {}", kind, index + 1, options.len());
            self.insert_row(
                &kind.junction_table(),
                json!({
                    LAPTOP_LINK_COLUMN: laptop_id,
                    kind.link_column(): component_id,
                }),
                &link_step,
            )
            .await?;
        }
        Ok(())
    }

    async fn upload_images(
        &self,
        laptop_id: &str,
        draft: &LaptopDraft,
        images: Vec<ImageUpload>,
    ) -> Result<Vec<String>> {
        let millis = Utc::now().timestamp_millis();
        let total = images.len();
        let mut urls = Vec::with_capacity(total);

        for (index, image) in images.into_iter().enumerate() {
            let number = index + 1;
            let file_name = upload_file_name(draft, millis, number, image.extension());
            let path = format!("{}/{}", laptop_id, file_name);
            let step = format!(
                "uploading image {} of {} ({})",
                number, total, image.file_name
            );

            self.object_store
                .upload(&path, image.content_type, image.bytes)
                .await
                .map_err(|e| creation_failed(&step, e))?;

            self.progress_reporter
                .report_progress(number, total, Some(&image.file_name));
            urls.push(self.object_store.public_url(laptop_id, &file_name));
        }

        Ok(urls)
    }

    async fn insert_row(&self, table: &str, row: Value, step: &str) -> Result<Row> {
        self.record_store
            .insert(table, row)
            .await
            .map_err(|e| creation_failed(step, e))
    }
}

fn creation_failed(step: &str, details: impl std::fmt::Display) -> anyhow::Error {
    StoreError::CreationFailed {
        step: step.to_string(),
        details: details.to_string(),
    }
    .into()
}

fn row_id(row: &Row, step: &str) -> Result<String> {
    row.get("id")
        .and_then(cell_text)
        .ok_or_else(|| creation_failed(step, "the backend returned the row without an id"))
}

/// `<brand>-<model>-<millis>-<n>.<ext>`, with anything unsafe in a path replaced
fn upload_file_name(draft: &LaptopDraft, millis: i64, number: usize, extension: &str) -> String {
    format!(
        "{}-{}-{}-{}.{}",
        slug(&draft.brand),
        slug(&draft.model),
        millis,
        number,
        extension
    )
}

fn slug(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
