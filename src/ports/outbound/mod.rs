/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend, file system, console).
pub mod auth_provider;
pub mod draft_reader;
pub mod formatter;
pub mod object_store;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_store;

pub use auth_provider::AuthProvider;
pub use draft_reader::DraftReader;
pub use formatter::LaptopFormatter;
pub use object_store::{ObjectStore, StoredFile};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_store::{cell_text, EqFilter, RecordQuery, RecordStore, Row};
