/// Mock implementations for testing
mod counting_record_store;
mod mock_progress_reporter;

pub use counting_record_store::CountingRecordStore;
pub use mock_progress_reporter::MockProgressReporter;
