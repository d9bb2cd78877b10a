/// Network adapters for the hosted backend (REST, storage and auth APIs)
mod auth_client;
mod backend_client;
mod rest_store;
mod storage_bucket;

pub use auth_client::AuthClient;
pub use backend_client::BackendClient;
pub use rest_store::RestRecordStore;
pub use storage_bucket::StorageBucket;
