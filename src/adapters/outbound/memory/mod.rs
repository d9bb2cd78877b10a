/// In-memory backend used for offline runs and tests
mod fixture;
mod in_memory_backend;

pub use fixture::{BackendFixture, FixtureUser};
pub use in_memory_backend::InMemoryBackend;
