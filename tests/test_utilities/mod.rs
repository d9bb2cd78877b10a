#![allow(dead_code)]

/// Shared helpers for integration and end-to-end tests
pub mod mocks;

use intech_storefront::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

pub const PUBLIC_BASE_URL: &str = "https://cdn.intech.test/laptops";

pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// In-memory backend seeded from `tests/fixtures/catalog.json`
pub fn catalog_backend() -> Arc<InMemoryBackend> {
    let fixture = BackendFixture::load(&fixtures_path().join("catalog.json")).unwrap();
    Arc::new(InMemoryBackend::from_fixture(fixture, PUBLIC_BASE_URL))
}
