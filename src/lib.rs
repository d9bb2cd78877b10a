//! intech-storefront - Catalog toolkit for a laptop storefront
//!
//! Assembles laptop product pages from a hosted backend-as-a-service
//! (relational tables, object storage, password auth), lists the catalog
//! and lets administrators add laptops. Follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`catalog`): Laptop, component and access models and ordering policies
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST, storage and auth clients, in-memory backend, console and files
//! - **Shared** (`shared`): Error types, result alias and input validation
//!
//! # Example
//!
//! ```no_run
//! use intech_storefront::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let client =
//!     BackendClient::new("https://project.backend.test", "anon-key", Duration::from_secs(10))?;
//! let use_case = LoadLaptopUseCase::new(
//!     RestRecordStore::new(client.clone()),
//!     StorageBucket::new(client.clone(), "laptops")?,
//!     StderrProgressReporter::new(),
//! );
//!
//! if let Some(laptop) = use_case.load(&LaptopId::new("3f0c9a")?).await {
//!     println!("{}", JsonFormatter::new().format_aggregate(&laptop)?);
//! }
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::{BackendFixture, InMemoryBackend};
    pub use crate::adapters::outbound::network::{
        AuthClient, BackendClient, RestRecordStore, StorageBucket,
    };
    pub use crate::application::dto::{AddedLaptop, OutputFormat};
    pub use crate::application::read_models::{CatalogCard, LaptopConfiguration};
    pub use crate::application::use_cases::{
        AddLaptopUseCase, AuthorizeAdminUseCase, ListTopPicksUseCase, LoadLaptopUseCase,
        RootFetchError,
    };
    pub use crate::catalog::domain::{
        AdminSession, Credentials, GraphicCard, LaptopAggregate, LaptopDraft, LaptopId, Processor,
        Ram, Screen, Storage, VariantSet,
    };
    pub use crate::ports::inbound::LaptopLoadingPort;
    pub use crate::ports::outbound::{
        AuthProvider, DraftReader, LaptopFormatter, ObjectStore, OutputPresenter, ProgressReporter,
        RecordQuery, RecordStore,
    };
    pub use crate::shared::error::{ExitCode, StoreError};
    pub use crate::shared::Result;
}
