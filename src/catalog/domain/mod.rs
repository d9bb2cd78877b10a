pub mod access;
pub mod aggregate;
pub mod component;
pub mod laptop;
pub mod laptop_draft;
pub mod variant_set;

pub use access::{AdminSession, AuthUser, Credentials, Role, Session};
pub use aggregate::LaptopAggregate;
pub use component::{
    CapacityUnit, Component, ComponentKind, GraphicCard, Processor, Ram, Screen, Storage,
    StorageType, LAPTOP_LINK_COLUMN,
};
pub use laptop::{Category, LaptopId, LaptopRecord, LaptopSummary};
pub use laptop_draft::{ImageUpload, LaptopDraft};
pub use variant_set::VariantSet;
