/// Catalog domain layer
///
/// Pure types and rules of the storefront catalog. Nothing in here talks
/// to the backend; the application layer feeds it through ports.
pub mod domain;
pub mod policies;
