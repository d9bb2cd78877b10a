/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the catalog domain and reaches the backend,
/// the file system and the console only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
