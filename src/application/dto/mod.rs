/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod added_laptop;
mod output_format;

pub use added_laptop::AddedLaptop;
pub use output_format::OutputFormat;
