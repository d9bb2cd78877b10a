/// Implementations of the outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
/// Fixture and test backend
pub mod memory;
/// Hosted backend over HTTP
pub mod network;
