/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod laptop_loading_port;

pub use laptop_loading_port::LaptopLoadingPort;
