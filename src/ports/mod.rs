//! Port traits between the catalog core and the outside world
//!
//! Inbound ports are what the CLI drives (loading a laptop). Outbound ports
//! are what the use cases need from the backend, the disk and the terminal.
pub mod inbound;
pub mod outbound;
