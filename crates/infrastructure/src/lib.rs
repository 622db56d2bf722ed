//! Infrastructure layer - the serial Modbus-RTU transport adapter

pub mod config;
pub mod drivers;

pub use config::SerialConfig;
pub use drivers::RtuTransport;
