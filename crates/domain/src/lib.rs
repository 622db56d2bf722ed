//! Domain layer - ventilation unit model, free of any I/O
//!
//! This crate contains:
//! - Identifier enumerations with their fixed coil/register addresses
//! - The fixed-point temperature codec
//! - Setting validation rules
//! - The transport port (trait) the gateway talks through
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod codec;
pub mod error;
pub mod flag;
pub mod setting;
pub mod transport;
pub mod values;

// Re-export commonly used types
pub use error::DomainError;
pub use flag::FlagName;
pub use setting::SettingName;
pub use transport::ModbusTransport;
pub use values::{DeviceInformation, FlagSummary, Readings, Settings};
