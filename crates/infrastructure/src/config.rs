use serde::{Deserialize, Serialize};

use domain::DomainError;

/// Serial link parameters for the ventilation unit.
///
/// Defaults match the unit's factory configuration: 19200 baud, 8N1,
/// slave ID 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    pub device: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_data_bits")]
    pub data_bits: u8,
    #[serde(default = "default_parity")]
    pub parity: String,
    #[serde(default = "default_stop_bits")]
    pub stop_bits: u8,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_slave_id")]
    pub slave_id: u8,
}

fn default_baud_rate() -> u32 {
    19200
}
fn default_data_bits() -> u8 {
    8
}
fn default_parity() -> String {
    "none".to_string()
}
fn default_stop_bits() -> u8 {
    1
}
fn default_timeout_ms() -> u64 {
    5000
}
fn default_slave_id() -> u8 {
    1
}

impl SerialConfig {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            baud_rate: default_baud_rate(),
            data_bits: default_data_bits(),
            parity: default_parity(),
            stop_bits: default_stop_bits(),
            timeout_ms: default_timeout_ms(),
            slave_id: default_slave_id(),
        }
    }

    pub fn with_slave_id(mut self, slave_id: u8) -> Self {
        self.slave_id = slave_id;
        self
    }

    pub fn to_data_bits(&self) -> Result<tokio_serial::DataBits, DomainError> {
        match self.data_bits {
            5 => Ok(tokio_serial::DataBits::Five),
            6 => Ok(tokio_serial::DataBits::Six),
            7 => Ok(tokio_serial::DataBits::Seven),
            8 => Ok(tokio_serial::DataBits::Eight),
            _ => Err(DomainError::InvalidValue(format!(
                "invalid data bits: {}",
                self.data_bits
            ))),
        }
    }

    pub fn to_parity(&self) -> Result<tokio_serial::Parity, DomainError> {
        match self.parity.to_lowercase().as_str() {
            "n" | "none" => Ok(tokio_serial::Parity::None),
            "o" | "odd" => Ok(tokio_serial::Parity::Odd),
            "e" | "even" => Ok(tokio_serial::Parity::Even),
            _ => Err(DomainError::InvalidValue(format!(
                "invalid parity: {}",
                self.parity
            ))),
        }
    }

    pub fn to_stop_bits(&self) -> Result<tokio_serial::StopBits, DomainError> {
        match self.stop_bits {
            1 => Ok(tokio_serial::StopBits::One),
            2 => Ok(tokio_serial::StopBits::Two),
            _ => Err(DomainError::InvalidValue(format!(
                "invalid stop bits: {}",
                self.stop_bits
            ))),
        }
    }
}
