use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Writable settings, one holding register each.
///
/// Each setting has a closed validity range in user-facing units. The
/// temperature target is entered in whole degrees and stored on the device
/// in tenths, so it is scaled by 10 before the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingName {
    VentilationLevel,
    TemperatureTarget,
}

impl SettingName {
    /// Holding register address of this setting.
    pub fn register_address(&self) -> u16 {
        match self {
            Self::VentilationLevel => 53,
            Self::TemperatureTarget => 135,
        }
    }

    /// Accepted input range, pre-scaling.
    pub fn valid_range(&self) -> RangeInclusive<i64> {
        match self {
            Self::VentilationLevel => 20..=100,
            Self::TemperatureTarget => 10..=30,
        }
    }

    /// Validates a candidate value and returns the register word to write.
    ///
    /// Performs no device I/O. Non-integer input and out-of-range values
    /// are rejected before anything reaches the transport.
    pub fn validate(&self, raw: &str) -> Result<u16, DomainError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidValue(format!("not an integer: {raw}")))?;

        if !self.valid_range().contains(&value) {
            return Err(DomainError::InvalidValue(format!(
                "{} must be within {:?}, got {value}",
                self.as_str(),
                self.valid_range(),
            )));
        }

        let word = match self {
            Self::VentilationLevel => value,
            Self::TemperatureTarget => value * 10,
        };

        Ok(word as u16)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VentilationLevel => "ventilationLevel",
            Self::TemperatureTarget => "temperatureTarget",
        }
    }
}

impl FromStr for SettingName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ventilationLevel" => Ok(Self::VentilationLevel),
            "temperatureTarget" => Ok(Self::TemperatureTarget),
            _ => Err(DomainError::UnknownIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
