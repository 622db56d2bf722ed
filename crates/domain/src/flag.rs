use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Operating mode flags exposed by the ventilation unit, one coil each.
///
/// The coil assignments are fixed by the device firmware and never change
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagName {
    Away,
    LongAway,
    OverPressure,
    MaxHeating,
    MaxCooling,
    ManualBoost,
    SummerNightCooling,
}

impl FlagName {
    /// All flags, in the fixed reporting order.
    pub const ALL: [FlagName; 7] = [
        FlagName::Away,
        FlagName::LongAway,
        FlagName::OverPressure,
        FlagName::MaxHeating,
        FlagName::MaxCooling,
        FlagName::ManualBoost,
        FlagName::SummerNightCooling,
    ];

    /// Coil address of this flag.
    pub fn coil_address(&self) -> u16 {
        match self {
            Self::Away => 1,
            Self::LongAway => 2,
            Self::OverPressure => 3,
            Self::MaxHeating => 6,
            Self::MaxCooling => 7,
            Self::ManualBoost => 10,
            Self::SummerNightCooling => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Away => "away",
            Self::LongAway => "longAway",
            Self::OverPressure => "overPressure",
            Self::MaxHeating => "maxHeating",
            Self::MaxCooling => "maxCooling",
            Self::ManualBoost => "manualBoost",
            Self::SummerNightCooling => "summerNightCooling",
        }
    }
}

impl FromStr for FlagName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "away" => Ok(Self::Away),
            "longAway" => Ok(Self::LongAway),
            "overPressure" => Ok(Self::OverPressure),
            "maxHeating" => Ok(Self::MaxHeating),
            "maxCooling" => Ok(Self::MaxCooling),
            "manualBoost" => Ok(Self::ManualBoost),
            "summerNightCooling" => Ok(Self::SummerNightCooling),
            _ => Err(DomainError::UnknownIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coil_addresses() {
        assert_eq!(FlagName::Away.coil_address(), 1);
        assert_eq!(FlagName::LongAway.coil_address(), 2);
        assert_eq!(FlagName::OverPressure.coil_address(), 3);
        assert_eq!(FlagName::MaxHeating.coil_address(), 6);
        assert_eq!(FlagName::MaxCooling.coil_address(), 7);
        assert_eq!(FlagName::ManualBoost.coil_address(), 10);
        assert_eq!(FlagName::SummerNightCooling.coil_address(), 12);
    }

    #[test]
    fn test_round_trips_through_name() {
        for flag in FlagName::ALL {
            assert_eq!(flag.as_str().parse::<FlagName>(), Ok(flag));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            "notAFlag".parse::<FlagName>(),
            Err(DomainError::UnknownIdentifier("notAFlag".to_string()))
        );
    }
}
