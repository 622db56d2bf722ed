use serde::Serialize;

/// Snapshot of all operating mode flags.
///
/// Field order is the fixed reporting order, which serde preserves when
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagSummary {
    pub away: bool,
    pub long_away: bool,
    pub over_pressure: bool,
    pub max_heating: bool,
    pub max_cooling: bool,
    pub manual_boost: bool,
    pub summer_night_cooling: bool,
}

/// Sensor readings assembled from the device's register blocks.
///
/// Temperatures are decoded to degrees; humidity percentages, cascade
/// controller values and counters pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readings {
    pub fresh_air_temperature: f64,
    pub supply_air_temperature_after_heat_recovery: f64,
    pub supply_air_temperature: f64,
    pub waste_air_temperature: f64,
    pub exhaust_air_temperature: f64,
    pub exhaust_air_temperature_before_heat_recovery: f64,
    pub exhaust_air_humidity: u16,
    pub heat_recovery_supply_side: u16,
    pub heat_recovery_exhaust_side: u16,
    pub heat_recovery_temperature_difference_supply_side: f64,
    pub heat_recovery_temperature_difference_exhaust_side: f64,
    #[serde(rename = "mean48HourExhaustHumidity")]
    pub mean_48_hour_exhaust_humidity: u16,
    pub cascade_sp: u16,
    pub cascade_p: u16,
    pub cascade_i: u16,
    pub over_pressure_time_left: u16,
    pub ventilation_level_actual: u16,
}

/// Current values of the writable settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub ventilation_level: u16,
    pub temperature_target: f64,
}

/// Static identity of the connected unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInformation {
    /// EC (true) or AC (false) fan motors.
    pub fan_type: bool,
    pub heating_configuration_mode: u16,
    pub family_type: u16,
    pub serial_number: u16,
    pub software_version: u16,
}
