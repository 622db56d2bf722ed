use tokio::sync::Mutex;
use tracing::debug;

use domain::codec::decode_temperature;
use domain::error::Result;
use domain::{
    DeviceInformation, DomainError, FlagName, FlagSummary, ModbusTransport, Readings, SettingName,
    Settings,
};

/// Serialized access layer over one ventilation unit.
///
/// The transport sits behind a single `tokio::sync::Mutex`. Every operation
/// locks it once and holds it across all of its transport calls, so two
/// concurrent operations can never interleave transactions on the serial
/// link. The guard is released on every exit path, including transport
/// failures.
///
/// Identifier and value validation happen before the lock is taken; a
/// rejected request causes no device traffic at all.
pub struct VentilationGateway {
    transport: Mutex<Box<dyn ModbusTransport>>,
}

impl VentilationGateway {
    pub fn new(transport: Box<dyn ModbusTransport>) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    /// Current state of a single mode flag.
    pub async fn get_flag(&self, name: &str) -> Result<bool> {
        let flag: FlagName = name.parse()?;

        let mut transport = self.transport.lock().await;
        let bits = read_coil_block(transport.as_mut(), flag.coil_address(), 1).await?;

        Ok(bits[0])
    }

    /// Enable or disable a single mode flag.
    pub async fn set_flag(&self, name: &str, value: bool) -> Result<()> {
        let flag: FlagName = name.parse()?;
        debug!(flag = %flag, value, "writing mode flag");

        let mut transport = self.transport.lock().await;
        transport.write_coil(flag.coil_address(), value).await
    }

    /// All mode flags in one snapshot.
    ///
    /// Two coil transactions under one guard acquisition, so a concurrent
    /// write cannot show up as a torn summary.
    pub async fn flag_summary(&self) -> Result<FlagSummary> {
        let mut transport = self.transport.lock().await;

        let bits = read_coil_block(transport.as_mut(), 1, 10).await?;
        let night = read_coil_block(transport.as_mut(), 12, 1).await?;

        Ok(FlagSummary {
            away: bits[0],
            long_away: bits[1],
            over_pressure: bits[2],
            max_heating: bits[5],
            max_cooling: bits[6],
            manual_boost: bits[9],
            summer_night_cooling: night[0],
        })
    }

    /// Sensor readings.
    ///
    /// The block boundaries mirror the device's addressable ranges; a
    /// differently-grouped read is a different wire transaction and may be
    /// rejected by the firmware, so the grouping and order are fixed.
    pub async fn readings(&self) -> Result<Readings> {
        let mut transport = self.transport.lock().await;

        let temps = read_register_block(transport.as_mut(), 6, 8).await?;
        let recovery = read_register_block(transport.as_mut(), 29, 7).await?;
        let cascade = read_register_block(transport.as_mut(), 47, 3).await?;
        let pressure = read_register_block(transport.as_mut(), 56, 1).await?;
        let level = read_register_block(transport.as_mut(), 50, 1).await?;

        Ok(Readings {
            fresh_air_temperature: decode_temperature(temps[0]),
            supply_air_temperature_after_heat_recovery: decode_temperature(temps[1]),
            supply_air_temperature: decode_temperature(temps[2]),
            waste_air_temperature: decode_temperature(temps[3]),
            exhaust_air_temperature: decode_temperature(temps[4]),
            exhaust_air_temperature_before_heat_recovery: decode_temperature(temps[5]),
            exhaust_air_humidity: temps[7],
            heat_recovery_supply_side: recovery[0],
            heat_recovery_exhaust_side: recovery[1],
            heat_recovery_temperature_difference_supply_side: decode_temperature(recovery[2]),
            heat_recovery_temperature_difference_exhaust_side: decode_temperature(recovery[3]),
            mean_48_hour_exhaust_humidity: recovery[6],
            cascade_sp: cascade[0],
            cascade_p: cascade[1],
            cascade_i: cascade[2],
            over_pressure_time_left: pressure[0],
            ventilation_level_actual: level[0],
        })
    }

    /// Current values of the writable settings.
    pub async fn settings(&self) -> Result<Settings> {
        let mut transport = self.transport.lock().await;

        let level = read_register_block(transport.as_mut(), 53, 1).await?;
        let target = read_register_block(transport.as_mut(), 135, 1).await?;

        Ok(Settings {
            ventilation_level: level[0],
            temperature_target: decode_temperature(target[0]),
        })
    }

    /// Validate and write a setting.
    pub async fn set_setting(&self, name: &str, raw_value: &str) -> Result<()> {
        let setting: SettingName = name.parse()?;
        let word = setting.validate(raw_value)?;
        debug!(setting = %setting, word, "writing setting");

        let mut transport = self.transport.lock().await;
        transport.write_register(setting.register_address(), word).await
    }

    /// Static identity of the connected unit.
    pub async fn device_information(&self) -> Result<DeviceInformation> {
        let mut transport = self.transport.lock().await;

        let fan = read_coil_block(transport.as_mut(), 16, 1).await?;
        let heating = read_register_block(transport.as_mut(), 136, 1).await?;
        let identity = read_register_block(transport.as_mut(), 597, 3).await?;

        Ok(DeviceInformation {
            fan_type: fan[0],
            heating_configuration_mode: heating[0],
            family_type: identity[0],
            serial_number: identity[1],
            software_version: identity[2],
        })
    }
}

/// Reads a coil block and rejects short responses so later indexing stays
/// in bounds.
async fn read_coil_block(
    transport: &mut dyn ModbusTransport,
    address: u16,
    count: u16,
) -> Result<Vec<bool>> {
    let bits = transport.read_coils(address, count).await?;
    if bits.len() < count as usize {
        return Err(DomainError::TransportError(format!(
            "short read at coil {address}: expected {count} bits, got {}",
            bits.len()
        )));
    }
    Ok(bits)
}

async fn read_register_block(
    transport: &mut dyn ModbusTransport,
    address: u16,
    count: u16,
) -> Result<Vec<u16>> {
    let words = transport.read_holding_registers(address, count).await?;
    if words.len() < count as usize {
        return Err(DomainError::TransportError(format!(
            "short read at register {address}: expected {count} words, got {}",
            words.len()
        )));
    }
    Ok(words)
}
