use std::time::Duration;

use async_trait::async_trait;
use tokio_modbus::client::Context;
use tokio_modbus::prelude::*;
use tokio_serial::SerialStream;
use tracing::debug;

use domain::{DomainError, ModbusTransport};

use crate::config::SerialConfig;

/// Modbus-RTU transport over a serial port.
///
/// Owns framing, CRC and serial I/O via `tokio-modbus`. Each transaction is
/// bounded by the configured timeout. No retries here; failures surface to
/// the caller as-is.
pub struct RtuTransport {
    context: Context,
    timeout: Duration,
}

impl RtuTransport {
    /// Open the serial port and attach an RTU client for the configured
    /// slave.
    pub fn open(config: &SerialConfig) -> Result<Self, DomainError> {
        // Normalize port name for Windows
        let device = if cfg!(target_os = "windows") && !config.device.starts_with(r"\\.\") {
            format!(r"\\.\{}", config.device)
        } else {
            config.device.clone()
        };

        let builder = tokio_serial::new(&device, config.baud_rate)
            .data_bits(config.to_data_bits()?)
            .parity(config.to_parity()?)
            .stop_bits(config.to_stop_bits()?)
            .timeout(Duration::from_millis(config.timeout_ms));

        let port = SerialStream::open(&builder).map_err(|e| {
            let message = format!("failed to open serial port {device}: {e}");
            tracing::error!("{message}");
            DomainError::TransportError(message)
        })?;

        let context = tokio_modbus::client::rtu::attach_slave(port, Slave(config.slave_id));

        Ok(Self {
            context,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportError(format!(
            "Modbus request timed out after {}ms",
            self.timeout.as_millis()
        ))
    }
}

/// Collapse the doubled result of tokio-modbus (transport error outside,
/// device exception inside) into the domain's transport error.
fn flatten<T>(
    response: Result<Result<T, tokio_modbus::Exception>, tokio_modbus::Error>,
) -> Result<T, DomainError> {
    match response {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(exception)) => Err(DomainError::TransportError(format!(
            "Modbus exception: {exception}"
        ))),
        Err(error) => Err(DomainError::TransportError(format!(
            "Modbus transport error: {error}"
        ))),
    }
}

#[async_trait]
impl ModbusTransport for RtuTransport {
    async fn read_coils(&mut self, address: u16, count: u16) -> Result<Vec<bool>, DomainError> {
        debug!(address, count, "read_coils");
        let response = tokio::time::timeout(self.timeout, self.context.read_coils(address, count))
            .await
            .map_err(|_| self.timeout_error())?;
        flatten(response)
    }

    async fn read_holding_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, DomainError> {
        debug!(address, count, "read_holding_registers");
        let response = tokio::time::timeout(
            self.timeout,
            self.context.read_holding_registers(address, count),
        )
        .await
        .map_err(|_| self.timeout_error())?;
        flatten(response)
    }

    async fn write_coil(&mut self, address: u16, value: bool) -> Result<(), DomainError> {
        debug!(address, value, "write_coil");
        let response = tokio::time::timeout(
            self.timeout,
            self.context.write_single_coil(address, value),
        )
        .await
        .map_err(|_| self.timeout_error())?;
        flatten(response)
    }

    async fn write_register(&mut self, address: u16, value: u16) -> Result<(), DomainError> {
        debug!(address, value, "write_register");
        let response = tokio::time::timeout(
            self.timeout,
            self.context.write_single_register(address, value),
        )
        .await
        .map_err(|_| self.timeout_error())?;
        flatten(response)
    }
}
