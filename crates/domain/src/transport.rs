use async_trait::async_trait;

use crate::error::DomainError;

/// Transport port for the Modbus-RTU link.
///
/// Implementations own framing, CRC, serial I/O and any retry policy. This
/// layer only issues the four primitive transactions and propagates their
/// failures untouched as [`DomainError::TransportError`].
///
/// The trait gives no concurrency guarantee of its own; callers must
/// serialize access (see the gateway's access guard).
#[async_trait]
pub trait ModbusTransport: Send {
    /// Read `count` coils starting at `address`.
    async fn read_coils(&mut self, address: u16, count: u16) -> Result<Vec<bool>, DomainError>;

    /// Read `count` holding registers starting at `address`.
    async fn read_holding_registers(
        &mut self,
        address: u16,
        count: u16,
    ) -> Result<Vec<u16>, DomainError>;

    /// Write a single coil.
    async fn write_coil(&mut self, address: u16, value: bool) -> Result<(), DomainError>;

    /// Write a single holding register.
    async fn write_register(&mut self, address: u16, value: u16) -> Result<(), DomainError>;
}
