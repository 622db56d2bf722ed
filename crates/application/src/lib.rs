//! Application layer - the domain operations exposed to the HTTP surface
//!
//! One component lives here: [`VentilationGateway`], which owns the Modbus
//! transport behind a single mutex and implements the gateway's seven
//! operations as serialized wire transactions.

pub mod gateway;

pub use gateway::VentilationGateway;
