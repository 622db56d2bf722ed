//! HTTP surface for the ventilation gateway

pub mod api;
pub mod state;
