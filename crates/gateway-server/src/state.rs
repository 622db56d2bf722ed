use application::VentilationGateway;

/// Shared state of the HTTP surface: one gateway per process, one
/// ventilation unit per gateway.
pub struct AppState {
    pub gateway: VentilationGateway,
}

impl AppState {
    pub fn new(gateway: VentilationGateway) -> Self {
        Self { gateway }
    }
}
