use serde::Deserialize;

pub mod store;

/// Runtime toggles that entrypoints consult per request.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub synthetic_opponents: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            synthetic_opponents: true,
        }
    }
}
