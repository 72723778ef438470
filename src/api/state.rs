use crate::calculator::AzimuthCalculator;
use crate::config::ServerConfig;
use crate::geodesy::GeodesyEngine;

/// Shared handler state
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub calculator: AzimuthCalculator,
    pub max_batch_rows: usize,
}

impl AppState {
    pub fn new(calculator: AzimuthCalculator, max_batch_rows: usize) -> Self {
        Self {
            calculator,
            max_batch_rows,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            AzimuthCalculator::new(GeodesyEngine::new(config.ellipsoid)),
            config.max_batch_rows,
        )
    }
}
