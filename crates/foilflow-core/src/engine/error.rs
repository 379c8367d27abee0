use super::config::ConfigError;
use crate::core::geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid {parameter} = {value}: {reason}")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Degenerate boundary geometry: {0}")]
    GeometryDegeneracy(String),

    #[error("Panel system cannot be solved to the required precision: {0}")]
    SingularSystem(String),

    #[error(
        "Grid point ({x}, {y}) at row {row}, column {col} coincides with the control point of panel {panel}"
    )]
    SingularPoint {
        row: usize,
        col: usize,
        panel: usize,
        x: f64,
        y: f64,
    },

    #[error("Airfoil geometry error: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
