//! # Geometry Module
//!
//! Generation of airfoil boundaries from shape parameters.
//!
//! - [`naca`] - NACA 4-digit thickness and camber distributions and the
//!   boundary sampler that feeds the panel solver

use thiserror::Error;

pub mod naca;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Parameter '{parameter}' = {value} is out of range: expected {expected}")]
    Domain {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Chordwise position {x} lies outside the airfoil [0, {chord}]")]
    OutsideChord { x: f64, chord: f64 },

    #[error("Degenerate airfoil geometry: {0}")]
    Degenerate(String),

    #[error("Invalid NACA 4-digit designation: '{0}'")]
    InvalidDesignation(String),
}
