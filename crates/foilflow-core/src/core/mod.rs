//! # Core Module
//!
//! Stateless building blocks of the vortex-panel analysis: data models,
//! NACA 4-digit geometry generation, and the elemental aerodynamic
//! singularity solutions.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Airfoil parameters, boundary and panels, flow condition, grids
//! - **Geometry** ([`geometry`]) - Thickness/camber distributions and boundary sampling
//! - **Aerodynamics** ([`aero`]) - Panel influence coefficients and point-vortex superposition terms
//!
//! Everything here is a pure function of its inputs. Linear-system assembly,
//! field evaluation and their configuration live in [`crate::engine`].

pub mod aero;
pub mod geometry;
pub mod models;
