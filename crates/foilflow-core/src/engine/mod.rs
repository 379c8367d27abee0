//! # Engine Module
//!
//! Numerical layer of the analysis: it turns a discretized boundary and a
//! flow condition into panel circulations, and those circulations into
//! stream-function, velocity and pressure fields.
//!
//! ## Architecture
//!
//! - **Solver** ([`solver`]) - Assembles the vortex-panel system with its trailing-edge row and solves it by dense LU
//! - **Field** ([`field`]) - Superposes the free stream and one point vortex per panel over a grid
//! - **Configuration** ([`config`]) - Tolerances, singularity handling and the analysis/sweep builders
//! - **Progress Monitoring** ([`progress`]) - Phase and task events forwarded to an optional callback
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Parallelism
//!
//! With the default `parallel` feature, grid rows are evaluated on the
//! `rayon` thread pool. Each cell sums its vortex terms in panel order, so
//! results do not depend on the feature.

pub mod config;
pub mod error;
pub mod field;
pub mod progress;
pub mod solver;
