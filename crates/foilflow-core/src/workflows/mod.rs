//! # Workflows Module
//!
//! End-to-end procedures built from the [`core`](crate::core) geometry and
//! the [`engine`](crate::engine) solvers. Each workflow takes a validated
//! configuration and a [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - **Analysis** ([`analyze`]) - Boundary generation, panel solution and flow-field evaluation for one flow condition
//! - **Sweep** ([`sweep`]) - Lift coefficient over a range of angles of attack, with a fitted lift-curve slope

pub mod analyze;
pub mod sweep;
