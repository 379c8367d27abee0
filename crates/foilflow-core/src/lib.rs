//! # foilflow Core Library
//!
//! Inviscid, incompressible analysis of NACA 4-digit airfoils with the
//! constant-strength vortex-panel method: boundary generation, panel
//! circulation, lift and pressure coefficients, and superposed flow fields.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture. Each layer only depends on
//! the ones below it, and the three main stages are plain functions composed
//! explicitly by the caller.
//!
//! - **[`core`]: The Foundation.** Validated data models (`AirfoilParameters`,
//!   `Boundary`, `FlowCondition`, `Grid`), NACA thickness/camber geometry, and the
//!   closed-form panel influence and point-vortex terms.
//!
//! - **[`engine`]: The Numerical Core.** Assembly and LU solution of the
//!   panel system with its trailing-edge condition, and evaluation of the stream
//!   function, velocity and pressure fields over a grid.
//!
//! - **[`workflows`]: The Public API.** Complete procedures (single-condition
//!   analysis, angle-of-attack sweep) with progress reporting.
//!
//! ## Example
//!
//! ```no_run
//! use foilflow::core::models::airfoil::AirfoilParameters;
//! use foilflow::core::models::flow::FlowCondition;
//! use foilflow::core::models::grid::Grid;
//! use foilflow::engine::config::{FieldConfig, SolverConfig};
//! use foilflow::{evaluate_field, generate_boundary, solve};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = AirfoilParameters::from_designation("2412", 1.0)?;
//! let boundary = generate_boundary(&params, 70)?;
//! let flow = FlowCondition::from_degrees(55.0, 4.0);
//! let solution = solve(&boundary, &flow, &SolverConfig::default())?;
//! let grid = Grid::around_chord(1.0, 100);
//! let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default())?;
//! println!("Cl = {:.4}, {} cells", solution.lift_coefficient, field.grid.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::geometry::naca::calculate_border as generate_boundary;
pub use crate::engine::field::evaluate_field;
pub use crate::engine::solver::solve;
