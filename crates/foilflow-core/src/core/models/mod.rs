//! # Core Models Module
//!
//! Plain data types shared by every stage of the analysis: the airfoil shape
//! parameters, the discretized boundary and its panels, the free-stream flow
//! condition, and the evaluation grid used for field output.
//!
//! ## Key Components
//!
//! - [`airfoil`] - Validated NACA 4-digit shape parameters and designation parsing
//! - [`boundary`] - Ordered boundary points and the straight panels between them
//! - [`flow`] - Free-stream speed and angle of attack
//! - [`grid`] - Rectangular evaluation lattice for stream function, velocity and pressure
//!
//! ## Usage
//!
//! ```ignore
//! use foilflow::core::models::{airfoil::AirfoilParameters, flow::FlowCondition};
//!
//! let params = AirfoilParameters::from_designation("2412", 1.0)?;
//! let flow = FlowCondition::from_degrees(55.0, 4.0);
//! ```

pub mod airfoil;
pub mod boundary;
pub mod flow;
pub mod grid;
