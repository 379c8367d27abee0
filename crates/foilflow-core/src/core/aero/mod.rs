//! # Aerodynamics Module
//!
//! Elemental singularity solutions used by the panel solver and the field
//! evaluator.
//!
//! ## Key Components
//!
//! - [`influence`] - Closed-form normal and tangential influence coefficients of a
//!   linear-strength vortex panel on another panel's control point, including the
//!   self-influence limit and the distribution of panel shares to boundary nodes
//! - [`vortex`] - Point-vortex stream function and induced velocity, plus the
//!   Bernoulli pressure reference used for field output
//!
//! ## Sign Conventions
//!
//! Boundary points run clockwise (lower surface trailing edge to leading edge,
//! then upper surface back). With that ordering a positive circulation is
//! clockwise and produces positive lift in a free stream moving toward `+x`.

pub mod influence;
pub mod vortex;
