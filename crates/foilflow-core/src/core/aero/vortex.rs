use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.3;
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m³

/// Stream function of a point vortex of strength `circulation` at distance
/// `radius`: `Γ/(2π)·ln r`.
///
/// Positive `Γ` turns clockwise, matching the panel ordering of the boundary.
#[inline]
pub fn stream_function(circulation: f64, radius: f64) -> f64 {
    circulation / (2.0 * PI) * radius.ln()
}

/// Velocity induced at `point` by a vortex at `center`.
///
/// The tangential speed `Γ/(2πr)` is decomposed with the bearing
/// `θ = atan2(Δy, Δx)` from the vortex to the point, giving
/// `(Vθ·sinθ, −Vθ·cosθ)`, i.e. `(∂ψ/∂y, −∂ψ/∂x)` of [`stream_function`].
#[inline]
pub fn induced_velocity(circulation: f64, center: &Point2<f64>, point: &Point2<f64>) -> Vector2<f64> {
    let delta = point - center;
    let radius = delta.norm();
    let tangential_speed = circulation / (2.0 * PI * radius);
    let (sin, cos) = delta.y.atan2(delta.x).sin_cos();
    Vector2::new(tangential_speed * sin, -tangential_speed * cos)
}

/// Incompressible Bernoulli pressure in kPa referenced to sea-level static
/// conditions.
#[inline]
pub fn bernoulli_pressure_kpa(velocity: &Vector2<f64>) -> f64 {
    SEA_LEVEL_PRESSURE_KPA - 0.5 * SEA_LEVEL_DENSITY * velocity.norm_squared() / 1000.0
}
