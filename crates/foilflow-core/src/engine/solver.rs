use super::config::SolverConfig;
use super::error::EngineError;
use crate::core::aero::influence::{InfluenceFault, InfluenceMatrices};
use crate::core::models::boundary::{Boundary, BoundaryPoint, Panel};
use crate::core::models::flow::FlowCondition;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, info, instrument};

pub const MIN_PANELS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub panels: Vec<Panel>,
    /// Vortex-sheet strength at each of the `m + 1` boundary nodes,
    /// non-dimensionalised by the free-stream speed.
    pub nodal_circulation: Vec<f64>,
    /// Surface speed at each control point over the free-stream speed.
    pub tangential_velocity: Vec<f64>,
    /// Signed circulation `Γ_i = V∞·V_i·s_i` of each panel.
    pub circulation: Vec<f64>,
    pub pressure_coefficient: Vec<f64>,
    pub lift_coefficient: f64,
    pub chord: f64,
    pub flow: FlowCondition,
}

impl SolverResult {
    pub fn num_panels(&self) -> usize {
        self.panels.len()
    }

    pub fn control_points(&self) -> Vec<BoundaryPoint> {
        self.panels.iter().map(|p| p.control_point).collect()
    }

    pub fn total_circulation(&self) -> f64 {
        self.circulation.iter().sum()
    }

    /// `γ_0 + γ_m`; zero up to round-off when the trailing-edge row holds.
    pub fn kutta_residual(&self) -> f64 {
        match (self.nodal_circulation.first(), self.nodal_circulation.last()) {
            (Some(first), Some(last)) => first + last,
            _ => 0.0,
        }
    }
}

/// Solves the vortex-panel system for one flow condition.
#[instrument(skip_all, name = "panel_solver", fields(panels = boundary.num_panels()))]
pub fn solve(
    boundary: &Boundary,
    flow: &FlowCondition,
    config: &SolverConfig,
) -> Result<SolverResult, EngineError> {
    validate_flow(flow)?;

    let m = boundary.num_panels();
    if m < MIN_PANELS {
        return Err(EngineError::Domain {
            parameter: "panel count",
            value: m as f64,
            reason: "at least 3 panels are required",
        });
    }

    let panels = boundary.panels();
    if let Some((i, panel)) = panels
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.length > config.min_panel_length))
    {
        return Err(EngineError::GeometryDegeneracy(format!(
            "panel {} has length {:e}",
            i, panel.length
        )));
    }

    let chord = boundary.chord();
    if !(chord > 0.0) {
        return Err(EngineError::GeometryDegeneracy(
            "boundary has no streamwise extent".to_string(),
        ));
    }

    let alpha = flow.angle_of_attack;
    let matrices = InfluenceMatrices::compute(&panels, config.min_panel_length)
        .map_err(|(target, source, fault)| degeneracy_for(target, source, fault))?;

    let system = assemble_system(&matrices);
    let rhs = DVector::from_fn(m + 1, |i, _| {
        if i < m {
            (panels[i].angle - alpha).sin()
        } else {
            0.0
        }
    });
    debug!(size = m + 1, "Panel system assembled.");

    let gamma = solve_dense(system, &rhs, config)?;

    let surface = matrices.nodal_tangential() * &gamma;
    let tangential_velocity: Vec<f64> = panels
        .iter()
        .zip(surface.iter())
        .map(|(panel, induced)| (panel.angle - alpha).cos() + induced)
        .collect();

    let speed = flow.free_stream_speed;
    let circulation: Vec<f64> = panels
        .iter()
        .zip(&tangential_velocity)
        .map(|(panel, v)| speed * v * panel.length)
        .collect();
    let pressure_coefficient = tangential_velocity.iter().map(|v| 1.0 - v * v).collect();
    let lift_coefficient = circulation.iter().map(|g| 2.0 * g).sum::<f64>() / (speed * chord);

    info!(
        lift_coefficient,
        alpha_deg = flow.angle_of_attack_degrees(),
        "Panel system solved."
    );

    Ok(SolverResult {
        panels,
        nodal_circulation: gamma.iter().copied().collect(),
        tangential_velocity,
        circulation,
        pressure_coefficient,
        lift_coefficient,
        chord,
        flow: *flow,
    })
}

fn validate_flow(flow: &FlowCondition) -> Result<(), EngineError> {
    if !(flow.free_stream_speed > 0.0 && flow.free_stream_speed.is_finite()) {
        return Err(EngineError::Domain {
            parameter: "free-stream speed",
            value: flow.free_stream_speed,
            reason: "must be positive and finite",
        });
    }
    if !flow.angle_of_attack.is_finite() {
        return Err(EngineError::Domain {
            parameter: "angle of attack",
            value: flow.angle_of_attack,
            reason: "must be finite",
        });
    }
    Ok(())
}

/// Flow-tangency rows for every control point followed by the trailing-edge
/// row `γ_0 + γ_m = 0`.
fn assemble_system(matrices: &InfluenceMatrices) -> DMatrix<f64> {
    let m = matrices.num_panels();
    let mut system = matrices.nodal_normal().insert_row(m, 0.0);
    system[(m, 0)] = 1.0;
    system[(m, m)] = 1.0;
    system
}

fn solve_dense(
    system: DMatrix<f64>,
    rhs: &DVector<f64>,
    config: &SolverConfig,
) -> Result<DVector<f64>, EngineError> {
    let lu = system.clone().lu();

    let pivots = lu.u().diagonal().map(f64::abs);
    let largest = pivots.max();
    let smallest = pivots.min();
    if !(smallest > largest * config.pivot_tolerance) {
        return Err(EngineError::SingularSystem(format!(
            "pivot ratio {:e} is below {:e}",
            if largest > 0.0 { smallest / largest } else { 0.0 },
            config.pivot_tolerance
        )));
    }

    let gamma = lu.solve(rhs).ok_or_else(|| {
        EngineError::SingularSystem("LU decomposition has a zero pivot".to_string())
    })?;
    if gamma.iter().any(|g| !g.is_finite()) {
        return Err(EngineError::SingularSystem(
            "solution contains non-finite strengths".to_string(),
        ));
    }

    let scale = system.norm() * gamma.norm() + rhs.norm();
    let residual = (&system * &gamma - rhs).norm();
    if scale > 0.0 && residual / scale > config.residual_tolerance {
        return Err(EngineError::SingularSystem(format!(
            "relative residual {:e} exceeds {:e}",
            residual / scale,
            config.residual_tolerance
        )));
    }
    Ok(gamma)
}

fn degeneracy_for(target: usize, source: usize, fault: InfluenceFault) -> EngineError {
    match fault {
        InfluenceFault::ZeroLengthPanel => {
            EngineError::GeometryDegeneracy(format!("panel {} has zero length", source))
        }
        InfluenceFault::CoincidentNode => EngineError::GeometryDegeneracy(format!(
            "control point of panel {} lies on a node of panel {}",
            target, source
        )),
    }
}
