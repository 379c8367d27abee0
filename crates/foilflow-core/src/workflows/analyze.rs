use crate::core::geometry::naca::Airfoil;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::field::{FieldResult, evaluate_field};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::solver::{SolverResult, solve};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub airfoil: Airfoil,
    pub solution: SolverResult,
    pub field: FieldResult,
}

#[instrument(skip_all, name = "analysis_workflow", fields(airfoil = %config.airfoil))]
pub fn run(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisResult, EngineError> {
    let airfoil = reporter.phase("Geometry", || {
        Airfoil::generate(config.airfoil, config.num_points).map_err(EngineError::from)
    })?;

    let solution = reporter.phase("Panel Solution", || {
        solve(airfoil.boundary(), &config.flow, &config.solver)
    })?;
    reporter.report(Progress::Message(format!(
        "{} at {:.2}°: Cl = {:.4}",
        airfoil.name(),
        config.flow.angle_of_attack_degrees(),
        solution.lift_coefficient
    )));

    let field = reporter.phase("Flow Field", || {
        evaluate_field(&solution, &config.flow, &config.grid, &config.field)
    })?;

    info!(
        lift_coefficient = solution.lift_coefficient,
        grid_points = config.grid.len(),
        "Analysis finished."
    );

    Ok(AnalysisResult {
        airfoil,
        solution,
        field,
    })
}
