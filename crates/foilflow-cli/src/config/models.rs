use foilflow::core::models::airfoil::AirfoilParameters;
use foilflow::core::models::flow::FlowCondition;
use foilflow::engine::config::{AnalysisConfig, SolverConfig, SweepConfig};

/// Geometry-only settings for the `geometry` subcommand.
pub struct GeometrySettings {
    pub airfoil: AirfoilParameters,
    pub num_points: usize,
}

/// Settings for the `solve` subcommand.
pub struct SolveSettings {
    pub airfoil: AirfoilParameters,
    pub num_points: usize,
    pub flow: FlowCondition,
    pub solver: SolverConfig,
}

pub type FieldSettings = AnalysisConfig;
pub type SweepSettings = SweepConfig;
