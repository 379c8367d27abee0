use crate::core::models::airfoil::AirfoilParameters;
use crate::core::models::flow::FlowCondition;
use crate::core::models::grid::Grid;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GRID_RESOLUTION: usize = 100;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// What the field evaluator does when a grid point falls on a vortex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingularityPolicy {
    /// Fail with [`EngineError::SingularPoint`](super::error::EngineError::SingularPoint).
    #[default]
    Reject,
    /// Drop the offending vortex term for that grid cell and report the cell.
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Panels shorter than this are treated as degenerate.
    pub min_panel_length: f64,
    /// Smallest admissible ratio between the smallest and largest LU pivot.
    pub pivot_tolerance: f64,
    /// Largest admissible relative residual of the solved system.
    pub residual_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_panel_length: 1e-12,
            pivot_tolerance: 1e-12,
            residual_tolerance: 1e-8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Distance below which a grid point counts as coincident with a vortex.
    pub singular_radius: f64,
    pub singularity_policy: SingularityPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            singular_radius: 1e-9,
            singularity_policy: SingularityPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub airfoil: AirfoilParameters,
    pub num_points: usize,
    pub flow: FlowCondition,
    pub grid: Grid,
    pub solver: SolverConfig,
    pub field: FieldConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    airfoil: Option<AirfoilParameters>,
    num_points: Option<usize>,
    flow: Option<FlowCondition>,
    grid: Option<Grid>,
    solver: Option<SolverConfig>,
    field: Option<FieldConfig>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airfoil(mut self, params: AirfoilParameters) -> Self {
        self.airfoil = Some(params);
        self
    }
    pub fn num_points(mut self, n: usize) -> Self {
        self.num_points = Some(n);
        self
    }
    pub fn flow(mut self, flow: FlowCondition) -> Self {
        self.flow = Some(flow);
        self
    }
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }
    pub fn solver_config(mut self, config: SolverConfig) -> Self {
        self.solver = Some(config);
        self
    }
    pub fn field_config(mut self, config: FieldConfig) -> Self {
        self.field = Some(config);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let airfoil = self
            .airfoil
            .ok_or(ConfigError::MissingParameter("airfoil"))?;
        let grid = self
            .grid
            .unwrap_or_else(|| Grid::around_chord(airfoil.chord(), DEFAULT_GRID_RESOLUTION));
        if grid.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "grid",
                reason: "grid has no points".to_string(),
            });
        }

        Ok(AnalysisConfig {
            airfoil,
            num_points: self
                .num_points
                .ok_or(ConfigError::MissingParameter("num_points"))?,
            flow: self.flow.ok_or(ConfigError::MissingParameter("flow"))?,
            grid,
            solver: self.solver.unwrap_or_default(),
            field: self.field.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub airfoil: AirfoilParameters,
    pub num_points: usize,
    pub free_stream_speed: f64,
    /// Angles of attack in radians, in the order they are reported.
    pub angles_of_attack: Vec<f64>,
    pub solver: SolverConfig,
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    airfoil: Option<AirfoilParameters>,
    num_points: Option<usize>,
    free_stream_speed: Option<f64>,
    angles_of_attack: Option<Vec<f64>>,
    solver: Option<SolverConfig>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airfoil(mut self, params: AirfoilParameters) -> Self {
        self.airfoil = Some(params);
        self
    }
    pub fn num_points(mut self, n: usize) -> Self {
        self.num_points = Some(n);
        self
    }
    pub fn free_stream_speed(mut self, speed: f64) -> Self {
        self.free_stream_speed = Some(speed);
        self
    }
    pub fn angles_of_attack(mut self, radians: Vec<f64>) -> Self {
        self.angles_of_attack = Some(radians);
        self
    }
    /// Inclusive range in degrees, e.g. `-4..=9` in steps of `1`.
    pub fn angle_range_degrees(self, start: f64, end: f64, step: f64) -> Result<Self, ConfigError> {
        let angles = degree_range(start, end, step)?
            .into_iter()
            .map(f64::to_radians)
            .collect();
        Ok(self.angles_of_attack(angles))
    }
    pub fn solver_config(mut self, config: SolverConfig) -> Self {
        self.solver = Some(config);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let angles_of_attack = self
            .angles_of_attack
            .ok_or(ConfigError::MissingParameter("angles_of_attack"))?;
        if angles_of_attack.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "angles_of_attack",
                reason: "at least one angle of attack is required".to_string(),
            });
        }

        Ok(SweepConfig {
            airfoil: self
                .airfoil
                .ok_or(ConfigError::MissingParameter("airfoil"))?,
            num_points: self
                .num_points
                .ok_or(ConfigError::MissingParameter("num_points"))?,
            free_stream_speed: self
                .free_stream_speed
                .ok_or(ConfigError::MissingParameter("free_stream_speed"))?,
            angles_of_attack,
            solver: self.solver.unwrap_or_default(),
        })
    }
}

fn degree_range(start: f64, end: f64, step: f64) -> Result<Vec<f64>, ConfigError> {
    if !(step > 0.0) || !start.is_finite() || !end.is_finite() || end < start {
        return Err(ConfigError::InvalidParameter {
            parameter: "angle_range",
            reason: format!("cannot step from {start} to {end} by {step}"),
        });
    }
    // Half a step of slack keeps the end point despite accumulated rounding.
    let count = ((end - start) / step + 0.5).floor() as usize + 1;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naca0012() -> AirfoilParameters {
        AirfoilParameters::new(0.0, 0.0, 0.12, 1.0).unwrap()
    }

    #[test]
    fn analysis_builder_requires_airfoil_flow_and_points() {
        let err = AnalysisConfigBuilder::new()
            .num_points(70)
            .flow(FlowCondition::new(55.0, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("airfoil"));

        let err = AnalysisConfigBuilder::new()
            .airfoil(naca0012())
            .flow(FlowCondition::new(55.0, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("num_points"));

        let err = AnalysisConfigBuilder::new()
            .airfoil(naca0012())
            .num_points(70)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("flow"));
    }

    #[test]
    fn analysis_builder_fills_defaults() {
        let config = AnalysisConfigBuilder::new()
            .airfoil(naca0012())
            .num_points(70)
            .flow(FlowCondition::new(55.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(config.grid.nx(), DEFAULT_GRID_RESOLUTION);
        assert_eq!(config.grid.ny(), DEFAULT_GRID_RESOLUTION);
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.field.singularity_policy, SingularityPolicy::Reject);
    }

    #[test]
    fn analysis_builder_rejects_empty_grid() {
        let err = AnalysisConfigBuilder::new()
            .airfoil(naca0012())
            .num_points(70)
            .flow(FlowCondition::new(55.0, 0.0))
            .grid(Grid::new(vec![], vec![0.0]))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { parameter: "grid", .. }
        ));
    }

    #[test]
    fn sweep_range_includes_both_ends() {
        let config = SweepConfigBuilder::new()
            .airfoil(naca0012())
            .num_points(70)
            .free_stream_speed(55.0)
            .angle_range_degrees(-4.0, 9.0, 1.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.angles_of_attack.len(), 14);
        assert!((config.angles_of_attack[0] - (-4f64).to_radians()).abs() < 1e-15);
        assert!((config.angles_of_attack[13] - 9f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn sweep_range_with_fractional_step() {
        let angles = degree_range(0.0, 1.0, 0.1).unwrap();
        assert_eq!(angles.len(), 11);
    }

    #[test]
    fn sweep_range_rejects_non_positive_step() {
        assert!(degree_range(0.0, 5.0, 0.0).is_err());
        assert!(degree_range(5.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn sweep_builder_rejects_empty_angle_list() {
        let err = SweepConfigBuilder::new()
            .airfoil(naca0012())
            .num_points(70)
            .free_stream_speed(55.0)
            .angles_of_attack(Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { parameter: "angles_of_attack", .. }
        ));
    }

    #[test]
    fn singularity_policy_defaults_to_reject() {
        assert_eq!(SingularityPolicy::default(), SingularityPolicy::Reject);
    }
}
