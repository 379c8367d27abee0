use super::config::{FieldConfig, SingularityPolicy};
use super::error::EngineError;
use super::solver::SolverResult;
use crate::core::aero::vortex::{bernoulli_pressure_kpa, induced_velocity, stream_function};
use crate::core::models::boundary::BoundaryPoint;
use crate::core::models::flow::FlowCondition;
use crate::core::models::grid::Grid;
use nalgebra::{DMatrix, Point2, Vector2};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A grid cell whose distance to a panel vortex fell inside the singular
/// radius and whose term was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularCell {
    pub row: usize,
    pub col: usize,
    pub panel: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    pub grid: Grid,
    pub stream_function: DMatrix<f64>,
    pub velocity_x: DMatrix<f64>,
    pub velocity_y: DMatrix<f64>,
    /// Static pressure in kPa.
    pub pressure: DMatrix<f64>,
    pub lift_coefficient: f64,
    pub pressure_coefficient: Vec<f64>,
    pub singular_points: Vec<SingularCell>,
}

/// One flattened grid cell, ready for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSample {
    pub x: f64,
    pub y: f64,
    pub stream_function: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub pressure_kpa: f64,
}

impl FieldResult {
    pub fn velocity(&self, row: usize, col: usize) -> Vector2<f64> {
        Vector2::new(self.velocity_x[(row, col)], self.velocity_y[(row, col)])
    }

    /// Cells in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = FieldSample> + '_ {
        self.grid.iter().map(move |(row, col, point)| FieldSample {
            x: point.x,
            y: point.y,
            stream_function: self.stream_function[(row, col)],
            velocity_x: self.velocity_x[(row, col)],
            velocity_y: self.velocity_y[(row, col)],
            pressure_kpa: self.pressure[(row, col)],
        })
    }
}

#[derive(Debug)]
struct RowValues {
    stream_function: Vec<f64>,
    velocity: Vec<Vector2<f64>>,
    singular: Vec<SingularCell>,
}

/// Superposes the free stream and one point vortex per panel over `grid`.
#[instrument(skip_all, name = "field_evaluation", fields(nx = grid.nx(), ny = grid.ny()))]
pub fn evaluate_field(
    solution: &SolverResult,
    flow: &FlowCondition,
    grid: &Grid,
    config: &FieldConfig,
) -> Result<FieldResult, EngineError> {
    if !(config.singular_radius >= 0.0 && config.singular_radius.is_finite()) {
        return Err(EngineError::Domain {
            parameter: "singular radius",
            value: config.singular_radius,
            reason: "must be non-negative and finite",
        });
    }
    if !(flow.free_stream_speed.is_finite() && flow.angle_of_attack.is_finite()) {
        return Err(EngineError::Domain {
            parameter: "free-stream speed",
            value: flow.free_stream_speed,
            reason: "flow condition must be finite",
        });
    }

    let vortices: Vec<(BoundaryPoint, f64)> = solution
        .panels
        .iter()
        .map(|panel| panel.control_point)
        .zip(solution.circulation.iter().copied())
        .collect();
    debug!(vortices = vortices.len(), "Evaluating field.");

    let row_indices: Vec<usize> = (0..grid.ny()).collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = row_indices.iter();

    #[cfg(feature = "parallel")]
    let iterator = row_indices.par_iter();

    let rows: Vec<Result<RowValues, EngineError>> = iterator
        .map(|&row| evaluate_row(row, grid, &vortices, flow, config))
        .collect();
    let rows = rows.into_iter().collect::<Result<Vec<_>, _>>()?;

    let (ny, nx) = (grid.ny(), grid.nx());
    let stream = DMatrix::from_fn(ny, nx, |r, c| rows[r].stream_function[c]);
    let velocity_x = DMatrix::from_fn(ny, nx, |r, c| rows[r].velocity[c].x);
    let velocity_y = DMatrix::from_fn(ny, nx, |r, c| rows[r].velocity[c].y);
    let pressure = DMatrix::from_fn(ny, nx, |r, c| bernoulli_pressure_kpa(&rows[r].velocity[c]));
    let singular_points: Vec<SingularCell> =
        rows.into_iter().flat_map(|row| row.singular).collect();

    if !singular_points.is_empty() {
        warn!(
            cells = singular_points.len(),
            "Vortex terms excluded at singular grid points."
        );
    }
    info!(points = grid.len(), "Field evaluated.");

    Ok(FieldResult {
        grid: grid.clone(),
        stream_function: stream,
        velocity_x,
        velocity_y,
        pressure,
        lift_coefficient: solution.lift_coefficient,
        pressure_coefficient: solution.pressure_coefficient.clone(),
        singular_points,
    })
}

fn evaluate_row(
    row: usize,
    grid: &Grid,
    vortices: &[(BoundaryPoint, f64)],
    flow: &FlowCondition,
    config: &FieldConfig,
) -> Result<RowValues, EngineError> {
    let mut values = RowValues {
        stream_function: Vec::with_capacity(grid.nx()),
        velocity: Vec::with_capacity(grid.nx()),
        singular: Vec::new(),
    };
    for col in 0..grid.nx() {
        let point = grid.point(row, col);
        let (psi, velocity) =
            evaluate_point((row, col), &point, vortices, flow, config, &mut values.singular)?;
        values.stream_function.push(psi);
        values.velocity.push(velocity);
    }
    Ok(values)
}

fn evaluate_point(
    (row, col): (usize, usize),
    point: &Point2<f64>,
    vortices: &[(BoundaryPoint, f64)],
    flow: &FlowCondition,
    config: &FieldConfig,
    singular: &mut Vec<SingularCell>,
) -> Result<(f64, Vector2<f64>), EngineError> {
    let mut psi = flow.stream_function(point.x, point.y);
    let mut velocity = flow.velocity();

    for (panel, (center, circulation)) in vortices.iter().enumerate() {
        let radius = (point - center).norm();
        if !(radius > config.singular_radius) {
            match config.singularity_policy {
                SingularityPolicy::Reject => {
                    return Err(EngineError::SingularPoint {
                        row,
                        col,
                        panel,
                        x: point.x,
                        y: point.y,
                    });
                }
                SingularityPolicy::Exclude => {
                    singular.push(SingularCell { row, col, panel });
                    continue;
                }
            }
        }
        psi += stream_function(*circulation, radius);
        velocity += induced_velocity(*circulation, center, point);
    }
    Ok((psi, velocity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::naca::calculate_border;
    use crate::core::models::airfoil::AirfoilParameters;
    use crate::engine::config::SolverConfig;
    use crate::engine::solver::solve;

    fn solved(designation: &str, flow: &FlowCondition) -> SolverResult {
        let params = AirfoilParameters::from_designation(designation, 1.0).unwrap();
        let boundary = calculate_border(&params, 40).unwrap();
        solve(&boundary, flow, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn matrices_are_rows_by_columns() {
        let flow = FlowCondition::from_degrees(20.0, 4.0);
        let solution = solved("2412", &flow);
        let grid = Grid::uniform((-2.0, 2.0), (-1.0, 1.0), 7, 5);
        let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap();
        assert_eq!(field.stream_function.shape(), (5, 7));
        assert_eq!(field.velocity_x.shape(), (5, 7));
        assert_eq!(field.pressure.shape(), (5, 7));
        assert_eq!(field.samples().count(), 35);
        assert!(field.singular_points.is_empty());
        assert_eq!(field.lift_coefficient, solution.lift_coefficient);
    }

    #[test]
    fn far_field_tends_to_free_stream() {
        let flow = FlowCondition::from_degrees(30.0, 3.0);
        let solution = solved("0012", &flow);
        let grid = Grid::new(vec![500.0], vec![400.0]);
        let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap();
        let v = field.velocity(0, 0);
        assert!((v - flow.velocity()).norm() < 0.01);
    }

    #[test]
    fn velocity_is_curl_of_stream_function() {
        let flow = FlowCondition::from_degrees(25.0, 5.0);
        let solution = solved("2412", &flow);
        let (x0, y0, h) = (1.3, 0.4, 1e-5);
        let grid = Grid::new(vec![x0 - h, x0, x0 + h], vec![y0 - h, y0, y0 + h]);
        let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap();

        let psi = &field.stream_function;
        let dpsi_dy = (psi[(2, 1)] - psi[(0, 1)]) / (2.0 * h);
        let dpsi_dx = (psi[(1, 2)] - psi[(1, 0)]) / (2.0 * h);
        let v = field.velocity(1, 1);
        assert!((v.x - dpsi_dy).abs() < 1e-4 * flow.free_stream_speed);
        assert!((v.y + dpsi_dx).abs() < 1e-4 * flow.free_stream_speed);
    }

    #[test]
    fn pressure_follows_bernoulli() {
        let flow = FlowCondition::new(40.0, 0.0);
        let solution = solved("0012", &flow);
        let grid = Grid::uniform((-1.0, 2.0), (0.5, 1.0), 4, 3);
        let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap();
        for row in 0..3 {
            for col in 0..4 {
                let speed2 = field.velocity(row, col).norm_squared();
                let expected = 101.3 - 0.5 * 1.225 * speed2 / 1000.0;
                assert!((field.pressure[(row, col)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn grid_point_on_vortex_is_rejected_by_default() {
        let flow = FlowCondition::new(10.0, 0.0);
        let solution = solved("0012", &flow);
        let target = solution.panels[5].control_point;
        let grid = Grid::new(vec![-1.0, target.x], vec![target.y]);
        let err = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap_err();
        match err {
            EngineError::SingularPoint { row, col, panel, .. } => {
                assert_eq!((row, col, panel), (0, 1, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn excluded_singular_terms_keep_field_finite() {
        let flow = FlowCondition::new(10.0, 0.0);
        let solution = solved("0012", &flow);
        let target = solution.panels[5].control_point;
        let grid = Grid::new(vec![-1.0, target.x], vec![target.y]);
        let config = FieldConfig {
            singularity_policy: SingularityPolicy::Exclude,
            ..FieldConfig::default()
        };
        let field = evaluate_field(&solution, &flow, &grid, &config).unwrap();
        assert_eq!(
            field.singular_points,
            vec![SingularCell { row: 0, col: 1, panel: 5 }]
        );
        assert!(field.stream_function.iter().all(|v| v.is_finite()));
        assert!(field.velocity_x.iter().all(|v| v.is_finite()));
        assert!(field.pressure.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_radius_still_counts_as_singular() {
        let flow = FlowCondition::new(10.0, 0.0);
        let solution = solved("0012", &flow);
        let target = solution.panels[0].control_point;
        let grid = Grid::new(vec![target.x], vec![target.y]);
        let config = FieldConfig {
            singular_radius: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            evaluate_field(&solution, &flow, &grid, &config),
            Err(EngineError::SingularPoint { panel: 0, .. })
        ));
    }

    #[test]
    fn negative_singular_radius_is_a_domain_error() {
        let flow = FlowCondition::new(10.0, 0.0);
        let solution = solved("0012", &flow);
        let config = FieldConfig {
            singular_radius: -1.0,
            ..FieldConfig::default()
        };
        let grid = Grid::new(vec![0.0], vec![1.0]);
        assert!(matches!(
            evaluate_field(&solution, &flow, &grid, &config),
            Err(EngineError::Domain { .. })
        ));
    }
}
