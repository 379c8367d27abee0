use crate::core::geometry::naca::Airfoil;
use crate::core::models::flow::FlowCondition;
use crate::engine::config::SweepConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::solver::solve;
use serde::Serialize;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiftPoint {
    pub angle_of_attack_deg: f64,
    pub lift_coefficient: f64,
}

/// Lift coefficient against angle of attack, with a straight-line fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftCurve {
    pub points: Vec<LiftPoint>,
    /// Least-squares `dCl/dα` per radian; `None` with fewer than two distinct angles.
    pub slope_per_radian: Option<f64>,
    /// Angle in radians where the fitted line crosses `Cl = 0`.
    pub zero_lift_angle: Option<f64>,
}

impl LiftCurve {
    pub fn from_points(points: Vec<LiftPoint>) -> Self {
        let (slope_per_radian, zero_lift_angle) = match fit_line(&points) {
            Some((slope, intercept)) => {
                let zero = (slope != 0.0).then(|| -intercept / slope);
                (Some(slope), zero)
            }
            None => (None, None),
        };
        Self {
            points,
            slope_per_radian,
            zero_lift_angle,
        }
    }

    pub fn zero_lift_angle_degrees(&self) -> Option<f64> {
        self.zero_lift_angle.map(f64::to_degrees)
    }

    /// Fitted slope as a fraction of the thin-airfoil value `2π`.
    pub fn thin_airfoil_ratio(&self) -> Option<f64> {
        self.slope_per_radian
            .map(|slope| slope / (2.0 * std::f64::consts::PI))
    }
}

/// Ordinary least squares over `(α [rad], Cl)`, returning `(slope, intercept)`.
fn fit_line(points: &[LiftPoint]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points
        .iter()
        .map(|p| p.angle_of_attack_deg.to_radians())
        .sum::<f64>()
        / n;
    let mean_y = points.iter().map(|p| p.lift_coefficient).sum::<f64>() / n;

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dx = p.angle_of_attack_deg.to_radians() - mean_x;
        (sxy + dx * (p.lift_coefficient - mean_y), sxx + dx * dx)
    });
    if !(sxx > 0.0) {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

#[instrument(skip_all, name = "sweep_workflow", fields(airfoil = %config.airfoil, angles = config.angles_of_attack.len()))]
pub fn run(config: &SweepConfig, reporter: &ProgressReporter) -> Result<LiftCurve, EngineError> {
    let airfoil = reporter.phase("Geometry", || {
        Airfoil::generate(config.airfoil, config.num_points).map_err(EngineError::from)
    })?;

    reporter.report(Progress::PhaseStart {
        name: "Angle of Attack Sweep",
    });
    reporter.report(Progress::TaskStart {
        total_steps: config.angles_of_attack.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = config.angles_of_attack.iter();

    #[cfg(feature = "parallel")]
    let iterator = config.angles_of_attack.par_iter();

    let results: Vec<Result<LiftPoint, EngineError>> = iterator
        .map(|&alpha| {
            let flow = FlowCondition::new(config.free_stream_speed, alpha);
            let solution = solve(airfoil.boundary(), &flow, &config.solver)?;
            let point = LiftPoint {
                angle_of_attack_deg: flow.angle_of_attack_degrees(),
                lift_coefficient: solution.lift_coefficient,
            };
            reporter.report(Progress::LiftSolved {
                angle_of_attack_deg: point.angle_of_attack_deg,
                lift_coefficient: point.lift_coefficient,
            });
            reporter.report(Progress::TaskIncrement);
            Ok(point)
        })
        .collect();

    reporter.report(Progress::TaskFinish);
    let points = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    reporter.report(Progress::PhaseFinish);

    let curve = LiftCurve::from_points(points);
    info!(
        slope_per_radian = curve.slope_per_radian,
        zero_lift_angle_deg = curve.zero_lift_angle_degrees(),
        "Sweep finished."
    );
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::airfoil::AirfoilParameters;
    use crate::engine::config::SweepConfigBuilder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn point(deg: f64, cl: f64) -> LiftPoint {
        LiftPoint {
            angle_of_attack_deg: deg,
            lift_coefficient: cl,
        }
    }

    #[test]
    fn exact_line_is_recovered() {
        let slope = 6.0;
        let points: Vec<_> = [-2.0f64, 0.0, 3.0, 5.0]
            .iter()
            .map(|&d| point(d, slope * (d.to_radians() + 0.02)))
            .collect();
        let curve = LiftCurve::from_points(points);
        assert!((curve.slope_per_radian.unwrap() - slope).abs() < 1e-9);
        assert!((curve.zero_lift_angle.unwrap() + 0.02).abs() < 1e-9);
    }

    #[test]
    fn single_point_has_no_fit() {
        let curve = LiftCurve::from_points(vec![point(2.0, 0.2)]);
        assert_eq!(curve.slope_per_radian, None);
        assert_eq!(curve.zero_lift_angle, None);
    }

    #[test]
    fn flat_curve_has_no_zero_lift_angle() {
        let curve = LiftCurve::from_points(vec![point(0.0, 0.3), point(4.0, 0.3)]);
        assert_eq!(curve.slope_per_radian, Some(0.0));
        assert_eq!(curve.zero_lift_angle, None);
    }

    #[test]
    fn repeated_angle_has_no_fit() {
        let curve = LiftCurve::from_points(vec![point(1.0, 0.1), point(1.0, 0.2)]);
        assert_eq!(curve.slope_per_radian, None);
    }

    #[test]
    fn sweep_keeps_angle_order_and_reports_each_angle() {
        let config = SweepConfigBuilder::new()
            .airfoil(AirfoilParameters::from_designation("0012", 1.0).unwrap())
            .num_points(40)
            .free_stream_speed(20.0)
            .angle_range_degrees(-2.0, 4.0, 2.0)
            .unwrap()
            .build()
            .unwrap();
        let solved = std::sync::Arc::new(AtomicUsize::new(0));
        let counter = solved.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            if let Progress::LiftSolved { .. } = event {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let curve = run(&config, &reporter).unwrap();
        assert_eq!(solved.load(Ordering::SeqCst), 4);
        let angles: Vec<f64> = curve
            .points
            .iter()
            .map(|p| p.angle_of_attack_deg.round())
            .collect();
        assert_eq!(angles, vec![-2.0, 0.0, 2.0, 4.0]);
        assert!(curve.points.windows(2).all(|w| w[1].lift_coefficient > w[0].lift_coefficient));
        assert!(curve.slope_per_radian.unwrap() > 0.0);
    }
}
