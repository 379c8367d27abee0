use super::GeometryError;
use crate::core::models::airfoil::{AirfoilParameters, CamberLine};
use crate::core::models::boundary::{Boundary, BoundaryPoint};
use itertools::Itertools;
use tracing::{debug, instrument};

pub const MIN_BOUNDARY_POINTS: usize = 4;

const COINCIDENT_POINT_TOLERANCE: f64 = 1e-12;

/// Half-thickness `y_t(x)` of the NACA 4-digit thickness distribution.
pub fn thickness(params: &AirfoilParameters, x: f64) -> Result<f64, GeometryError> {
    let c = params.chord();
    if !(0.0..=c).contains(&x) {
        return Err(GeometryError::OutsideChord { x, chord: c });
    }
    let xc = x / c;
    Ok((params.thickness() / 0.2)
        * c
        * (0.2969 * xc.sqrt() - 0.1260 * xc - 0.3516 * xc.powi(2) + 0.2843 * xc.powi(3)
            - 0.1036 * xc.powi(4)))
}

/// Mean-camber ordinate `y_c(x)`; identically zero on the symmetric path.
pub fn camber(params: &AirfoilParameters, x: f64) -> f64 {
    match params.camber_line() {
        CamberLine::Symmetric => 0.0,
        CamberLine::Cambered {
            max_camber: m,
            location: p,
        } => {
            let c = params.chord();
            if x < p * c {
                (m / (p * p)) * x * (2.0 * p - x / c)
            } else {
                (m / ((1.0 - p) * (1.0 - p))) * (c - x) * (1.0 + x / c - 2.0 * p)
            }
        }
    }
}

/// Samples `num_points` boundary points.
///
/// The first `num_points / 2` points trace the lower surface from the
/// trailing edge (`x = c`) towards the leading edge; the remaining points
/// trace the upper surface back to `x = c`. The panel solver relies on this
/// ordering for its sign conventions.
///
/// Stations are evenly spaced along the contour and mirrored between the two
/// surfaces, so point `k` and point `num_points - 1 - k` share an abscissa.
/// Odd counts put the leading edge (`x = 0`) first on the upper surface; even
/// counts straddle it with a vertical nose panel.
#[instrument(skip(params), fields(airfoil = %params))]
pub fn calculate_border(
    params: &AirfoilParameters,
    num_points: usize,
) -> Result<Boundary, GeometryError> {
    if num_points < MIN_BOUNDARY_POINTS {
        return Err(GeometryError::Domain {
            parameter: "num_points",
            value: num_points as f64,
            expected: "at least 4 boundary points",
        });
    }

    let c = params.chord();
    let step = 2.0 * c / (num_points - 1) as f64;
    let lower_len = num_points / 2;
    let upper_len = num_points - lower_len;

    let lower_xs = mirrored_stations(c, num_points);
    let upper_xs: Vec<f64> = (num_points % 2 == 1)
        .then_some(0.0)
        .into_iter()
        .chain(lower_xs.iter().rev().copied())
        .collect();

    let camber_line = params.camber_line();
    let mut points = Vec::with_capacity(num_points);

    for &x in &lower_xs {
        points.push(surface_point(params, camber_line, x, step, Surface::Lower)?);
    }
    for &x in &upper_xs {
        points.push(surface_point(params, camber_line, x, step, Surface::Upper)?);
    }

    if let Some((i, _)) = points
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| (*b - *a).norm() < COINCIDENT_POINT_TOLERANCE)
    {
        return Err(GeometryError::Degenerate(format!(
            "boundary points {} and {} coincide",
            i,
            i + 1
        )));
    }

    debug!(
        points = points.len(),
        lower = lower_len,
        upper = upper_len,
        "Boundary generated."
    );
    Ok(Boundary::new(points, lower_len).with_chord(c))
}

/// Lower-surface abscissae `c·(1 − 2k/(N − 1))` for `k < N/2`, trailing edge first.
fn mirrored_stations(c: f64, num_points: usize) -> Vec<f64> {
    let last = (num_points - 1) as f64;
    (0..num_points / 2)
        .map(|k| c * (1.0 - 2.0 * k as f64 / last))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Lower,
    Upper,
}

fn surface_point(
    params: &AirfoilParameters,
    camber_line: CamberLine,
    x: f64,
    step: f64,
    surface: Surface,
) -> Result<BoundaryPoint, GeometryError> {
    let yt = thickness(params, x)?;

    let point = match camber_line {
        CamberLine::Symmetric => match surface {
            Surface::Lower => BoundaryPoint::new(x, -yt),
            Surface::Upper => BoundaryPoint::new(x, yt),
        },
        CamberLine::Cambered { .. } => {
            let yc = camber(params, x);
            let slope = (camber(params, x + step) - yc) / step;
            let (sin_zeta, cos_zeta) = slope.atan().sin_cos();
            match surface {
                Surface::Lower => BoundaryPoint::new(x + yt * sin_zeta, yc - yt * cos_zeta),
                Surface::Upper => BoundaryPoint::new(x - yt * sin_zeta, yc + yt * cos_zeta),
            }
        }
    };
    Ok(point)
}

/// An airfoil together with its cached boundary.
///
/// The boundary is computed once at construction. Changing the shape means
/// building a new `Airfoil`; changing only the resolution goes through
/// [`Airfoil::regenerate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    params: AirfoilParameters,
    boundary: Boundary,
}

impl Airfoil {
    pub fn generate(params: AirfoilParameters, num_points: usize) -> Result<Self, GeometryError> {
        let boundary = calculate_border(&params, num_points)?;
        Ok(Self { params, boundary })
    }

    pub fn regenerate(&mut self, num_points: usize) -> Result<(), GeometryError> {
        self.boundary = calculate_border(&self.params, num_points)?;
        Ok(())
    }

    pub fn params(&self) -> &AirfoilParameters {
        &self.params
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn name(&self) -> String {
        self.params.to_string()
    }
}
