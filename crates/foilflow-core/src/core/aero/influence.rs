use crate::core::models::boundary::Panel;
use nalgebra::DMatrix;
use std::f64::consts::FRAC_PI_2;

/// Normal (`cn1`, `cn2`) and tangential (`ct1`, `ct2`) velocity induced at a
/// control point by a linearly varying vortex sheet on a source panel, split
/// between the panel's start node (`*1`) and end node (`*2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceCoefficients {
    pub cn1: f64,
    pub cn2: f64,
    pub ct1: f64,
    pub ct2: f64,
}

impl InfluenceCoefficients {
    /// Limiting values for a panel acting on its own control point.
    pub const SELF: Self = Self {
        cn1: -1.0,
        cn2: 1.0,
        ct1: FRAC_PI_2,
        ct2: FRAC_PI_2,
    };
}

/// Why a coefficient could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InfluenceFault {
    /// Source panel has (near) zero length.
    ZeroLengthPanel,
    /// Control point coincides with a node of the source panel.
    CoincidentNode,
}

/// Closed-form influence of `source` on the control point of `target`.
///
/// `target` and `source` must be different panels; the self-influence limit
/// is [`InfluenceCoefficients::SELF`].
#[inline]
pub fn panel_influence(
    target: &Panel,
    source: &Panel,
    min_length: f64,
) -> Result<InfluenceCoefficients, InfluenceFault> {
    let s = source.length;
    if s <= min_length {
        return Err(InfluenceFault::ZeroLengthPanel);
    }

    let dx = target.control_point.x - source.start.x;
    let dy = target.control_point.y - source.start.y;
    let (sin_j, cos_j) = source.angle.sin_cos();
    let (sin_ij, cos_ij) = (target.angle - source.angle).sin_cos();
    let (sin_2, cos_2) = (target.angle - 2.0 * source.angle).sin_cos();

    let a = -dx * cos_j - dy * sin_j;
    let b = dx * dx + dy * dy;
    let c = sin_ij;
    let d = cos_ij;
    let e = dx * sin_j - dy * cos_j;

    // Ratio of squared distances to the end and start nodes.
    let log_arg = 1.0 + s * (s + 2.0 * a) / b;
    if !(b > 0.0) || !(log_arg > 0.0) {
        return Err(InfluenceFault::CoincidentNode);
    }

    let f = log_arg.ln();
    let g = (e * s).atan2(b + a * s);
    let p = dx * sin_2 + dy * cos_2;
    let q = dx * cos_2 - dy * sin_2;

    let cn2 = d + 0.5 * q * f / s - (a * c + d * e) * g / s;
    let cn1 = 0.5 * d * f + c * g - cn2;
    let ct2 = c + 0.5 * p * f / s + (a * d - c * e) * g / s;
    let ct1 = 0.5 * c * f - d * g - ct2;

    Ok(InfluenceCoefficients { cn1, cn2, ct1, ct2 })
}

/// Per-pair coefficients for every ordered `(target, source)` panel pair.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceMatrices {
    pub cn1: DMatrix<f64>,
    pub cn2: DMatrix<f64>,
    pub ct1: DMatrix<f64>,
    pub ct2: DMatrix<f64>,
}

impl InfluenceMatrices {
    /// Evaluates all pairs, reporting the first faulty `(target, source)` pair.
    pub fn compute(
        panels: &[Panel],
        min_length: f64,
    ) -> Result<Self, (usize, usize, InfluenceFault)> {
        let m = panels.len();
        let mut matrices = Self {
            cn1: DMatrix::zeros(m, m),
            cn2: DMatrix::zeros(m, m),
            ct1: DMatrix::zeros(m, m),
            ct2: DMatrix::zeros(m, m),
        };

        for (i, target) in panels.iter().enumerate() {
            for (j, source) in panels.iter().enumerate() {
                let coeffs = if i == j {
                    InfluenceCoefficients::SELF
                } else {
                    panel_influence(target, source, min_length).map_err(|fault| (i, j, fault))?
                };
                matrices.cn1[(i, j)] = coeffs.cn1;
                matrices.cn2[(i, j)] = coeffs.cn2;
                matrices.ct1[(i, j)] = coeffs.ct1;
                matrices.ct2[(i, j)] = coeffs.ct2;
            }
        }
        Ok(matrices)
    }

    pub fn num_panels(&self) -> usize {
        self.cn1.nrows()
    }

    pub fn at(&self, target: usize, source: usize) -> InfluenceCoefficients {
        InfluenceCoefficients {
            cn1: self.cn1[(target, source)],
            cn2: self.cn2[(target, source)],
            ct1: self.ct1[(target, source)],
            ct2: self.ct2[(target, source)],
        }
    }

    /// Normal-velocity matrix over the `m + 1` nodal strengths.
    ///
    /// Node `k` collects the end-node share of panel `k - 1` and the
    /// start-node share of panel `k`. The returned matrix has `m` rows; the
    /// solver appends the trailing-edge row.
    pub fn nodal_normal(&self) -> DMatrix<f64> {
        distribute_to_nodes(&self.cn1, &self.cn2)
    }

    pub fn nodal_tangential(&self) -> DMatrix<f64> {
        distribute_to_nodes(&self.ct1, &self.ct2)
    }
}

fn distribute_to_nodes(first: &DMatrix<f64>, second: &DMatrix<f64>) -> DMatrix<f64> {
    let m = first.nrows();
    DMatrix::from_fn(m, m + 1, |row, col| {
        if col == 0 {
            first[(row, 0)]
        } else if col == m {
            second[(row, m - 1)]
        } else {
            first[(row, col)] + second[(row, col - 1)]
        }
    })
}
