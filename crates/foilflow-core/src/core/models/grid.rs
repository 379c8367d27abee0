use nalgebra::Point2;

/// Rectangular lattice of evaluation points.
///
/// Field matrices built over a grid are `ys.len() × xs.len()`: the row index
/// walks `y`, the column index walks `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Grid {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    pub fn uniform(x_range: (f64, f64), y_range: (f64, f64), nx: usize, ny: usize) -> Self {
        Self {
            xs: linspace(x_range.0, x_range.1, nx),
            ys: linspace(y_range.0, y_range.1, ny),
        }
    }

    /// Spans `[-3c, 2c] × [-1.5c, 1.5c]` at the given resolution.
    pub fn around_chord(chord: f64, resolution: usize) -> Self {
        Self::uniform(
            (-3.0 * chord, 2.0 * chord),
            (-1.5 * chord, 1.5 * chord),
            resolution,
            resolution,
        )
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    pub fn len(&self) -> usize {
        self.nx() * self.ny()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point(&self, row: usize, col: usize) -> Point2<f64> {
        Point2::new(self.xs[col], self.ys[row])
    }

    /// Row-major iteration: `(row, col, point)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Point2<f64>)> + '_ {
        self.ys.iter().enumerate().flat_map(move |(row, &y)| {
            self.xs
                .iter()
                .enumerate()
                .map(move |(col, &x)| (row, col, Point2::new(x, y)))
        })
    }
}

/// `n` evenly spaced values from `start` to `end`, both endpoints exact.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}
