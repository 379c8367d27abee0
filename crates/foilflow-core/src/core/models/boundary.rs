use itertools::Itertools;
use nalgebra::Point2;

pub type BoundaryPoint = Point2<f64>;

/// Ordered airfoil outline: lower surface from trailing edge to leading edge,
/// then upper surface back to the trailing edge.
///
/// The two trailing-edge endpoints are kept as separate entries, so `N`
/// points always describe `N - 1` panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    points: Vec<BoundaryPoint>,
    lower_len: usize,
    reference_chord: Option<f64>,
}

impl Boundary {
    pub fn new(points: Vec<BoundaryPoint>, lower_len: usize) -> Self {
        debug_assert!(lower_len <= points.len());
        Self {
            points,
            lower_len,
            reference_chord: None,
        }
    }

    /// Pins the chord used for normalization instead of measuring it from
    /// the sampled points.
    pub fn with_chord(mut self, chord: f64) -> Self {
        self.reference_chord = Some(chord);
        self
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn num_panels(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn lower_surface(&self) -> &[BoundaryPoint] {
        &self.points[..self.lower_len]
    }

    pub fn upper_surface(&self) -> &[BoundaryPoint] {
        &self.points[self.lower_len..]
    }

    pub fn panels(&self) -> Vec<Panel> {
        self.points
            .iter()
            .tuple_windows()
            .map(|(start, end)| Panel::new(*start, *end))
            .collect()
    }

    /// Reference chord, or the streamwise extent `max(x) - min(x)` when none
    /// was pinned.
    pub fn chord(&self) -> f64 {
        if let Some(chord) = self.reference_chord {
            return chord;
        }
        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            });
        if min.is_finite() { max - min } else { 0.0 }
    }

    pub fn perimeter(&self) -> f64 {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub start: BoundaryPoint,
    pub end: BoundaryPoint,
    pub control_point: BoundaryPoint,
    pub length: f64,
    /// Orientation `atan2(dy, dx)` of the panel in radians.
    pub angle: f64,
}

impl Panel {
    pub fn new(start: BoundaryPoint, end: BoundaryPoint) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            control_point: nalgebra::center(&start, &end),
            length: delta.norm(),
            angle: delta.y.atan2(delta.x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const TOLERANCE: f64 = 1e-12;

    fn square() -> Boundary {
        Boundary::new(
            vec![
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
            ],
            2,
        )
    }

    #[test]
    fn panel_geometry_is_derived_from_endpoints() {
        let panel = Panel::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!((panel.length - 2f64.sqrt()).abs() < TOLERANCE);
        assert!((panel.angle - FRAC_PI_4).abs() < TOLERANCE);
        assert!((panel.control_point.x - 0.5).abs() < TOLERANCE);
        assert!((panel.control_point.y - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn n_points_produce_n_minus_one_panels() {
        let boundary = square();
        assert_eq!(boundary.len(), 4);
        assert_eq!(boundary.num_panels(), 3);
        assert_eq!(boundary.panels().len(), 3);
    }

    #[test]
    fn surfaces_split_at_lower_length() {
        let boundary = square();
        assert_eq!(boundary.lower_surface().len(), 2);
        assert_eq!(boundary.upper_surface().len(), 2);
        assert_eq!(boundary.upper_surface()[0], Point2::new(0.0, 1.0));
    }

    #[test]
    fn chord_and_perimeter_of_open_polyline() {
        let boundary = square();
        assert!((boundary.chord() - 1.0).abs() < TOLERANCE);
        assert!((boundary.perimeter() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn pinned_chord_overrides_measured_extent() {
        let boundary = square().with_chord(1.25);
        assert_eq!(boundary.chord(), 1.25);
        assert!((boundary.perimeter() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn empty_boundary_has_no_panels() {
        let boundary = Boundary::new(Vec::new(), 0);
        assert!(boundary.is_empty());
        assert_eq!(boundary.num_panels(), 0);
        assert_eq!(boundary.chord(), 0.0);
    }
}
