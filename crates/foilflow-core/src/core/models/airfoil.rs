use crate::core::geometry::GeometryError;
use std::fmt;

/// Shape parameters of a NACA 4-digit section.
///
/// All fractions are relative to the chord. Instances are validated on
/// construction and never mutated afterwards; a shape change means building
/// a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilParameters {
    max_camber: f64,
    camber_location: f64,
    thickness: f64,
    chord: f64,
}

/// Which mean-camber formula applies to a parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CamberLine {
    Symmetric,
    Cambered { max_camber: f64, location: f64 },
}

impl AirfoilParameters {
    pub fn new(
        max_camber: f64,
        camber_location: f64,
        thickness: f64,
        chord: f64,
    ) -> Result<Self, GeometryError> {
        check_fraction("max_camber", max_camber, 0.0..1.0)?;
        check_fraction("camber_location", camber_location, 0.0..1.0)?;
        if !(thickness > 0.0 && thickness < 1.0) {
            return Err(GeometryError::Domain {
                parameter: "thickness",
                value: thickness,
                expected: "a fraction in (0, 1)",
            });
        }
        if !(chord > 0.0 && chord.is_finite()) {
            return Err(GeometryError::Domain {
                parameter: "chord",
                value: chord,
                expected: "a positive length",
            });
        }
        if max_camber > 0.0 && camber_location == 0.0 {
            return Err(GeometryError::Degenerate(
                "non-zero camber requires a non-zero camber location".to_string(),
            ));
        }

        Ok(Self {
            max_camber,
            camber_location,
            thickness,
            chord,
        })
    }

    /// Parses a 4-digit designation such as `"2412"` or `"NACA 0012"`.
    pub fn from_designation(designation: &str, chord: f64) -> Result<Self, GeometryError> {
        let trimmed = designation.trim();
        let digits = trimmed
            .strip_prefix("NACA")
            .or_else(|| trimmed.strip_prefix("naca"))
            .unwrap_or(trimmed)
            .trim();

        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(GeometryError::InvalidDesignation(designation.to_string()));
        }

        let digit = |i: usize| f64::from(digits.as_bytes()[i] - b'0');
        let max_camber = digit(0) / 100.0;
        let camber_location = digit(1) / 10.0;
        let thickness = (digit(2) * 10.0 + digit(3)) / 100.0;

        Self::new(max_camber, camber_location, thickness, chord)
    }

    pub fn max_camber(&self) -> f64 {
        self.max_camber
    }

    pub fn camber_location(&self) -> f64 {
        self.camber_location
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn camber_line(&self) -> CamberLine {
        if self.max_camber == 0.0 && self.camber_location == 0.0 {
            CamberLine::Symmetric
        } else {
            CamberLine::Cambered {
                max_camber: self.max_camber,
                location: self.camber_location,
            }
        }
    }

    pub fn designation(&self) -> String {
        format!(
            "{}{}{:02}",
            (self.max_camber * 100.0).round() as u32,
            (self.camber_location * 10.0).round() as u32,
            (self.thickness * 100.0).round() as u32
        )
    }
}

impl fmt::Display for AirfoilParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NACA {}", self.designation())
    }
}

fn check_fraction(
    parameter: &'static str,
    value: f64,
    range: std::ops::Range<f64>,
) -> Result<(), GeometryError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::Domain {
            parameter,
            value,
            expected: "a fraction in [0, 1)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designation_parses_cambered_section() {
        let params = AirfoilParameters::from_designation("2412", 1.0).unwrap();
        assert!((params.max_camber() - 0.02).abs() < 1e-12);
        assert!((params.camber_location() - 0.4).abs() < 1e-12);
        assert!((params.thickness() - 0.12).abs() < 1e-12);
        assert_eq!(params.chord(), 1.0);
    }

    #[test]
    fn designation_accepts_naca_prefix() {
        let params = AirfoilParameters::from_designation("NACA 0012", 2.0).unwrap();
        assert_eq!(params.camber_line(), CamberLine::Symmetric);
        assert_eq!(params.chord(), 2.0);
    }

    #[test]
    fn designation_rejects_malformed_input() {
        for bad in ["241", "24a2", "NACA 24123", ""] {
            assert!(matches!(
                AirfoilParameters::from_designation(bad, 1.0),
                Err(GeometryError::InvalidDesignation(_))
            ));
        }
    }

    #[test]
    fn display_name_pads_thin_sections() {
        let params = AirfoilParameters::new(0.0, 0.0, 0.06, 1.0).unwrap();
        assert_eq!(params.to_string(), "NACA 0006");
        let params = AirfoilParameters::new(0.04, 0.4, 0.12, 1.0).unwrap();
        assert_eq!(params.to_string(), "NACA 4412");
    }

    #[test]
    fn out_of_range_parameters_are_domain_errors() {
        assert!(matches!(
            AirfoilParameters::new(0.0, 0.0, 0.0, 1.0),
            Err(GeometryError::Domain { parameter: "thickness", .. })
        ));
        assert!(matches!(
            AirfoilParameters::new(0.0, 0.0, 0.12, -1.0),
            Err(GeometryError::Domain { parameter: "chord", .. })
        ));
        assert!(matches!(
            AirfoilParameters::new(1.2, 0.4, 0.12, 1.0),
            Err(GeometryError::Domain { parameter: "max_camber", .. })
        ));
    }

    #[test]
    fn camber_without_location_is_degenerate() {
        assert!(matches!(
            AirfoilParameters::new(0.02, 0.0, 0.12, 1.0),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn zero_camber_with_location_takes_cambered_path() {
        let params = AirfoilParameters::new(0.0, 0.4, 0.12, 1.0).unwrap();
        assert!(matches!(params.camber_line(), CamberLine::Cambered { .. }));
    }
}
