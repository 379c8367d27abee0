use crate::error::Result;
use foilflow::core::models::boundary::Boundary;
use foilflow::engine::field::FieldResult;
use foilflow::engine::solver::SolverResult;
use foilflow::workflows::sweep::LiftCurve;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct BoundaryRow {
    x: f64,
    y: f64,
    surface: &'static str,
}

#[derive(Debug, Serialize)]
struct PanelRow {
    x: f64,
    y: f64,
    length: f64,
    angle: f64,
    circulation: f64,
    tangential_velocity: f64,
    cp: f64,
}

pub fn write_boundary<W: Write>(writer: W, boundary: &Boundary) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let lower = boundary.lower_surface().iter().map(|p| (p, "lower"));
    let upper = boundary.upper_surface().iter().map(|p| (p, "upper"));
    for (point, surface) in lower.chain(upper) {
        csv.serialize(BoundaryRow {
            x: point.x,
            y: point.y,
            surface,
        })?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_panels<W: Write>(writer: W, solution: &SolverResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (i, panel) in solution.panels.iter().enumerate() {
        csv.serialize(PanelRow {
            x: panel.control_point.x,
            y: panel.control_point.y,
            length: panel.length,
            angle: panel.angle,
            circulation: solution.circulation[i],
            tangential_velocity: solution.tangential_velocity[i],
            cp: solution.pressure_coefficient[i],
        })?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_field<W: Write>(writer: W, field: &FieldResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for sample in field.samples() {
        csv.serialize(sample)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_lift_curve<W: Write>(writer: W, curve: &LiftCurve) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in &curve.points {
        csv.serialize(point)?;
    }
    csv.flush()?;
    Ok(())
}

/// Creates `path` and hands a buffered writer to `write`.
pub fn to_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(std::io::BufWriter<std::fs::File>) -> Result<()>,
{
    let file = std::fs::File::create(path)?;
    write(std::io::BufWriter::new(file))?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foilflow::core::models::airfoil::AirfoilParameters;
    use foilflow::core::models::flow::FlowCondition;
    use foilflow::core::models::grid::Grid;
    use foilflow::engine::config::{FieldConfig, SolverConfig};
    use foilflow::workflows::sweep::LiftPoint;
    use foilflow::{evaluate_field, generate_boundary, solve};

    fn boundary() -> Boundary {
        let params = AirfoilParameters::from_designation("0012", 1.0).unwrap();
        generate_boundary(&params, 10).unwrap()
    }

    fn lines(buffer: Vec<u8>) -> Vec<String> {
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn boundary_csv_has_header_and_one_row_per_point() {
        let mut buffer = Vec::new();
        write_boundary(&mut buffer, &boundary()).unwrap();
        let lines = lines(buffer);
        assert_eq!(lines[0], "x,y,surface");
        assert_eq!(lines.len(), 11);
        assert!(lines[1].ends_with(",lower"));
        assert!(lines[10].ends_with(",upper"));
    }

    #[test]
    fn panel_csv_has_one_row_per_panel() {
        let flow = FlowCondition::from_degrees(10.0, 2.0);
        let solution = solve(&boundary(), &flow, &SolverConfig::default()).unwrap();
        let mut buffer = Vec::new();
        write_panels(&mut buffer, &solution).unwrap();
        let lines = lines(buffer);
        assert_eq!(
            lines[0],
            "x,y,length,angle,circulation,tangential_velocity,cp"
        );
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn field_csv_is_row_major() {
        let flow = FlowCondition::new(10.0, 0.0);
        let solution = solve(&boundary(), &flow, &SolverConfig::default()).unwrap();
        let grid = Grid::new(vec![-1.0, 2.0], vec![0.5, 1.0, 1.5]);
        let field = evaluate_field(&solution, &flow, &grid, &FieldConfig::default()).unwrap();
        let mut buffer = Vec::new();
        write_field(&mut buffer, &field).unwrap();
        let lines = lines(buffer);
        assert_eq!(
            lines[0],
            "x,y,stream_function,velocity_x,velocity_y,pressure_kpa"
        );
        assert_eq!(lines.len(), 7);
        assert!(lines[2].starts_with("2.0,0.5,"));
        assert!(lines[3].starts_with("-1.0,1.0,"));
    }

    #[test]
    fn lift_curve_csv_lists_points() {
        let curve = LiftCurve::from_points(vec![
            LiftPoint {
                angle_of_attack_deg: 0.0,
                lift_coefficient: 0.0,
            },
            LiftPoint {
                angle_of_attack_deg: 2.0,
                lift_coefficient: 0.22,
            },
        ]);
        let mut buffer = Vec::new();
        write_lift_curve(&mut buffer, &curve).unwrap();
        assert_eq!(
            lines(buffer),
            vec!["angle_of_attack_deg,lift_coefficient", "0.0,0.0", "2.0,0.22"]
        );
    }

    #[test]
    fn file_output_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boundary.csv");
        to_file(&path, |w| write_boundary(w, &boundary())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("x,y,surface"));
    }
}
