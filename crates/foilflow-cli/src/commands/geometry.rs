use crate::cli::GeometryArgs;
use crate::config::build_geometry_settings;
use crate::error::Result;
use crate::output;
use foilflow::core::geometry::naca::Airfoil;
use tracing::info;

pub fn run(args: GeometryArgs) -> Result<()> {
    let settings = build_geometry_settings(&args)?;
    let airfoil = Airfoil::generate(settings.airfoil, settings.num_points)?;
    let boundary = airfoil.boundary();
    info!(
        airfoil = %airfoil.name(),
        points = boundary.len(),
        perimeter = boundary.perimeter(),
        "Boundary generated."
    );

    match &args.output {
        Some(path) => {
            output::to_file(path, |w| output::write_boundary(w, boundary))?;
            println!(
                "{}: {} boundary points written to {}",
                airfoil.name(),
                boundary.len(),
                path.display()
            );
        }
        None => output::write_boundary(std::io::stdout().lock(), boundary)?,
    }
    Ok(())
}
