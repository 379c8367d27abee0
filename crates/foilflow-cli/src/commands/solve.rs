use crate::cli::SolveArgs;
use crate::config::build_solve_settings;
use crate::error::Result;
use crate::output;
use foilflow::core::geometry::naca::Airfoil;
use foilflow::engine::error::EngineError;
use foilflow::solve;
use tracing::info;

pub fn run(args: SolveArgs, quiet: bool) -> Result<()> {
    let settings = build_solve_settings(&args)?;
    let (_handler, reporter) = super::reporter(quiet);

    let airfoil = reporter.phase("Geometry", || {
        Airfoil::generate(settings.airfoil, settings.num_points).map_err(EngineError::from)
    })?;
    let solution = reporter.phase("Panel Solution", || {
        solve(airfoil.boundary(), &settings.flow, &settings.solver)
    })?;

    info!(
        panels = solution.num_panels(),
        kutta_residual = solution.kutta_residual(),
        "Solution ready."
    );
    println!(
        "{}  V = {} m/s  α = {:.2}°  Cl = {:.4}",
        airfoil.name(),
        settings.flow.free_stream_speed,
        settings.flow.angle_of_attack_degrees(),
        solution.lift_coefficient
    );

    if let Some(path) = &args.output {
        output::to_file(path, |w| output::write_panels(w, &solution))?;
        println!("Panel results written to {}", path.display());
    }
    Ok(())
}
