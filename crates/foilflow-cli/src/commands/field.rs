use crate::cli::FieldArgs;
use crate::config::build_field_settings;
use crate::error::Result;
use crate::output;
use foilflow::workflows::analyze;
use tracing::warn;

pub fn run(args: FieldArgs, quiet: bool) -> Result<()> {
    let settings = build_field_settings(&args)?;
    let (_handler, reporter) = super::reporter(quiet);

    let result = analyze::run(&settings, &reporter)?;
    let field = &result.field;

    if !field.singular_points.is_empty() {
        warn!(
            "{} grid point(s) coincided with a panel vortex; their terms were excluded.",
            field.singular_points.len()
        );
    }

    output::to_file(&args.output, |w| output::write_field(w, field))?;
    println!(
        "{}  α = {:.2}°  Cl = {:.4}",
        result.airfoil.name(),
        settings.flow.angle_of_attack_degrees(),
        field.lift_coefficient
    );
    println!(
        "{}×{} field written to {}",
        field.grid.nx(),
        field.grid.ny(),
        args.output.display()
    );
    Ok(())
}
