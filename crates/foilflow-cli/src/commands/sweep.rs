use crate::cli::SweepArgs;
use crate::config::build_sweep_settings;
use crate::error::Result;
use crate::output;
use foilflow::workflows::sweep::{self, LiftCurve};

pub fn run(args: SweepArgs, quiet: bool) -> Result<()> {
    let settings = build_sweep_settings(&args)?;
    let (_handler, reporter) = super::reporter(quiet);

    let curve = sweep::run(&settings, &reporter)?;
    print_curve(&settings.airfoil.to_string(), &curve);

    if let Some(path) = &args.output {
        output::to_file(path, |w| output::write_lift_curve(w, &curve))?;
        println!("Lift curve written to {}", path.display());
    }
    Ok(())
}

fn print_curve(name: &str, curve: &LiftCurve) {
    println!("{name}");
    println!("{:>10}  {:>9}", "alpha_deg", "Cl");
    for point in &curve.points {
        println!(
            "{:>10.2}  {:>9.4}",
            point.angle_of_attack_deg, point.lift_coefficient
        );
    }
    match curve.slope_per_radian {
        Some(slope) => println!(
            "dCl/dα = {:.4} per rad ({:.1}% of 2π)",
            slope,
            100.0 * curve.thin_airfoil_ratio().unwrap_or_default()
        ),
        None => println!("dCl/dα: not enough distinct angles for a fit"),
    }
    if let Some(alpha0) = curve.zero_lift_angle_degrees() {
        println!("Zero-lift angle = {:.2}°", alpha0);
    }
}
