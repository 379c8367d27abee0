use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "foilflow - inviscid vortex-panel analysis of NACA 4-digit airfoils.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the airfoil boundary and write its points as CSV.
    Geometry(GeometryArgs),
    /// Solve the panel system for one flow condition and report the lift coefficient.
    Solve(SolveArgs),
    /// Solve, then evaluate stream function, velocity and pressure on a grid.
    Field(FieldArgs),
    /// Sweep the angle of attack and fit the lift-curve slope.
    Sweep(SweepArgs),
}

/// Airfoil selection and configuration sources shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct AirfoilArgs {
    /// NACA 4-digit designation, e.g. '2412' or 'NACA0012'.
    #[arg(long, value_name = "DIGITS")]
    pub naca: Option<String>,

    /// Chord length.
    #[arg(long, value_name = "FLOAT")]
    pub chord: Option<f64>,

    /// Number of boundary points (panels + 1).
    #[arg(short = 'n', long, value_name = "INT")]
    pub points: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Examples: -S flow.alpha=4,
    /// -S "grid.x-range=[-1.0, 2.0]", -S grid.singularity-policy=exclude
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FlowArgs {
    /// Free-stream speed.
    #[arg(long, value_name = "FLOAT")]
    pub speed: Option<f64>,

    /// Angle of attack in degrees.
    #[arg(short, long, value_name = "DEG", allow_negative_numbers = true)]
    pub alpha: Option<f64>,
}

#[derive(Args, Debug)]
pub struct GeometryArgs {
    #[command(flatten)]
    pub airfoil: AirfoilArgs,

    /// Output CSV path. Prints to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub airfoil: AirfoilArgs,

    #[command(flatten)]
    pub flow: FlowArgs,

    /// Write per-panel results (circulation, surface speed, Cp) to this CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    #[command(flatten)]
    pub airfoil: AirfoilArgs,

    #[command(flatten)]
    pub flow: FlowArgs,

    /// Number of grid points along each axis.
    #[arg(short, long, value_name = "INT")]
    pub resolution: Option<usize>,

    /// Skip vortex terms at grid points that coincide with a panel vortex
    /// instead of failing.
    #[arg(long)]
    pub exclude_singular: bool,

    /// Output CSV path for the field samples.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub airfoil: AirfoilArgs,

    /// Free-stream speed.
    #[arg(long, value_name = "FLOAT")]
    pub speed: Option<f64>,

    /// First angle of attack in degrees.
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// Last angle of attack in degrees (inclusive).
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Angle increment in degrees.
    #[arg(long, value_name = "DEG")]
    pub step: Option<f64>,

    /// Write the lift table to this CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
