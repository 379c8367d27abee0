use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{FieldSettings, GeometrySettings, SolveSettings, SweepSettings};
use crate::cli::{AirfoilArgs, FieldArgs, FlowArgs, GeometryArgs, SolveArgs, SweepArgs};
use crate::error::{CliError, Result};
use foilflow::core::models::airfoil::AirfoilParameters;
use foilflow::core::models::flow::FlowCondition;
use foilflow::core::models::grid::Grid;
use foilflow::engine::config::{
    AnalysisConfigBuilder, FieldConfig, SingularityPolicy, SolverConfig, SweepConfigBuilder,
};
use serde::de::{DeserializeOwned, IntoDeserializer, value::Error as ValueError};
use serde::Deserialize;
use std::str::FromStr;

pub fn build_geometry_settings(args: &GeometryArgs) -> Result<GeometrySettings> {
    let defaults = DefaultsConfig::default();
    let file_config = load_file_config(&args.airfoil)?;
    let (airfoil, num_points) = resolve_airfoil(&args.airfoil, &file_config, &defaults)?;
    Ok(GeometrySettings {
        airfoil,
        num_points,
    })
}

pub fn build_solve_settings(args: &SolveArgs) -> Result<SolveSettings> {
    let defaults = DefaultsConfig::default();
    let file_config = load_file_config(&args.airfoil)?;
    let (airfoil, num_points) = resolve_airfoil(&args.airfoil, &file_config, &defaults)?;
    Ok(SolveSettings {
        airfoil,
        num_points,
        flow: resolve_flow(&args.flow, &file_config, &defaults),
        solver: resolve_solver(&file_config),
    })
}

pub fn build_field_settings(args: &FieldArgs) -> Result<FieldSettings> {
    let defaults = DefaultsConfig::default();
    let file_config = load_file_config(&args.airfoil)?;
    let (airfoil, num_points) = resolve_airfoil(&args.airfoil, &file_config, &defaults)?;
    let grid_file = file_config.grid.clone().unwrap_or_default();

    let resolution = args
        .resolution
        .or(grid_file.resolution)
        .unwrap_or(defaults.grid_resolution);
    let chord = airfoil.chord();
    let [x0, x1] = grid_file.x_range.unwrap_or([-3.0 * chord, 2.0 * chord]);
    let [y0, y1] = grid_file.y_range.unwrap_or([-1.5 * chord, 1.5 * chord]);
    let grid = Grid::uniform((x0, x1), (y0, y1), resolution, resolution);

    let singularity_policy = if args.exclude_singular {
        SingularityPolicy::Exclude
    } else {
        grid_file.singularity_policy.unwrap_or_default()
    };
    let field = FieldConfig {
        singular_radius: grid_file
            .singular_radius
            .unwrap_or(FieldConfig::default().singular_radius),
        singularity_policy,
    };

    Ok(AnalysisConfigBuilder::new()
        .airfoil(airfoil)
        .num_points(num_points)
        .flow(resolve_flow(&args.flow, &file_config, &defaults))
        .grid(grid)
        .solver_config(resolve_solver(&file_config))
        .field_config(field)
        .build()?)
}

pub fn build_sweep_settings(args: &SweepArgs) -> Result<SweepSettings> {
    let defaults = DefaultsConfig::default();
    let file_config = load_file_config(&args.airfoil)?;
    let (airfoil, num_points) = resolve_airfoil(&args.airfoil, &file_config, &defaults)?;
    let sweep_file = file_config.sweep.clone().unwrap_or_default();
    let flow_file = file_config.flow.clone().unwrap_or_default();

    let from = args
        .from
        .or(sweep_file.from)
        .unwrap_or(defaults.sweep_from_deg);
    let to = args.to.or(sweep_file.to).unwrap_or(defaults.sweep_to_deg);
    let step = args
        .step
        .or(sweep_file.step)
        .unwrap_or(defaults.sweep_step_deg);

    Ok(SweepConfigBuilder::new()
        .airfoil(airfoil)
        .num_points(num_points)
        .free_stream_speed(args.speed.or(flow_file.speed).unwrap_or(defaults.speed))
        .angle_range_degrees(from, to, step)?
        .solver_config(resolve_solver(&file_config))
        .build()?)
}

fn load_file_config(args: &AirfoilArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn resolve_airfoil(
    args: &AirfoilArgs,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> Result<(AirfoilParameters, usize)> {
    let file = file_config.airfoil.clone().unwrap_or_default();
    let designation = args
        .naca
        .as_deref()
        .or(file.naca.as_deref())
        .unwrap_or(&defaults.naca);
    let chord = args.chord.or(file.chord).unwrap_or(defaults.chord);
    let points = args.points.or(file.points).unwrap_or(defaults.points);

    let params = AirfoilParameters::from_designation(designation, chord)?;
    Ok((params, points))
}

fn resolve_flow(
    args: &FlowArgs,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> FlowCondition {
    let file = file_config.flow.clone().unwrap_or_default();
    FlowCondition::from_degrees(
        args.speed.or(file.speed).unwrap_or(defaults.speed),
        args.alpha.or(file.alpha).unwrap_or(defaults.alpha_deg),
    )
}

fn resolve_solver(file_config: &FileConfig) -> SolverConfig {
    let file = file_config.solver.clone().unwrap_or_default();
    let defaults = SolverConfig::default();
    SolverConfig {
        min_panel_length: file.min_panel_length.unwrap_or(defaults.min_panel_length),
        pivot_tolerance: file.pivot_tolerance.unwrap_or(defaults.pivot_tolerance),
        residual_tolerance: file
            .residual_tolerance
            .unwrap_or(defaults.residual_tolerance),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

/// Parses a `-S` value written as an inline TOML value, e.g. `[-1.0, 3.0]`.
fn parse_toml_value<T: DeserializeOwned>(key: &str, value: &str) -> Result<T> {
    #[derive(Deserialize)]
    struct Inline<T> {
        value: T,
    }
    toml::from_str::<Inline<T>>(&format!("value = {}", value.trim()))
        .map(|inline| inline.value)
        .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e.message())))
}

fn parse_policy(key: &str, value: &str) -> Result<SingularityPolicy> {
    SingularityPolicy::deserialize(value.trim().into_deserializer())
        .map_err(|e: ValueError| CliError::Config(format!("Invalid value for {}: {}", key, e)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "airfoil.naca" => {
                config.airfoil.get_or_insert_with(Default::default).naca =
                    Some(value_str.trim().to_string());
            }
            "airfoil.chord" => {
                config.airfoil.get_or_insert_with(Default::default).chord =
                    Some(parse_value(key, value_str, "float")?);
            }
            "airfoil.points" => {
                config.airfoil.get_or_insert_with(Default::default).points =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "flow.speed" => {
                config.flow.get_or_insert_with(Default::default).speed =
                    Some(parse_value(key, value_str, "float")?);
            }
            "flow.alpha" => {
                config.flow.get_or_insert_with(Default::default).alpha =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.resolution" => {
                config.grid.get_or_insert_with(Default::default).resolution =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "grid.singular-radius" => {
                config.grid.get_or_insert_with(Default::default).singular_radius =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.x-range" => {
                config.grid.get_or_insert_with(Default::default).x_range =
                    Some(parse_toml_value(key, value_str)?);
            }
            "grid.y-range" => {
                config.grid.get_or_insert_with(Default::default).y_range =
                    Some(parse_toml_value(key, value_str)?);
            }
            "grid.singularity-policy" => {
                config
                    .grid
                    .get_or_insert_with(Default::default)
                    .singularity_policy = Some(parse_policy(key, value_str)?);
            }
            "solver.min-panel-length" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .min_panel_length = Some(parse_value(key, value_str, "float")?);
            }
            "solver.pivot-tolerance" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .pivot_tolerance = Some(parse_value(key, value_str, "float")?);
            }
            "solver.residual-tolerance" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .residual_tolerance = Some(parse_value(key, value_str, "float")?);
            }
            "sweep.from" => {
                config.sweep.get_or_insert_with(Default::default).from =
                    Some(parse_value(key, value_str, "float")?);
            }
            "sweep.to" => {
                config.sweep.get_or_insert_with(Default::default).to =
                    Some(parse_value(key, value_str, "float")?);
            }
            "sweep.step" => {
                config.sweep.get_or_insert_with(Default::default).step =
                    Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
