use crate::error::{CliError, Result};
use foilflow::engine::config::SingularityPolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional overrides read from a TOML configuration file.
///
/// ```toml
/// [airfoil]
/// naca = "2412"
/// chord = 1.0
/// points = 70
///
/// [flow]
/// speed = 55.0
/// alpha = 4.0
///
/// [grid]
/// resolution = 100
/// singularity-policy = "exclude"
///
/// [sweep]
/// from = -4.0
/// to = 9.0
/// step = 1.0
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub airfoil: Option<FileAirfoilConfig>,
    pub flow: Option<FileFlowConfig>,
    pub grid: Option<FileGridConfig>,
    pub solver: Option<FileSolverConfig>,
    pub sweep: Option<FileSweepConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileAirfoilConfig {
    pub naca: Option<String>,
    pub chord: Option<f64>,
    pub points: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileFlowConfig {
    pub speed: Option<f64>,
    /// Degrees.
    pub alpha: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileGridConfig {
    pub resolution: Option<usize>,
    pub x_range: Option<[f64; 2]>,
    pub y_range: Option<[f64; 2]>,
    pub singular_radius: Option<f64>,
    pub singularity_policy: Option<SingularityPolicy>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSolverConfig {
    pub min_panel_length: Option<f64>,
    pub pivot_tolerance: Option<f64>,
    pub residual_tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSweepConfig {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub step: Option<f64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn full_file_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foil.toml");
        fs::write(
            &path,
            r#"
            [airfoil]
            naca = "4412"
            chord = 2.0
            points = 120

            [flow]
            speed = 30.0
            alpha = -2.5

            [grid]
            resolution = 50
            x-range = [-1.0, 3.0]
            singularity-policy = "exclude"

            [solver]
            residual-tolerance = 1e-10

            [sweep]
            from = -2.0
            to = 6.0
            step = 0.5
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let airfoil = config.airfoil.unwrap();
        assert_eq!(airfoil.naca.as_deref(), Some("4412"));
        assert_eq!(airfoil.points, Some(120));
        assert_eq!(config.flow.unwrap().alpha, Some(-2.5));
        let grid = config.grid.unwrap();
        assert_eq!(grid.x_range, Some([-1.0, 3.0]));
        assert_eq!(grid.singularity_policy, Some(SingularityPolicy::Exclude));
        assert_eq!(config.solver.unwrap().residual_tolerance, Some(1e-10));
        assert_eq!(config.sweep.unwrap().step, Some(0.5));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foil.toml");
        fs::write(&path, "[flow]\nvelocity = 10.0\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }
}
