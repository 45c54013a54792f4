//! Configuration loading from vinarun.toml
//!
//! The job is described in a `vinarun.toml` file, discovered by walking up
//! from the current directory when no explicit path is given. The `[input]`
//! section is required; every other field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vinarun_core::DockingJobSpec;

/// vinarun configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VinaConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,
    /// Receptor and ligand inputs (required)
    pub input: InputConfig,
    /// Search box and round configuration
    #[serde(default)]
    pub docking: DockingConfig,
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Docking engine location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the engine binary
    #[serde(default = "default_engine_path")]
    pub path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: default_engine_path(),
        }
    }
}

fn default_engine_path() -> PathBuf {
    PathBuf::from("vina")
}

/// Receptor and ligand structures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Receptor structure (PDBQT)
    pub receptor: PathBuf,
    /// Ligand structure (PDBQT)
    pub ligand: PathBuf,
}

/// Search box, sampling effort, and round count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockingConfig {
    /// Prefix for per-round output and log files. The aggregation stage
    /// expects logs named `output_docking_{i}.log` in the receptor's
    /// directory, so only change this if you aggregate elsewhere.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Search box center
    #[serde(default)]
    pub center_x: f64,
    /// Search box center
    #[serde(default)]
    pub center_y: f64,
    /// Search box center
    #[serde(default)]
    pub center_z: f64,
    /// Search box size
    #[serde(default = "default_size")]
    pub size_x: f64,
    /// Search box size
    #[serde(default = "default_size")]
    pub size_y: f64,
    /// Search box size
    #[serde(default = "default_size")]
    pub size_z: f64,
    /// Maximum energy difference between the best and worst binding mode
    #[serde(default = "default_energy_range")]
    pub energy_range: i32,
    /// Search exhaustiveness
    #[serde(default = "default_exhaustiveness")]
    pub exhaustiveness: u32,
    /// Number of independent rounds
    #[serde(default = "default_num_rounds")]
    pub num_rounds: u32,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            center_x: 0.0,
            center_y: 0.0,
            center_z: 0.0,
            size_x: default_size(),
            size_y: default_size(),
            size_z: default_size(),
            energy_range: default_energy_range(),
            exhaustiveness: default_exhaustiveness(),
            num_rounds: default_num_rounds(),
        }
    }
}

fn default_output_prefix() -> String {
    "output_docking".to_string()
}
fn default_size() -> f64 {
    20.0
}
fn default_energy_range() -> i32 {
    4
}
fn default_exhaustiveness() -> u32 {
    8
}
fn default_num_rounds() -> u32 {
    1
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the aggregated tab-separated report
    #[serde(default = "default_report")]
    pub report: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: default_report(),
        }
    }
}

fn default_report() -> PathBuf {
    PathBuf::from("output_results.txt")
}

impl VinaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("vinarun.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string.
    pub fn default_toml() -> String {
        r#"# vinarun Configuration

[engine]
# Path to the AutoDock Vina binary
path = "vina"

[input]
# Receptor and ligand structures (PDBQT)
receptor = "receptor.pdbqt"
ligand = "ligand.pdbqt"

[docking]
# Prefix for per-round output and log files. Aggregation expects logs named
# output_docking_{i}.log in the receptor's directory.
output_prefix = "output_docking"
# Search box center
center_x = 0.0
center_y = 0.0
center_z = 0.0
# Search box size
size_x = 20.0
size_y = 20.0
size_z = 20.0
# Maximum energy difference between best and worst binding mode
energy_range = 4
# Search exhaustiveness
exhaustiveness = 8
# Number of independent docking rounds
num_rounds = 1

[output]
# Aggregated tab-separated report
report = "output_results.txt"
"#
        .to_string()
    }

    /// Build the job specification this configuration describes.
    pub fn job_spec(&self) -> DockingJobSpec {
        DockingJobSpec {
            engine: self.engine.path.clone(),
            receptor: self.input.receptor.clone(),
            ligand: self.input.ligand.clone(),
            output_prefix: self.docking.output_prefix.clone(),
            center: [
                self.docking.center_x,
                self.docking.center_y,
                self.docking.center_z,
            ],
            size: [self.docking.size_x, self.docking.size_y, self.docking.size_z],
            energy_range: self.docking.energy_range,
            exhaustiveness: self.docking.exhaustiveness,
            num_rounds: self.docking.num_rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_applies_defaults() {
        let toml_str = r#"
            [input]
            receptor = "protein.pdbqt"
            ligand = "drug.pdbqt"

            [docking]
            num_rounds = 5
        "#;

        let config: VinaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.receptor, PathBuf::from("protein.pdbqt"));
        assert_eq!(config.docking.num_rounds, 5);
        // Defaults should still apply
        assert_eq!(config.engine.path, PathBuf::from("vina"));
        assert_eq!(config.docking.output_prefix, "output_docking");
        assert_eq!(config.docking.size_x, 20.0);
        assert_eq!(config.output.report, PathBuf::from("output_results.txt"));
    }

    #[test]
    fn test_missing_input_section_fails() {
        let toml_str = r#"
            [docking]
            num_rounds = 5
        "#;

        assert!(toml::from_str::<VinaConfig>(toml_str).is_err());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: VinaConfig = toml::from_str(&VinaConfig::default_toml()).unwrap();
        assert_eq!(config.docking.num_rounds, 1);
        assert_eq!(config.docking.exhaustiveness, 8);
    }

    #[test]
    fn test_job_spec_mirrors_config() {
        let config: VinaConfig = toml::from_str(&VinaConfig::default_toml()).unwrap();
        let spec = config.job_spec();
        assert_eq!(spec.center, [0.0, 0.0, 0.0]);
        assert_eq!(spec.size, [20.0, 20.0, 20.0]);
        assert_eq!(spec.energy_range, 4);
        assert_eq!(spec.output_prefix, "output_docking");
    }
}
