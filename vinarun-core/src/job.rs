//! Docking job specification

use std::path::PathBuf;

/// Immutable description of one batch docking job.
///
/// Built once from configuration and shared by every round of the run.
/// Rounds differ only in the index used for output naming. Numeric fields
/// are in the engine's own units and pass through unvalidated beyond type
/// conversion.
#[derive(Debug, Clone)]
pub struct DockingJobSpec {
    /// Path to the docking engine binary
    pub engine: PathBuf,
    /// Receptor structure (PDBQT)
    pub receptor: PathBuf,
    /// Ligand structure (PDBQT)
    pub ligand: PathBuf,
    /// Prefix for per-round output and log files
    pub output_prefix: String,
    /// Search box center (x, y, z)
    pub center: [f64; 3],
    /// Search box size (x, y, z)
    pub size: [f64; 3],
    /// Maximum energy difference between the best and worst binding mode
    pub energy_range: i32,
    /// Search exhaustiveness
    pub exhaustiveness: u32,
    /// Number of independent rounds to run
    pub num_rounds: u32,
}

impl DockingJobSpec {
    /// Structure output path for a round (1-based).
    pub fn out_path(&self, round: u32) -> String {
        format!("{}_{}.pdbqt", self.output_prefix, round)
    }

    /// Log output path for a round (1-based).
    pub fn log_path(&self, round: u32) -> String {
        format!("{}_{}.log", self.output_prefix, round)
    }
}
