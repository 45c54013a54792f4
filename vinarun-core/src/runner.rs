//! Round execution
//!
//! Runs the external docking engine once per round, as a blocking child
//! process. The engine is a black box: a non-zero exit is recorded in the
//! round's [`RoundResult`] but does not stop the loop or surface as an
//! error. No timeout is enforced; a hung engine blocks the loop until the
//! OS kills it.

use crate::job::DockingJobSpec;
use crate::timing::{TimingState, format_dhms};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors from driving the external engine.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The engine process could not be started at all.
    #[error("failed to spawn docking engine `{engine}`: {source}")]
    Spawn {
        /// Engine path as configured
        engine: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of one executed round.
///
/// Created when the round's engine invocation returns; never mutated
/// afterward.
#[derive(Debug)]
pub struct RoundResult {
    /// 1-based round index
    pub round: u32,
    /// Wall-clock duration of the engine invocation
    pub duration: Duration,
    /// Exit status of the engine process. Captured for inspection only;
    /// the runner does not act on it.
    pub status: ExitStatus,
}

/// Executes the rounds of one docking job, strictly sequentially.
pub struct RoundRunner {
    spec: DockingJobSpec,
}

impl RoundRunner {
    /// Create a runner for a job specification.
    pub fn new(spec: DockingJobSpec) -> Self {
        Self { spec }
    }

    /// The job specification this runner executes.
    pub fn spec(&self) -> &DockingJobSpec {
        &self.spec
    }

    /// Run every round without timing or progress output.
    ///
    /// Produces the per-round output and log files as side effects and
    /// returns one [`RoundResult`] per round.
    pub fn run_rounds(&self) -> Result<Vec<RoundResult>, RunnerError> {
        let mut results = Vec::with_capacity(self.spec.num_rounds as usize);
        for round in 1..=self.spec.num_rounds {
            results.push(self.run_round(round)?);
        }
        Ok(results)
    }

    /// Run every round, tracking per-round timing and reporting progress.
    ///
    /// After each round, prints the round's duration and the projected
    /// remaining time for the batch. A zero-round job performs no
    /// invocations and produces no timing output.
    pub fn run_rounds_timed(&self) -> Result<Vec<RoundResult>, RunnerError> {
        let total_rounds = self.spec.num_rounds;
        if total_rounds == 0 {
            return Ok(Vec::new());
        }

        let pb = ProgressBar::with_draw_target(
            Some(u64::from(total_rounds)),
            ProgressDrawTarget::stdout(),
        );
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut timing = TimingState::new();
        let mut results = Vec::with_capacity(total_rounds as usize);

        for round in 1..=total_rounds {
            pb.set_message(format!("round {round}"));
            pb.println(format!("\nRound: {round}\n"));

            let result = self.run_round(round)?;
            timing.record(result.duration);

            if let Some(remaining) = timing.estimated_remaining(total_rounds) {
                pb.println(format!(
                    "\nLast simulation: {:.2}s\nEstimated time remaining: {}",
                    result.duration.as_secs_f64(),
                    format_dhms(remaining),
                ));
            }

            results.push(result);
            pb.inc(1);
        }

        pb.finish_with_message("docking complete");
        Ok(results)
    }

    /// Invoke the engine once for a round, blocking until it exits.
    fn run_round(&self, round: u32) -> Result<RoundResult, RunnerError> {
        let spec = &self.spec;
        let start = Instant::now();

        let status = Command::new(&spec.engine)
            .arg("--receptor")
            .arg(&spec.receptor)
            .arg("--ligand")
            .arg(&spec.ligand)
            .arg("--out")
            .arg(spec.out_path(round))
            .arg("--log")
            .arg(spec.log_path(round))
            .args(["--center_x", &spec.center[0].to_string()])
            .args(["--center_y", &spec.center[1].to_string()])
            .args(["--center_z", &spec.center[2].to_string()])
            .args(["--size_x", &spec.size[0].to_string()])
            .args(["--size_y", &spec.size[1].to_string()])
            .args(["--size_z", &spec.size[2].to_string()])
            .args(["--energy_range", &spec.energy_range.to_string()])
            .args(["--exhaustiveness", &spec.exhaustiveness.to_string()])
            .status()
            .map_err(|source| RunnerError::Spawn {
                engine: spec.engine.display().to_string(),
                source,
            })?;

        let duration = start.elapsed();

        if !status.success() {
            tracing::warn!(round, %status, "engine exited with non-zero status");
        }

        Ok(RoundResult {
            round,
            duration,
            status,
        })
    }
}
