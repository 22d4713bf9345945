//! Step recorder shared by every algorithm.

use crate::{
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, Outcome},
    Algorithm,
};

/// Append-only step log for one run.
///
/// Each recorded step is also emitted through `log::debug!`, so a host application that
/// initialises a logger sees the same narrative a viewer would replay.
#[derive(Debug)]
pub(crate) struct Trace {
    algorithm: Algorithm,
    steps: Vec<AlgorithmStep>,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub(crate) fn record(&mut self, step: AlgorithmStep) {
        log::debug!("[{}] {}", self.algorithm, step.log);
        self.steps.push(step);
    }

    /// Closes the trace with a terminal state.
    pub(crate) fn finish(self, outcome: Outcome) -> AlgorithmResult {
        AlgorithmResult::new(self.algorithm, outcome, self.steps)
    }

    /// Closes the trace with a failed precondition.
    ///
    /// The explanatory step is recorded here, so callers must not record one themselves.
    pub(crate) fn reject(mut self, reason: Infeasibility) -> AlgorithmResult {
        log::warn!("{} rejected its input: {}", self.algorithm, reason);
        self.record(AlgorithmStep::new(format!("Cannot run {}: {}", self.algorithm, reason)));
        self.finish(Outcome::Rejected(reason))
    }
}
