//! Entry point of the engine: validate credentials, run every registered
//! pipeline, then assemble the trace and comparison.

use serde::Serialize;
use tracing::debug;

use crate::comparison::Comparison;
use crate::credentials::Credentials;
use crate::error::DemoError;
use crate::exchange::{self, ClassicalExchange, KeyExchangeAlgorithm, Pipeline, PipelineRun, PqcExchange};
use crate::trace::StepRecord;

#[derive(Debug, Clone, Serialize)]
pub struct DemoResult {
    pub classical: Vec<StepRecord>,
    pub pqc: Vec<StepRecord>,
    pub comparison: Comparison,
}

/// Runs the classical and post-quantum pipelines side by side
pub struct Demo {
    algorithms: Vec<Box<dyn KeyExchangeAlgorithm>>,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            algorithms: vec![Box::new(ClassicalExchange), Box::new(PqcExchange)],
        }
    }

    /// Simulate both key exchanges for one credential pair.
    ///
    /// Empty fields fail with [`DemoError::Validation`] before any key
    /// material is generated.
    pub fn simulate(&self, username: &str, password: &str) -> Result<DemoResult, DemoError> {
        let credentials = Credentials::new(username, password).inspect_err(|_| {
            debug!("rejected request with missing credentials");
        })?;

        let mut classical = None;
        let mut pqc = None;
        for algorithm in &self.algorithms {
            let run = exchange::run(algorithm.as_ref(), &credentials)?;
            match run.pipeline {
                Pipeline::Classical => classical = Some(run),
                Pipeline::PostQuantum => pqc = Some(run),
            }
        }

        let classical = classical.ok_or(DemoError::Incomplete(Pipeline::Classical))?;
        let pqc = pqc.ok_or(DemoError::Incomplete(Pipeline::PostQuantum))?;
        Ok(assemble(classical, pqc))
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

fn assemble(classical: PipelineRun, pqc: PipelineRun) -> DemoResult {
    let comparison = Comparison::report(
        (&classical.profile, &classical.artifacts),
        (&pqc.profile, &pqc.artifacts),
    );
    DemoResult {
        classical: classical.steps,
        pqc: pqc.steps,
        comparison,
    }
}
