use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::normalize::{first_mismatch, normalize};
use crate::simulator::Simulator;

/// One comparison: a program for the simulator and the output it should print.
#[derive(Debug, Clone)]
pub struct Case {
    pub program: PathBuf,
    pub expected: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Error,
}

impl Outcome {
    pub fn indicator(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Error => "error",
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::Error => 1,
        }
    }
}

/// An input file could not be used. These abort the run before any verdict.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot read program file {}", path.display())]
    Program {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read expected output {}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn run(case: &Case, simulator: &Simulator) -> Result<Outcome, HarnessError> {
    let expected = fs::read_to_string(&case.expected).map_err(|source| HarnessError::Fixture {
        path: case.expected.clone(),
        source,
    })?;
    // Only checks readability; the simulator opens the program itself.
    fs::File::open(&case.program).map_err(|source| HarnessError::Program {
        path: case.program.clone(),
        source,
    })?;

    let capture = simulator.run(&case.program);
    debug!(status = ?capture.status, bytes = capture.stdout.len(), "simulator finished");
    Ok(compare(&expected, &capture.stdout))
}

pub fn compare(expected: &str, actual: &str) -> Outcome {
    if normalize(actual) == normalize(expected) {
        return Outcome::Ok;
    }
    if let Some(m) = first_mismatch(expected, actual) {
        debug!(
            token = m.index,
            expected = m.expected.as_deref().unwrap_or("<end of output>"),
            actual = m.actual.as_deref().unwrap_or("<end of output>"),
            "output mismatch"
        );
    }
    Outcome::Error
}
