//! Input contract for completed evaluation log files.
//!
//! A log file is a JSON document with a `samples` array of per-trial
//! summaries, as produced by the evaluation harness. The analyzer reads
//! these summaries and never writes them back.

use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Name of the score entry carrying the superrationality verdict and the
/// model's extracted answer.
pub const SUPERRATIONAL_SCORER: &str = "superrational";

/// One completed evaluation log file.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalLog {
    pub samples: Vec<SampleSummary>,
}

/// One evaluated trial: a single model (or human) answer to one rendered
/// game prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleSummary {
    pub metadata: SampleMetadata,
    /// Full rendered prompt text the agent saw.
    pub input: String,
    /// Scorer outputs keyed by scorer name.
    #[serde(default)]
    pub scores: std::collections::HashMap<String, ScoreSummary>,
    /// Reference answer for target-match games, judge rubric otherwise.
    #[serde(default)]
    pub target: Option<String>,
}

/// Structured metadata attached to a sample at generation time.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleMetadata {
    pub game_key: String,
}

/// One scorer's output for a sample.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreSummary {
    /// Verdict value; a short code like "C"/"I" for graded games, but scorers
    /// may emit numbers, so it stays untyped here.
    #[serde(default)]
    pub value: Option<Value>,
    /// The answer the scorer extracted from the model output.
    #[serde(default)]
    pub answer: Option<String>,
}

impl SampleSummary {
    /// The superrationality score entry, if the scorer produced one.
    pub fn superrational_score(&self) -> Option<&ScoreSummary> {
        self.scores.get(SUPERRATIONAL_SCORER)
    }
}

/// Read and parse one log file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::LogParse`]
/// if its contents are not a well-formed log document. Both are file-level
/// faults: the caller skips the file and continues the batch.
pub fn read_log(path: &Path) -> Result<EvalLog> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open log file '{}'", path.display()),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| Error::LogParse {
        path: path.to_path_buf(),
        source,
    })
}
