//! Record building: one classified record per evaluated sample.
//!
//! This is the fault-isolation boundary for file-level errors. A file either
//! yields records for every sample it contains or contributes nothing; the
//! batch driver reports failed files and moves on.

use std::path::Path;

use crate::{
    classify::classify,
    conditions::{self, MoveOrderVariant, PlayerVariant},
    error::Result,
    games::GameKind,
    logs::{self, EvalLog, SampleSummary},
};

/// One sample, classified and condition-resolved. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ClassifiedRecord {
    pub game_key: GameKind,
    pub player_variant: PlayerVariant,
    pub move_order_variant: MoveOrderVariant,
    pub is_superrational: bool,
    /// `Some` only for Platonia-family games.
    pub is_send: Option<bool>,
    pub answer: String,
    pub target: Option<String>,
}

/// Read one log file and classify every sample in it.
///
/// # Errors
///
/// Fails as a whole (no partial records) if the file cannot be read or
/// parsed, or if any sample carries a game key outside the registered set.
pub fn read_log_records(path: &Path) -> Result<Vec<ClassifiedRecord>> {
    let log = logs::read_log(path)?;
    build_records(&log)
}

/// Classify every sample of an already-parsed log, all-or-nothing.
pub fn build_records(log: &EvalLog) -> Result<Vec<ClassifiedRecord>> {
    log.samples.iter().map(classify_sample).collect()
}

fn classify_sample(summary: &SampleSummary) -> Result<ClassifiedRecord> {
    let game_key: GameKind = summary.metadata.game_key.parse()?;
    let (player_variant, move_order_variant) = conditions::extract_variants(&summary.input);

    let score = summary.superrational_score();
    let answer = score
        .and_then(|score| score.answer.as_deref())
        .unwrap_or_default();
    let classification = classify(
        game_key,
        answer,
        score.and_then(|score| score.value.as_ref()),
        summary.target.as_deref(),
    );

    Ok(ClassifiedRecord {
        game_key,
        player_variant,
        move_order_variant,
        is_superrational: classification.is_superrational,
        is_send: classification.is_send,
        answer: answer.to_string(),
        target: summary.target.clone(),
    })
}
