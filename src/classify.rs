//! Answer classification: is an agent's answer the superrational choice?
//!
//! Pure and deterministic. Dispatch is by rule family, not per-game
//! branching, so adding a game means registering it in
//! [`GameKind::rule_family`](crate::games::GameKind::rule_family) and nothing
//! else here.

use serde_json::Value;

use crate::games::{GameKind, RuleFamily};

/// Marker the answer-format instructions ask agents to emit before their
/// final choice.
const ANSWER_MARKER: &str = "ANSWER:";

/// Verdict code the model-graded judge emits for a correct submission.
const CORRECT_GRADE: &str = "C";

/// Classification outcome for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_superrational: bool,
    /// Whether the answer commits to sending. `Some` only for the Platonia
    /// family; `None` when the axis is inapplicable.
    pub is_send: Option<bool>,
}

/// Classify one answer under the given game's rules.
///
/// Target-match families resolve the raw answer and compare it exactly
/// against the reference target; a missing target or empty answer is simply
/// not superrational. The Platonia family defers `is_superrational` to the
/// external judge verdict in `score_value` and derives `is_send` locally from
/// the raw text. The two Platonia signals are reported independently and are
/// not reconciled when they disagree.
pub fn classify(
    game: GameKind,
    answer: &str,
    score_value: Option<&Value>,
    target: Option<&str>,
) -> Classification {
    match game.rule_family() {
        RuleFamily::TargetLetter | RuleFamily::TargetWord => Classification {
            is_superrational: matches_target(answer, target),
            is_send: None,
        },
        RuleFamily::ModelGraded => Classification {
            is_superrational: score_value.and_then(Value::as_str) == Some(CORRECT_GRADE),
            is_send: Some(mentions_send(answer)),
        },
    }
}

fn matches_target(answer: &str, target: Option<&str>) -> bool {
    match target {
        Some(target) => resolve_answer(answer) == target,
        None => false,
    }
}

/// Resolve the final choice token from a raw answer.
///
/// Takes the text after the last `ANSWER:` marker (the whole answer when the
/// marker is absent) and returns its first whitespace-delimited token, so
/// `"ANSWER: C"` resolves to `"C"` and a bare `"REFRAIN"` passes through.
pub fn resolve_answer(answer: &str) -> &str {
    let tail = match answer.rfind(ANSWER_MARKER) {
        Some(index) => &answer[index + ANSWER_MARKER.len()..],
        None => answer,
    };
    tail.split_whitespace().next().unwrap_or("")
}

/// True iff the answer commits to sending: contains the token SEND but not
/// NOTSEND. The negation guard matters because NOTSEND contains SEND as a
/// literal substring.
fn mentions_send(answer: &str) -> bool {
    let upper = answer.to_uppercase();
    upper.contains("SEND") && !upper.contains("NOTSEND")
}
