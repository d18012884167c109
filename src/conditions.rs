//! Experimental condition axes and their recovery from rendered prompt text.
//!
//! The evaluation harness encodes the condition of each sample only as free
//! text inside the prompt, so the analyzer recovers it by matching the exact
//! catalog strings the prompt templates were assembled from. Matching is
//! first-hit in catalog-declared order, which is only unambiguous while no
//! catalog string is a substring of another; [`validate_catalog`] enforces
//! that authoring invariant before any batch runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Described composition of the co-players in a sample's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerVariant {
    SameModel,
    DiffModelSimilarlyRational,
    DiffModelOtherAgents,
    OtherHumans,
    OtherRationalHumans,
    /// Sentinel for prompts that match no catalog entry. Samples still count,
    /// grouped under this key, but signal a catalog/prompt mismatch upstream.
    Unknown,
}

/// Described move-order structure in a sample's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrderVariant {
    Default,
    OthersMoved,
    YouFirst,
    /// Sentinel for prompts that match no catalog entry.
    Unknown,
}

/// Player-composition catalog: variant paired with the literal sentence that
/// appears verbatim in prompts rendered under that variant.
pub const PLAYERS_SETUP_TEXT: [(PlayerVariant, &str); 5] = [
    (
        PlayerVariant::SameModel,
        "All players are instances of the same model as yourself.",
    ),
    (
        PlayerVariant::DiffModelSimilarlyRational,
        "Other players are similarly rational AI agents like yourself, including from OpenAI, Anthropic, DeepMind, and xAI.",
    ),
    (
        PlayerVariant::DiffModelOtherAgents,
        "Other players are AI agents like yourself, including from OpenAI, Anthropic, DeepMind, and xAI.",
    ),
    (
        PlayerVariant::OtherHumans,
        "You will be playing against other humans.",
    ),
    (
        PlayerVariant::OtherRationalHumans,
        "You will be playing against other rational humans.",
    ),
];

/// Move-order catalog, same shape as [`PLAYERS_SETUP_TEXT`].
pub const MOVE_ORDER_TEXT: [(MoveOrderVariant, &str); 3] = [
    (
        MoveOrderVariant::Default,
        "The choice of each player is hidden from every other player.",
    ),
    (
        MoveOrderVariant::OthersMoved,
        "The other player(s) have already submitted their choices. You cannot see them.",
    ),
    (
        MoveOrderVariant::YouFirst,
        "You are the first to submit your choice, but other players will not see it.",
    ),
];

impl PlayerVariant {
    /// The string key used in CSV output and row ordering.
    pub fn key(&self) -> &'static str {
        match self {
            PlayerVariant::SameModel => "same_model",
            PlayerVariant::DiffModelSimilarlyRational => "diff_model_similarly_rational",
            PlayerVariant::DiffModelOtherAgents => "diff_model_other_agents",
            PlayerVariant::OtherHumans => "other_humans",
            PlayerVariant::OtherRationalHumans => "other_rational_humans",
            PlayerVariant::Unknown => "unknown",
        }
    }
}

impl MoveOrderVariant {
    /// The string key used in CSV output and row ordering.
    pub fn key(&self) -> &'static str {
        match self {
            MoveOrderVariant::Default => "default",
            MoveOrderVariant::OthersMoved => "others_moved",
            MoveOrderVariant::YouFirst => "you_first",
            MoveOrderVariant::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlayerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl fmt::Display for MoveOrderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Recover both condition axes from a rendered prompt.
///
/// For each axis, returns the first catalog entry (in declared order) whose
/// text is contained in `input`, or the `Unknown` sentinel when none matches.
/// Total and pure: never fails, same input always yields the same pair.
pub fn extract_variants(input: &str) -> (PlayerVariant, MoveOrderVariant) {
    let player = PLAYERS_SETUP_TEXT
        .iter()
        .find(|(_, text)| input.contains(text))
        .map_or(PlayerVariant::Unknown, |(variant, _)| *variant);

    let move_order = MOVE_ORDER_TEXT
        .iter()
        .find(|(_, text)| input.contains(text))
        .map_or(MoveOrderVariant::Unknown, |(variant, _)| *variant);

    (player, move_order)
}

/// Check that no catalog string within an axis is a substring of another.
///
/// # Errors
///
/// Returns [`Error::AmbiguousCatalog`] naming the colliding pair. This is a
/// configuration fault: first-match extraction would become order-dependent,
/// so the batch must stop rather than emit misleading rows.
pub fn validate_catalog() -> Result<()> {
    let players: Vec<(&str, &str)> = PLAYERS_SETUP_TEXT
        .iter()
        .map(|(variant, text)| (variant.key(), *text))
        .collect();
    check_axis("player variant", &players)?;

    let move_orders: Vec<(&str, &str)> = MOVE_ORDER_TEXT
        .iter()
        .map(|(variant, text)| (variant.key(), *text))
        .collect();
    check_axis("move-order variant", &move_orders)
}

fn check_axis(axis: &str, entries: &[(&str, &str)]) -> Result<()> {
    for (i, (first_key, first_text)) in entries.iter().enumerate() {
        for (j, (second_key, second_text)) in entries.iter().enumerate() {
            if i != j && second_text.contains(first_text) {
                return Err(Error::AmbiguousCatalog {
                    axis: axis.to_string(),
                    first: (*first_key).to_string(),
                    second: (*second_key).to_string(),
                });
            }
        }
    }
    Ok(())
}
