//! The closed set of evaluated game kinds and their classification rule families.
//!
//! Every game the evaluation harness can emit must appear here; an identifier
//! outside this set is a log fault, not a silently-false classification. The
//! exhaustive match in [`GameKind::rule_family`] keeps the game catalog and
//! the answer classifier from drifting apart.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier for one of the superrationality games in the evaluation battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    PrisonerDilemma,
    NPlayerPrisonerDilemma,
    PlatoniaDilemma,
    PlatoniaDilemmaWithProvidedRandomness,
    WolfDilemma,
    ModifiedWolfDilemma,
}

/// How answers to a game are judged superrational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// Single-letter answer compared exactly against the reference target
    /// (Prisoner's Dilemma family; target is 'C' for cooperate).
    TargetLetter,
    /// Judged by an external model-graded verdict; the raw answer additionally
    /// yields an independent send/no-send signal (Platonia family).
    ModelGraded,
    /// Word answer compared exactly against the reference target
    /// (Wolf Dilemma family; target is REFRAIN).
    TargetWord,
}

impl GameKind {
    /// All game kinds, in catalog-declared order.
    pub const ALL: [GameKind; 6] = [
        GameKind::PrisonerDilemma,
        GameKind::NPlayerPrisonerDilemma,
        GameKind::PlatoniaDilemma,
        GameKind::PlatoniaDilemmaWithProvidedRandomness,
        GameKind::WolfDilemma,
        GameKind::ModifiedWolfDilemma,
    ];

    /// The string key used in log metadata and CSV output.
    pub fn key(&self) -> &'static str {
        match self {
            GameKind::PrisonerDilemma => "prisoner_dilemma",
            GameKind::NPlayerPrisonerDilemma => "n_player_prisoner_dilemma",
            GameKind::PlatoniaDilemma => "platonia_dilemma",
            GameKind::PlatoniaDilemmaWithProvidedRandomness => {
                "platonia_dilemma_with_provided_randomness"
            }
            GameKind::WolfDilemma => "wolf_dilemma",
            GameKind::ModifiedWolfDilemma => "modified_wolf_dilemma",
        }
    }

    /// The classification rule family for this game.
    pub fn rule_family(&self) -> RuleFamily {
        match self {
            GameKind::PrisonerDilemma | GameKind::NPlayerPrisonerDilemma => {
                RuleFamily::TargetLetter
            }
            GameKind::PlatoniaDilemma | GameKind::PlatoniaDilemmaWithProvidedRandomness => {
                RuleFamily::ModelGraded
            }
            GameKind::WolfDilemma | GameKind::ModifiedWolfDilemma => RuleFamily::TargetWord,
        }
    }

    /// Whether this game carries the send/no-send axis.
    pub fn is_platonia(&self) -> bool {
        self.rule_family() == RuleFamily::ModelGraded
    }
}

impl FromStr for GameKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| Error::UnknownGameKey { key: s.to_string() })
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
