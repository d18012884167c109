//! Aggregation of classified records into per-condition summary rows.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    conditions::{MoveOrderVariant, PlayerVariant},
    games::GameKind,
    records::ClassifiedRecord,
};

/// Summary statistics for one (game, player variant, move order) group.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRow {
    pub game_key: GameKind,
    pub player_variant: PlayerVariant,
    pub move_order_variant: MoveOrderVariant,
    /// Fraction of the group classified superrational, over all samples.
    pub prop_superrational: f64,
    /// Fraction of send answers over the samples that carry a send signal.
    /// `None` iff no sample in the group carries one. The denominator is the
    /// signal-carrying subset, not `n_samples`.
    pub prop_send: Option<f64>,
    pub n_samples: usize,
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    samples: usize,
    superrational: usize,
    send_known: usize,
    send_true: usize,
}

impl GroupAccumulator {
    fn fold(&mut self, record: &ClassifiedRecord) {
        self.samples += 1;
        if record.is_superrational {
            self.superrational += 1;
        }
        if let Some(send) = record.is_send {
            self.send_known += 1;
            if send {
                self.send_true += 1;
            }
        }
    }
}

/// Group records by (game, player variant, move-order variant) and reduce
/// each group to proportions and a sample count.
///
/// Rows exist only for observed keys, so every row has `n_samples >= 1`.
/// Output is sorted ascending lexicographically by the string key triple,
/// making re-runs on the same input byte-stable downstream.
pub fn aggregate(records: &[ClassifiedRecord]) -> Vec<AggregateRow> {
    let mut groups: HashMap<(GameKind, PlayerVariant, MoveOrderVariant), GroupAccumulator> =
        HashMap::new();

    for record in records {
        groups
            .entry((
                record.game_key,
                record.player_variant,
                record.move_order_variant,
            ))
            .or_default()
            .fold(record);
    }

    let mut rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|((game_key, player_variant, move_order_variant), group)| AggregateRow {
            game_key,
            player_variant,
            move_order_variant,
            prop_superrational: group.superrational as f64 / group.samples as f64,
            prop_send: (group.send_known > 0)
                .then(|| group.send_true as f64 / group.send_known as f64),
            n_samples: group.samples,
        })
        .collect();

    rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    rows
}

impl AggregateRow {
    fn sort_key(&self) -> (&'static str, &'static str, &'static str) {
        (
            self.game_key.key(),
            self.player_variant.key(),
            self.move_order_variant.key(),
        )
    }
}
