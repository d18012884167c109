//! Log analysis for superrationality game evaluations
//!
//! This crate provides:
//! - Recovery of experimental conditions from rendered prompt text
//! - Game-specific classification of agent answers as superrational or not
//! - Aggregation of classified samples into per-condition summary statistics
//! - CSV export of the summary consumed by downstream plotting

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conditions;
pub mod error;
pub mod export;
pub mod games;
pub mod logs;
pub mod records;

pub use aggregate::{AggregateRow, aggregate};
pub use classify::{Classification, classify};
pub use conditions::{MoveOrderVariant, PlayerVariant, extract_variants, validate_catalog};
pub use error::{Error, Result};
pub use games::{GameKind, RuleFamily};
pub use records::{ClassifiedRecord, build_records, read_log_records};
