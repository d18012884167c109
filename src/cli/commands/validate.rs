//! Validate command - Check condition catalog invariants
//!
//! Condition recovery matches catalog strings as prompt substrings in
//! declared order, so no string within an axis may contain another. This
//! command prints both axes and verifies that invariant.

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, print_subsection},
    conditions::{self, MOVE_ORDER_TEXT, PLAYERS_SETUP_TEXT},
};

#[derive(Parser, Debug)]
#[command(about = "Validate the condition catalog")]
pub struct ValidateArgs {}

pub fn execute(_args: ValidateArgs) -> Result<()> {
    print_section("Condition Catalog");

    print_subsection("Player variants");
    for (variant, text) in PLAYERS_SETUP_TEXT {
        print_kv(variant.key(), text);
    }

    print_subsection("Move-order variants");
    for (variant, text) in MOVE_ORDER_TEXT {
        print_kv(variant.key(), text);
    }

    conditions::validate_catalog()?;
    println!("\n✓ Catalog strings are pairwise exclusive within each axis");
    Ok(())
}
