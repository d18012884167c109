//! CLI infrastructure for the superrationality analysis toolkit
//!
//! This module provides the command-line interface for analyzing evaluation
//! logs and validating the condition catalog.

pub mod commands;
pub mod output;
