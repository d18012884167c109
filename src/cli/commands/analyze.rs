//! Analyze command - Batch analysis of evaluation logs into a CSV summary

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    aggregate::aggregate,
    cli::output::{create_file_progress, print_kv, print_section, print_subsection},
    conditions,
    export::SummaryCsvExporter,
    records::{ClassifiedRecord, read_log_records},
};

/// File extension recognized for evaluation logs.
const LOG_EXTENSION: &str = "json";

/// Default output path in the working directory.
const DEFAULT_OUTPUT: &str = "results.csv";

#[derive(Parser, Debug)]
#[command(about = "Analyze evaluation logs and write a CSV summary")]
pub struct AnalyzeArgs {
    /// Log file (.json) or directory containing log files
    pub input: PathBuf,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    // Catalog drift is a configuration fault: stop before touching any logs.
    conditions::validate_catalog()?;

    let log_files = collect_log_files(&args.input)?;

    print_section("Superrationality Log Analysis");
    println!("Input: {}", args.input.display());
    println!("Log files: {}", log_files.len());
    println!();

    let pb = create_file_progress(log_files.len() as u64);
    let mut records: Vec<ClassifiedRecord> = Vec::new();
    let mut failed_files = 0usize;

    for path in &log_files {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        pb.set_message(name.clone());

        match read_log_records(path) {
            Ok(mut file_records) => {
                pb.println(format!("Processing {name}... {} samples", file_records.len()));
                records.append(&mut file_records);
            }
            Err(error) => {
                failed_files += 1;
                pb.suspend(|| eprintln!("Error processing {}: {error}", path.display()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let rows = aggregate(&records);
    let written = SummaryCsvExporter::export(&rows, &args.output)?;

    print_subsection("Summary");
    print_kv("Files analyzed", &(log_files.len() - failed_files).to_string());
    if failed_files > 0 {
        print_kv("Files skipped", &failed_files.to_string());
    }
    print_kv("Samples", &records.len().to_string());
    print_kv("Aggregate rows", &written.to_string());

    println!("\nDone! Results written to {}", args.output.display());
    Ok(())
}

/// Resolve the input path to the ordered list of log files to process.
///
/// A directory is scanned (non-recursively) for `*.json` files, sorted by
/// file name for a stable processing order. A single file must carry the log
/// extension. Anything else is an invalid-input fault and fails before any
/// output is written.
fn collect_log_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(input)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == LOG_EXTENSION)
            })
            .collect();
        files.sort();
        if files.is_empty() {
            println!("Warning: no .{LOG_EXTENSION} log files found in {}", input.display());
        }
        Ok(files)
    } else if input.is_file() {
        if !input.extension().is_some_and(|ext| ext == LOG_EXTENSION) {
            bail!(
                "'{}' is not a .{LOG_EXTENSION} log file",
                input.display()
            );
        }
        Ok(vec![input.to_path_buf()])
    } else {
        bail!("input path '{}' does not exist", input.display());
    }
}
