//! End-to-end tests for the log analysis batch pipeline.

use std::fs;

use serde_json::json;
use superrational::{
    aggregate::aggregate,
    cli::commands::analyze::{AnalyzeArgs, execute},
    conditions::{MOVE_ORDER_TEXT, PLAYERS_SETUP_TEXT},
    records::read_log_records,
};
use tempfile::TempDir;

/// Render a prompt the way the evaluation harness assembles them: game text,
/// then the player-composition sentence, then the move-order sentence.
fn render_prompt(player_index: usize, move_order_index: usize) -> String {
    format!(
        "You are playing a game.\n\n- There are 2 players.\n\n{}\n\n{}\n\nOutput your answer as 'ANSWER: LETTER'.\n",
        PLAYERS_SETUP_TEXT[player_index].1, MOVE_ORDER_TEXT[move_order_index].1
    )
}

fn prisoner_sample(answer: &str, player_index: usize, move_order_index: usize) -> serde_json::Value {
    json!({
        "metadata": {"game_key": "prisoner_dilemma"},
        "input": render_prompt(player_index, move_order_index),
        "scores": {"superrational": {"value": answer, "answer": answer}},
        "target": "C"
    })
}

fn platonia_sample(answer: &str, grade: &str) -> serde_json::Value {
    json!({
        "metadata": {"game_key": "platonia_dilemma"},
        "input": render_prompt(0, 0),
        "scores": {"superrational": {"value": grade, "answer": answer}},
        "target": "The submission uses a randomized approach."
    })
}

#[test]
fn single_file_batch_produces_expected_csv() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.json");
    let output = temp_dir.path().join("results.csv");

    fs::write(
        &log_path,
        serde_json::to_string(&json!({
            "samples": [
                prisoner_sample("C", 0, 0),
                prisoner_sample("C", 0, 0),
                prisoner_sample("D", 0, 0),
                prisoner_sample("D", 0, 0),
                platonia_sample("ANSWER: SEND", "C"),
                platonia_sample("ANSWER: NOTSEND", "I"),
            ]
        }))
        .unwrap(),
    )
    .unwrap();

    execute(AnalyzeArgs {
        input: log_path,
        output: output.clone(),
    })
    .unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "game_key,player_variant,move_order_variant,prop_superrational,prop_send,n_samples"
    );
    assert_eq!(lines[1], "platonia_dilemma,same_model,default,0.5,0.5,2");
    assert_eq!(lines[2], "prisoner_dilemma,same_model,default,0.5,,4");
    assert_eq!(lines.len(), 3);
}

#[test]
fn corrupted_file_is_skipped_and_valid_files_survive() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    let output = temp_dir.path().join("results.csv");

    fs::write(
        logs.join("a.json"),
        serde_json::to_string(&json!({"samples": [prisoner_sample("C", 0, 0)]})).unwrap(),
    )
    .unwrap();
    fs::write(
        logs.join("b.json"),
        serde_json::to_string(&json!({"samples": [prisoner_sample("D", 0, 0)]})).unwrap(),
    )
    .unwrap();
    fs::write(logs.join("c.json"), "{ not valid json").unwrap();

    execute(AnalyzeArgs {
        input: logs,
        output: output.clone(),
    })
    .unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "prisoner_dilemma,same_model,default,0.5,,2");
}

#[test]
fn file_with_unknown_game_key_contributes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    let output = temp_dir.path().join("results.csv");

    // One valid sample followed by an unregistered game: the whole file is
    // discarded, not just the bad sample.
    fs::write(
        logs.join("mixed.json"),
        serde_json::to_string(&json!({
            "samples": [
                prisoner_sample("C", 0, 0),
                {
                    "metadata": {"game_key": "stag_hunt"},
                    "input": render_prompt(0, 0),
                    "target": "C"
                }
            ]
        }))
        .unwrap(),
    )
    .unwrap();
    fs::write(
        logs.join("valid.json"),
        serde_json::to_string(&json!({"samples": [prisoner_sample("C", 1, 1)]})).unwrap(),
    )
    .unwrap();

    execute(AnalyzeArgs {
        input: logs,
        output: output.clone(),
    })
    .unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "prisoner_dilemma,diff_model_similarly_rational,others_moved,1.0,,1"
    );
}

#[test]
fn rerun_on_same_input_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.json");

    fs::write(
        &log_path,
        serde_json::to_string(&json!({
            "samples": [
                prisoner_sample("C", 2, 1),
                prisoner_sample("D", 4, 2),
                platonia_sample("ANSWER: SEND", "C"),
            ]
        }))
        .unwrap(),
    )
    .unwrap();

    let first_output = temp_dir.path().join("first.csv");
    let second_output = temp_dir.path().join("second.csv");
    execute(AnalyzeArgs {
        input: log_path.clone(),
        output: first_output.clone(),
    })
    .unwrap();
    execute(AnalyzeArgs {
        input: log_path,
        output: second_output.clone(),
    })
    .unwrap();

    assert_eq!(fs::read(&first_output).unwrap(), fs::read(&second_output).unwrap());
}

#[test]
fn nonexistent_input_fails_without_writing_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("results.csv");

    let result = execute(AnalyzeArgs {
        input: temp_dir.path().join("missing.json"),
        output: output.clone(),
    });

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn wrong_extension_fails_without_writing_output() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("run.eval");
    fs::write(&log_path, "{}").unwrap();
    let output = temp_dir.path().join("results.csv");

    let result = execute(AnalyzeArgs {
        input: log_path,
        output: output.clone(),
    });

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn record_reader_and_aggregator_compose_across_files() {
    let temp_dir = TempDir::new().unwrap();

    let first = temp_dir.path().join("first.json");
    fs::write(
        &first,
        serde_json::to_string(&json!({
            "samples": [
                {
                    "metadata": {"game_key": "wolf_dilemma"},
                    "input": render_prompt(3, 2),
                    "scores": {"superrational": {"value": "REFRAIN", "answer": "ANSWER: REFRAIN"}},
                    "target": "REFRAIN"
                }
            ]
        }))
        .unwrap(),
    )
    .unwrap();

    let second = temp_dir.path().join("second.json");
    fs::write(
        &second,
        serde_json::to_string(&json!({
            "samples": [
                {
                    "metadata": {"game_key": "wolf_dilemma"},
                    "input": render_prompt(3, 2),
                    "scores": {"superrational": {"value": "PUSH", "answer": "ANSWER: PUSH"}},
                    "target": "REFRAIN"
                }
            ]
        }))
        .unwrap(),
    )
    .unwrap();

    let mut records = read_log_records(&first).unwrap();
    records.extend(read_log_records(&second).unwrap());
    let rows = aggregate(&records);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].n_samples, 2);
    assert_eq!(rows[0].prop_superrational, 0.5);
    assert_eq!(rows[0].prop_send, None);
}
