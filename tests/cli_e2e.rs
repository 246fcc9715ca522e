//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check the
//! report it produces.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text report on stdout
//! - **Output formats**: text, JSON and CSV, to stdout and to files
//! - **Flags**: sender filter, emoji limit, heat map, system notices
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
14/02/23, 8:01 am - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
14/02/23, 8:05 am - Alice: Morning everyone 🎉
14/02/23, 8:06 am - Bob: <Media omitted>
14/02/23, 8:07 am - Carol: check https://a.com and https://b.com
14/02/23, 9:30 pm - Alice: 😂😂
01/04/23, 12:15 pm - Bob: This message was deleted
01/04/23, 12:16 pm - Alice: Thanks!
";

/// Creates a temporary directory with test transcripts.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("notes.txt"),
        "Shopping list\n- milk\n- eggs\n",
    )
    .unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_text_report_to_stdout() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics (overall)"))
            .stdout(predicate::str::contains("Messages:  6"))
            .stdout(predicate::str::contains("Media:     1"))
            .stdout(predicate::str::contains("Links:     2"))
            .stdout(predicate::str::contains("Q1-2023"))
            .stdout(predicate::str::contains("Q2-2023"))
            .stdout(predicate::str::contains("Hourly activity"));
    }

    #[test]
    fn test_ranking_in_report() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Most active"))
            .stdout(predicate::str::contains("(50.0%)"))
            .stdout(predicate::str::contains("(33.3%)"))
            .stdout(predicate::str::contains("(16.7%)"));
    }

    #[test]
    fn test_list_senders() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--list-senders"])
            .assert()
            .success()
            .stdout("Alice\nBob\nCarol\n");
    }

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--sender"))
            .stdout(predicate::str::contains("--format"));
    }

    #[test]
    fn test_version() {
        chatlens_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlens"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_json_to_stdout() {
        let fixtures = setup_fixtures();

        let output = chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "-f", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["filter"], "overall");
        assert_eq!(value["stats"]["total_messages"], 6);
        assert_eq!(value["stats"]["total_urls"], 2);
        assert_eq!(value["week_activity"].as_array().unwrap().len(), 7);
        assert_eq!(value["month_activity"].as_array().unwrap().len(), 12);
        assert_eq!(value["heat_map"]["Tuesday"]["8"], 3);
    }

    #[test]
    fn test_json_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatlens_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("JSON"));

        let content = fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["most_active"][0]["sender"], "Alice");
    }

    #[test]
    fn test_csv_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.csv");

        chatlens_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Section;Label;Count;Percentage"));
        assert!(content.contains("stats;total_messages;6;"));
        assert!(content.contains("most_active;Alice;3;50.0"));
        assert!(content.contains("weekday;Tuesday;4;"));
        assert!(content.contains("heat_map;Tuesday 08;3;"));
    }

    #[test]
    fn test_format_flag_overrides_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.csv");

        chatlens_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "--format",
                "text",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Chat statistics"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_sender_filter() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--sender", "Alice"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics (Alice)"))
            .stdout(predicate::str::contains("Messages:  3"))
            // ranking is not filtered
            .stdout(predicate::str::contains("Carol"));
    }

    #[test]
    fn test_unknown_sender_is_not_an_error() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "-s", "Nobody"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  0"))
            .stderr(predicate::str::contains("No messages from 'Nobody'"));
    }

    #[test]
    fn test_skip_system() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--skip-system"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:  5"));
    }

    #[test]
    fn test_no_heat_map() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--no-heat-map"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hourly activity").not());
    }

    #[test]
    fn test_top_emojis_limit() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.csv");

        chatlens_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "--top-emojis",
                "1",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.matches("\nemoji;").count(), 1);
        assert!(content.contains("emoji;😂;2;"));
    }

    #[test]
    fn test_top_senders() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--top-senders", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Others"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .env_remove("RUST_LOG")
            .args([fixture(&fixtures, "chat.txt").as_str(), "-v", "-f", "json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Parsed transcript"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_file() {
        chatlens_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("❌ Error"))
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No chat messages found"));
    }

    #[test]
    fn test_not_a_chat() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("WhatsApp chat export"));
    }

    #[test]
    fn test_missing_input_argument() {
        chatlens_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("<INPUT>"));
    }

    #[test]
    fn test_unwritable_output() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "-o",
                "/nonexistent/dir/report.json",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }
}
