//! CLI Integration Tests
//!
//! Runs the built binary against data files and checks what lands on
//! stdout, stderr, and the exit status.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;
use vidcat::adapters::SEPARATOR;

fn write_data(dir: &Path, records: &[[&str; 4]]) -> PathBuf {
    let mut content = String::new();
    for record in records {
        for line in record {
            content.push_str(line);
            content.push('\n');
        }
        content.push_str(SEPARATOR);
        content.push('\n');
    }

    let path = dir.join("videos.txt");
    std::fs::write(&path, content).unwrap();
    path
}

/// Run the binary isolated from any user or project configuration
async fn run_vidcat(temp: &TempDir, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_vidcat"))
        .args(args)
        .current_dir(temp.path())
        .env("VIDCAT_HOME", temp.path().join("home"))
        .env_remove("VIDCAT_DATA")
        .env_remove("VIDCAT_OUTPUT")
        .env("RUST_LOG", "info")
        .kill_on_drop(true)
        .output()
        .await
        .expect("Failed to run vidcat")
}

#[tokio::test]
async fn test_json_listing_stays_clean_when_entries_are_rejected() {
    let temp = TempDir::new().unwrap();
    let data = write_data(
        temp.path(),
        &[
            ["Cats", "https://videos.example/cats", "5", "Comedy"],
            ["Bad", "https://videos.example/bad", "0", "Comedy"],
        ],
    );

    let output = run_vidcat(&temp, &["--data", data.to_str().unwrap(), "list", "--json"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let entries: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a single JSON document");
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Cats");

    // The rejection reason goes to stderr
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Rejected entry"));
    assert!(stderr.contains("duration must be a positive number of minutes"));
}

#[tokio::test]
async fn test_unknown_genre_terminates_process() {
    let temp = TempDir::new().unwrap();
    let data = write_data(
        temp.path(),
        &[
            ["Cats", "https://videos.example/cats", "5", "Comedy"],
            ["Jazz", "https://videos.example/jazz", "30", "Jazz"],
        ],
    );

    let output = run_vidcat(&temp, &["--data", data.to_str().unwrap(), "stats"]).await;

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid genre found while loading data"));

    // The command never runs
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_stats_output() {
    let temp = TempDir::new().unwrap();
    let data = write_data(
        temp.path(),
        &[
            ["Cats", "https://videos.example/cats", "5", "Comedy"],
            ["Song", "https://videos.example/song", "3", "Music"],
        ],
    );

    let output = run_vidcat(&temp, &["--data", data.to_str().unwrap(), "stats"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("***** Statistics *****\n"));
    assert!(stdout.contains("Number of video entries: 2\n"));
    assert!(stdout.contains("Genre \"Comedy\" count 1\n"));
    assert!(!stdout.contains("Loaded catalog data"));
}
