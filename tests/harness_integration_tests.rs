//! End-to-end integration tests demonstrating the test harness.
//!
//! These tests exercise the CLI through the harness API, showing how to
//! set up test environments, seed note stores, and make assertions.

mod common;

use common::harness::{TestEnv, TestNote};
use predicates::prelude::*;

#[test]
fn test_note_lifecycle() {
    let env = TestEnv::new();

    let id = env
        .cmd()
        .new_note()
        .args(["--title", "Weekend"])
        .output_success()
        .trim()
        .to_string();

    env.cmd()
        .edit(&id)
        .args(["--body", "hike on Saturday"])
        .assert()
        .success();

    env.cmd()
        .search("saturday")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend"));

    env.cmd().rm(&id).assert().success();

    env.cmd()
        .ls()
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
    assert!(env.read_notes().is_empty());
}

#[test]
fn test_seeded_notes_are_visible() {
    let env = TestEnv::new();
    env.seed(&[
        TestNote::new("Architecture Decisions").body("Use a single JSON file"),
        TestNote::new("Standup").body("blocked on review"),
    ]);

    env.cmd()
        .ls()
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture Decisions"))
        .stdout(predicate::str::contains("Standup"))
        .stdout(predicate::str::contains("2 note(s)"));
}

#[test]
fn test_show_by_id_prefix() {
    let env = TestEnv::new();
    let note = TestNote::new("Prefix Lookup").body("found me");
    env.seed(std::slice::from_ref(&note));

    env.cmd()
        .show(note.id_prefix())
        .assert()
        .success()
        .stdout(predicate::str::contains("found me"));
}

#[test]
fn test_delete_repairs_to_predecessor_across_runs() {
    let env = TestEnv::new();
    env.seed(&[
        TestNote::new("A").id("A1"),
        TestNote::new("B").id("B1"),
        TestNote::new("C").id("C1"),
    ]);

    env.cmd().rm("B1").assert().success();

    // The selection is not persisted; a fresh run shows the first note.
    env.cmd()
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# A"));
}

#[test]
fn test_json_listing_round_trips_ids() {
    let env = TestEnv::new();
    let note = TestNote::new("JSON Test Note").id("01HQ3K5M7NXJK4QZPW8V2R6T9Y");
    env.seed(&[note]);

    let output: serde_json::Value = env.cmd().ls().format_json().output_json();
    let data = output["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "01HQ3K5M7NXJK4QZPW8V2R6T9Y");
    assert_eq!(data[0]["title"], "JSON Test Note");
}
