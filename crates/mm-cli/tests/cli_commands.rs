//! Integration tests for the mm-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DEMO_STORY: &str = include_str!("../../../stories/detective.json");

/// A story where scene 1 offers a way out to a scene that was never written.
const DANGLING_STORY: &str = r#"[
    {
        "scene_id": 1,
        "speakers": ["MC"],
        "setting": "hallway",
        "dialogues": [],
        "interactive": {
            "speaker": "MC",
            "prompt": "Which door?",
            "choices": [
                {"response": "Left", "effect": [1, 1, 1, 1], "sceneReference": 7},
                {"response": "Stay", "effect": [0, 0, 0, 0], "sceneReference": 1}
            ]
        }
    }
]"#;

/// Write a story into a temp directory and return both.
fn story_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn mm() -> Command {
    Command::cargo_bin("mm").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reaches_ending_and_reveals_type() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().arg("play")
        .arg(&path)
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Trophy-heavy.")
                .and(predicate::str::contains("Polish waits for no one."))
                .and(predicate::str::contains("The End."))
                .and(predicate::str::contains("MC Revealed!"))
                .and(predicate::str::contains("ESTJ")),
        );
}

#[test]
fn play_rejects_bad_input_without_moving() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().arg("play")
        .arg(&path)
        .write_stdin("7\n0\n-2\nabc\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid choice 7: pick a number from 1 to 3")
                .and(predicate::str::contains("invalid choice 0"))
                .and(predicate::str::contains("invalid choice -2"))
                .and(predicate::str::contains("'abc' is not a choice number"))
                .and(predicate::str::contains("ISFP"))
                .and(predicate::str::contains("The End.").not()),
        );
}

#[test]
fn play_uses_name_and_baseline() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().args(["play", "--name", "Detective", "--baseline", "-5,5,5,5"])
        .arg(&path)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Detective Revealed!").and(predicate::str::contains("INTJ")),
        );
}

#[test]
fn play_from_entry_scene() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().args(["play", "--entry", "99"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Case closed.").and(predicate::str::contains("The End.")),
        );
}

#[test]
fn play_unknown_entry_scene() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().args(["play", "--entry", "42"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scene not found: 42"));
}

#[test]
fn play_baseline_needs_four_values() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().args(["play", "--baseline", "1,2"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("baseline needs 4 values, got 2"));
}

#[test]
fn play_reports_dangling_reference_and_stays() {
    let (_dir, path) = story_file(DANGLING_STORY);
    mm().arg("play")
        .arg(&path)
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("scene 1 leads to scene 7, which does not exist")
                .and(predicate::str::contains("ISFP")),
        );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_demo_story() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6 scenes, entry scene 1")
                .and(predicate::str::contains("All checks passed")),
        );
}

#[test]
fn check_reports_dangling_references() {
    let (_dir, path) = story_file(DANGLING_STORY);
    mm().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("scene 1 choice 1 leads to missing scene 7"))
        .stderr(predicate::str::contains("1 dangling reference to 1 missing scene"));
}

#[test]
fn check_rejects_malformed_story() {
    let (_dir, path) = story_file(
        r#"[{"scene_id": 3, "speakers": [], "interactive": {"speaker": "MC", "prompt": "?", "choices": []}}]"#,
    );
    mm().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed scene data in scene 3"));
}

#[test]
fn check_missing_file() {
    let dir = TempDir::new().unwrap();
    mm().arg("check")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_scenes() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("library.jpg")
                .and(predicate::str::contains("boss-office.jpg"))
                .and(predicate::str::contains("6 scenes")),
        );
}

#[test]
fn list_empty_story() {
    let (_dir, path) = story_file("[]");
    mm().arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenes found"));
}

#[test]
fn show_scene_with_effects() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().args(["show"])
        .arg(&path)
        .arg("4")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nothing here. Now what?")
                .and(predicate::str::contains("effect [3, 2, 2, 0]")),
        );
}

#[test]
fn show_marks_missing_targets() {
    let (_dir, path) = story_file(DANGLING_STORY);
    mm().arg("show")
        .arg(&path)
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("7 (missing)"));
}

#[test]
fn show_unknown_scene() {
    let (_dir, path) = story_file(DEMO_STORY);
    mm().arg("show")
        .arg(&path)
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scene not found: 12"));
}

// ---------------------------------------------------------------------------
// mbti
// ---------------------------------------------------------------------------

#[test]
fn mbti_dashboard_for_scores() {
    mm().args(["mbti", "5", "-3", "2", "-7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Introverted - Extraverted")
                .and(predicate::str::contains("ESTP")),
        );
}

#[test]
fn mbti_zero_scores() {
    mm().args(["mbti", "0", "0", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ISFP"));
}
