use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{mapd_in, run_json};

// ============================================================================
// Profile command tests
// ============================================================================

#[test]
fn test_first_launch_is_recorded_once() {
    let dir = tempdir().unwrap();

    let first = run_json(dir.path(), &["profile", "show"]);
    assert_eq!(first["firstLaunch"], true);
    assert_eq!(first["hasCompletedOnboarding"], false);
    assert_eq!(first["stats"]["visitedPlaces"], 0);
    assert!(dir.path().join("first-launch.json").exists());

    let second = run_json(dir.path(), &["profile", "show"]);
    assert_eq!(second["firstLaunch"], false);
}

#[test]
fn test_profile_set_replaces_fields() {
    let dir = tempdir().unwrap();

    let json = run_json(
        dir.path(),
        &[
            "profile", "set", "--name", "Alex", "--style", "food & drink", "--interest", "museums",
            "--interest", "Food",
        ],
    );
    assert_eq!(json["name"], "Alex");
    assert_eq!(json["travelStyle"], "Food & Drink");
    assert_eq!(json["interests"], serde_json::json!(["Museums", "Food"]));
    assert_eq!(json["display"]["travelStyle"]["icon"], "fork.knife");
    assert_eq!(json["display"]["interests"][0]["color"], "blue");
    assert_eq!(
        json["display"]["interests"][0]["description"],
        "Explore art, history, and science"
    );

    let json = run_json(dir.path(), &["profile", "set", "--style", "Cultural"]);
    assert_eq!(json["name"], "");
    assert_eq!(json["interests"], serde_json::json!([]));
}

#[test]
fn test_profile_show_human() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args([
            "profile", "set", "--name", "Sam", "--style", "relaxation", "--interest", "museums",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated"));

    mapd_in(dir.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sam"))
        .stdout(predicate::str::contains("Style: Relaxation"))
        .stdout(predicate::str::contains("  Museums: Explore art, history, and science"))
        .stdout(predicate::str::contains("Places visited:    0"));
}

#[test]
fn test_onboarding_and_permission() {
    let dir = tempdir().unwrap();

    let json = run_json(dir.path(), &["profile", "onboard"]);
    assert_eq!(json["hasCompletedOnboarding"], true);

    let json = run_json(dir.path(), &["profile", "permission", "true"]);
    assert_eq!(json["hasLocationPermission"], true);

    let json = run_json(dir.path(), &["profile", "permission", "false"]);
    assert_eq!(json["hasLocationPermission"], false);
    assert_eq!(json["hasCompletedOnboarding"], true);
}

#[test]
fn test_unknown_style_is_usage_error() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["profile", "set", "--style", "sleepy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("travel style"));
}

#[test]
fn test_corrupt_profile_blob_starts_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("profile.json"), "{\"visitedPlaces\": 42").unwrap();

    let json = run_json(dir.path(), &["profile", "show"]);
    assert_eq!(json["name"], "");
    assert_eq!(json["stats"]["visitedPlaces"], 0);
}

#[test]
fn test_profile_blob_uses_camel_case_fields() {
    let dir = tempdir().unwrap();
    run_json(dir.path(), &["profile", "onboard"]);

    let blob: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("profile.json")).unwrap()).unwrap();
    for key in [
        "name",
        "profileImageName",
        "travelStyle",
        "interests",
        "hasCompletedOnboarding",
        "hasLocationPermission",
        "visitedPlaces",
        "bucketList",
        "trips",
    ] {
        assert!(blob.get(key).is_some(), "missing {}", key);
    }
}
