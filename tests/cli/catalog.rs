use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{mapd_in, run_json, visit};

// ============================================================================
// Catalog search and recommendations
// ============================================================================

#[test]
fn test_search_catalog() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["search", "lagoon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iceland Blue Lagoon (Reykjavik, Iceland)"));
}

#[test]
fn test_search_sorted_around_center() {
    let dir = tempdir().unwrap();

    let results = run_json(dir.path(), &["search", "an", "--lat", "35.68", "--lon", "139.69"]);
    assert_eq!(results[0]["name"], "Cherry Blossoms Japan");

    mapd_in(dir.path())
        .args(["search", "japan", "--lat", "35.68", "--lon", "139.69"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are near Tokyo, Japan"));
}

#[test]
fn test_search_without_results() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["--format", "json", "search", "atlantis"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"location_error\""));
}

#[test]
fn test_recommend_domestic() {
    let dir = tempdir().unwrap();

    let json = run_json(dir.path(), &["recommend", "--domestic", "--count", "5", "--seed", "9"]);
    let picks = json["destinations"].as_array().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["name"], "Grand Canyon");
    assert_eq!(picks[0]["description"], "Discover the beauty of Grand Canyon");
    assert!(json["season"].is_string());
}

#[test]
fn test_recommend_skips_visited() {
    let dir = tempdir().unwrap();
    visit(dir.path(), "Grand Canyon", "USA", "Arizona", 36.1069, -112.1129);

    let json = run_json(dir.path(), &["recommend", "--domestic"]);
    assert!(json["destinations"].as_array().unwrap().is_empty());

    let all = run_json(dir.path(), &["recommend", "--count", "20", "--seed", "1"]);
    assert_eq!(all["destinations"].as_array().unwrap().len(), 9);
}

#[test]
fn test_recommend_is_reproducible_with_seed() {
    let dir = tempdir().unwrap();

    let a = run_json(dir.path(), &["recommend", "--seed", "42"]);
    let b = run_json(dir.path(), &["recommend", "--seed", "42"]);
    assert_eq!(a["destinations"], b["destinations"]);
    assert_eq!(a["destinations"].as_array().unwrap().len(), 3);
}
