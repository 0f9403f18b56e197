use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{mapd_in, run_json, visit, wish};

// ============================================================================
// Visited places
// ============================================================================

#[test]
fn test_visit_new_place() {
    let dir = tempdir().unwrap();

    let json = run_json(
        dir.path(),
        &[
            "place", "visit", "--name", "Eiffel Tower", "--country", "France", "--city", "Paris",
            "--lat", "48.8584", "--lon", "2.2945", "--rating", "5", "--notes", "Sunset",
            "--tag", "Romantic",
        ],
    );
    assert_eq!(json["name"], "Eiffel Tower");
    assert_eq!(json["isVisited"], true);
    assert_eq!(json["isInBucketList"], false);
    assert_eq!(json["rating"], 5);
    assert_eq!(json["tags"], serde_json::json!(["Romantic"]));
    assert!(json["dateVisited"].is_string());

    let listed = run_json(dir.path(), &["place", "list"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn test_visit_requires_location() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["place", "visit", "--name", "Nowhere"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--country"));
}

#[test]
fn test_visit_rejects_out_of_range_rating() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["place", "visit", "--name", "Louvre", "--country", "France", "--city", "Paris"])
        .args(["--lat", "48.86", "--lon", "2.33", "--rating", "7"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid rating"));

    let listed = run_json(dir.path(), &["place", "list"]);
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_negative_coordinates() {
    let dir = tempdir().unwrap();
    visit(dir.path(), "Machu Picchu", "Peru", "Cusco", -13.1631, -72.545);

    let listed = run_json(dir.path(), &["place", "list"]);
    assert_eq!(listed[0]["coordinate"]["latitude"], -13.1631);
    assert_eq!(listed[0]["coordinate"]["longitude"], -72.545);
}

#[test]
fn test_recent_places_newest_first() {
    let dir = tempdir().unwrap();
    for name in ["First", "Second", "Third", "Fourth"] {
        visit(dir.path(), name, "Spain", "Madrid", 40.4, -3.7);
    }

    let recent = run_json(dir.path(), &["place", "recent"]);
    let names: Vec<&str> = recent
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fourth", "Third", "Second"]);

    let one = run_json(dir.path(), &["place", "recent", "--limit", "1"]);
    assert_eq!(one[0]["name"], "Fourth");
}

#[test]
fn test_recent_limit_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "recent_places_limit = 1\n").unwrap();
    visit(dir.path(), "A", "Spain", "Madrid", 40.4, -3.7);
    visit(dir.path(), "B", "Spain", "Madrid", 40.4, -3.7);

    let recent = run_json(dir.path(), &["place", "recent"]);
    assert_eq!(recent.as_array().unwrap().len(), 1);
    assert_eq!(recent[0]["name"], "B");
}

#[test]
fn test_list_filters() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["place", "visit", "--name", "Colosseum", "--country", "Italy", "--city", "Rome"])
        .args(["--lat", "41.89", "--lon", "12.49", "--rating", "5", "--tag", "History"])
        .assert()
        .success();
    mapd_in(dir.path())
        .args(["place", "visit", "--name", "Alcatraz", "--country", "USA", "--city", "San Francisco"])
        .args(["--lat", "37.83", "--lon", "-122.42", "--rating", "2"])
        .assert()
        .success();

    let high = run_json(dir.path(), &["place", "list", "--high-rated"]);
    assert_eq!(high.as_array().unwrap().len(), 1);
    assert_eq!(high[0]["name"], "Colosseum");

    let tagged = run_json(dir.path(), &["place", "list", "--tag", "History"]);
    assert_eq!(tagged[0]["name"], "Colosseum");

    let search = run_json(dir.path(), &["place", "list", "--search", "francisco"]);
    assert_eq!(search[0]["name"], "Alcatraz");

    let recent = run_json(dir.path(), &["place", "list", "--recent"]);
    assert_eq!(recent.as_array().unwrap().len(), 2);

    mapd_in(dir.path())
        .args(["place", "list", "--recent", "--high-rated"])
        .assert()
        .code(2);
}

// ============================================================================
// Bucket list
// ============================================================================

#[test]
fn test_wish_then_visit_moves_place() {
    let dir = tempdir().unwrap();
    let id = wish(dir.path(), "Tokyo Tower", "Japan", "Tokyo");

    let bucket = run_json(dir.path(), &["place", "list", "--bucket"]);
    assert_eq!(bucket[0]["id"], id.as_str());
    assert_eq!(bucket[0]["isInBucketList"], true);

    let visited = run_json(dir.path(), &["place", "visit", "--id", &id, "--rating", "4"]);
    assert_eq!(visited["id"], id.as_str());
    assert_eq!(visited["isVisited"], true);
    assert_eq!(visited["isInBucketList"], false);
    assert_eq!(visited["rating"], 4);

    let bucket = run_json(dir.path(), &["place", "list", "--bucket"]);
    assert!(bucket.as_array().unwrap().is_empty());

    let stats = run_json(dir.path(), &["profile", "show"]);
    assert_eq!(stats["stats"]["visitedPlaces"], 1);
    assert_eq!(stats["stats"]["bucketList"], 0);
}

#[test]
fn test_visit_unknown_bucket_id() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["place", "visit", "--id", "01hzzzzzzzzzzzzzzzzzzzzzzz"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unwish() {
    let dir = tempdir().unwrap();
    let id = wish(dir.path(), "Santorini", "Greece", "Santorini");

    mapd_in(dir.path())
        .args(["place", "unwish", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    mapd_in(dir.path())
        .args(["place", "unwish", &id])
        .assert()
        .code(3);
}

#[test]
fn test_ids_are_case_insensitive() {
    let dir = tempdir().unwrap();
    let id = wish(dir.path(), "Bali", "Indonesia", "Denpasar");

    mapd_in(dir.path())
        .args(["place", "unwish", &id.to_uppercase()])
        .assert()
        .success();
}
