use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{add_trip, mapd_in, run_json};

fn checklist_titles(show: &serde_json::Value) -> Vec<String> {
    show["trip"]["checklist"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Trip planning and checklists
// ============================================================================

#[test]
fn test_domestic_trip_checklist() {
    let dir = tempdir().unwrap();
    let id = add_trip(dir.path(), "Road trip", "USA", 10, 2);

    let show = run_json(dir.path(), &["trip", "show", &id]);
    let titles = checklist_titles(&show);
    assert_eq!(titles.len(), 13);
    assert!(!titles.iter().any(|t| t == "Check Visa Requirements"));
    assert!(titles.iter().any(|t| t == "Pack Light Luggage"));
    assert_eq!(show["status"], "upcoming");
    assert_eq!(show["durationDays"], 2);
    assert_eq!(show["completedItems"], 0);

    let display = &show["display"];
    assert_eq!(display["tripType"]["icon"], "person.fill");
    let first = &display["checklist"][0];
    assert_eq!(first["id"], show["trip"]["checklist"][0]["id"]);
    assert!(first["category"]["icon"].as_str().is_some());
    assert!(first["priority"]["color"].as_str().is_some());
    assert_eq!(display["checklist"].as_array().unwrap().len(), 13);
}

#[test]
fn test_international_trip_checklist() {
    let dir = tempdir().unwrap();
    let id = add_trip(dir.path(), "Paris", "France", 30, 7);

    let show = run_json(dir.path(), &["trip", "show", &id]);
    let titles = checklist_titles(&show);
    assert_eq!(titles.len(), 14);
    assert!(titles.iter().any(|t| t == "Check Visa Requirements"));
    assert!(titles.iter().any(|t| t == "Pack Checked Luggage"));
    let days = show["daysUntilDeparture"].as_i64().unwrap();
    assert!((29..=30).contains(&days));
}

#[test]
fn test_home_country_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "home_country = \"France\"\n").unwrap();
    let id = add_trip(dir.path(), "Lyon", "France", 5, 3);

    let show = run_json(dir.path(), &["trip", "show", &id]);
    assert_eq!(checklist_titles(&show).len(), 13);
}

#[test]
fn test_add_trip_with_dates_and_type() {
    let dir = tempdir().unwrap();

    let json = run_json(
        dir.path(),
        &[
            "trip", "add", "--name", "Family week", "--country", "Japan", "--city", "Tokyo",
            "--lat", "35.68", "--lon", "139.69", "--start", "2031-04-01", "--end", "2031-04-08",
            "--travelers", "4", "--type", "family",
        ],
    );
    assert_eq!(json["numberOfTravelers"], 4);
    assert_eq!(json["tripType"], "Family");
    assert_eq!(json["destination"]["name"], "Tokyo");
    assert_eq!(json["startDate"], "2031-04-01T00:00:00Z");
}

#[test]
fn test_end_before_start_is_rejected() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["trip", "add", "--name", "Backwards", "--country", "USA", "--city", "Austin"])
        .args(["--lat", "30.27", "--lon", "-97.74", "--start", "2031-05-10", "--end", "2031-05-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("trip dates"));
}

#[test]
fn test_check_and_undo_item() {
    let dir = tempdir().unwrap();
    let trip_id = add_trip(dir.path(), "Road trip", "USA", 10, 2);

    let show = run_json(dir.path(), &["trip", "show", &trip_id]);
    let item_id = show["trip"]["checklist"][0]["id"].as_str().unwrap().to_string();

    let checked = run_json(dir.path(), &["trip", "check", &trip_id, &item_id]);
    assert_eq!(checked["completedItems"], 1);
    assert_eq!(checked["trip"]["checklist"][0]["isCompleted"], true);
    assert_eq!(checked["trip"]["checklist"].as_array().unwrap().len(), 13);

    mapd_in(dir.path())
        .args(["trip", "check", &trip_id, &item_id, "--undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/13 items complete"));
}

#[test]
fn test_check_unknown_item() {
    let dir = tempdir().unwrap();
    let trip_id = add_trip(dir.path(), "Road trip", "USA", 10, 2);

    mapd_in(dir.path())
        .args(["trip", "check", &trip_id, "01hzzzzzzzzzzzzzzzzzzzzzzz"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("checklist item not found"));
}

#[test]
fn test_complete_and_delete() {
    let dir = tempdir().unwrap();
    let id = add_trip(dir.path(), "Peru", "Peru", 3, 5);

    let completed = run_json(dir.path(), &["trip", "complete", &id]);
    assert_eq!(completed["trip"]["isCompleted"], true);
    assert_eq!(completed["status"], "completed");

    mapd_in(dir.path())
        .args(["trip", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    mapd_in(dir.path())
        .args(["trip", "show", &id])
        .assert()
        .code(3);

    mapd_in(dir.path())
        .args(["--format", "json", "trip", "delete", &id])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"not_found\""));
}

#[test]
fn test_timeline_lists() {
    let dir = tempdir().unwrap();
    let later = add_trip(dir.path(), "Later", "Japan", 40, 5);
    let sooner = add_trip(dir.path(), "Sooner", "Peru", 5, 5);
    let ongoing = add_trip(dir.path(), "Ongoing", "Kenya", -2, 5);
    let finished = add_trip(dir.path(), "Finished", "Norway", -20, 5);

    let ids = |json: serde_json::Value| -> Vec<String> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(ids(run_json(dir.path(), &["trip", "list", "--upcoming"])), vec![sooner.clone(), later.clone()]);
    assert_eq!(ids(run_json(dir.path(), &["trip", "list", "--active"])), vec![ongoing.clone()]);
    assert_eq!(ids(run_json(dir.path(), &["trip", "list", "--past"])), vec![finished.clone()]);
    assert_eq!(
        ids(run_json(dir.path(), &["trip", "list"])),
        vec![finished, ongoing, sooner, later]
    );
}

#[test]
fn test_list_filters() {
    let dir = tempdir().unwrap();

    mapd_in(dir.path())
        .args(["trip", "add", "--name", "Friends in Rome", "--country", "Italy", "--city", "Rome"])
        .args(["--lat", "41.9", "--lon", "12.5", "--start", "2031-06-01", "--end", "2031-06-05"])
        .args(["--travelers", "3", "--type", "Friends"])
        .assert()
        .success();
    add_trip(dir.path(), "Solo Oslo", "Norway", 15, 2);

    let group = run_json(dir.path(), &["trip", "list", "--group"]);
    assert_eq!(group.as_array().unwrap().len(), 1);
    assert_eq!(group[0]["name"], "Friends in Rome");

    let solo = run_json(dir.path(), &["trip", "list", "--solo"]);
    assert_eq!(solo[0]["name"], "Solo Oslo");

    let friends = run_json(dir.path(), &["trip", "list", "--type", "friends"]);
    assert_eq!(friends.as_array().unwrap().len(), 1);

    let search = run_json(dir.path(), &["trip", "list", "--search", "italy"]);
    assert_eq!(search[0]["name"], "Friends in Rome");

    mapd_in(dir.path())
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo Oslo"))
        .stdout(predicate::str::contains("0/14 packed"));
}
