//! Integration tests for the course repository against a real SQLite file.

use std::sync::Arc;

use chrono::NaiveDate;
use cohort_db::{CourseRepository, Database, StorageError};
use cohort_types::Course;
use tempfile::TempDir;

/// Helper: open a fresh database in a temp directory.
fn setup() -> (TempDir, CourseRepository) {
    let dir = TempDir::new().unwrap();
    let db = Database::open(&dir.path().join("courses.db")).unwrap();
    (dir, CourseRepository::new(Arc::new(db)))
}

/// Helper: a course value with the given name, status, and price.
fn course(name: &str, finished: bool, price: &str) -> Course {
    Course {
        id: 0,
        name: name.into(),
        start: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        finished,
        price: price.parse().unwrap(),
        teacher_name: Some("R. Osei".into()),
        schedule: Some("Mon/Wed 18:00".into()),
        notes: None,
    }
}

#[test]
fn create_then_get_returns_equal_course() {
    let (_dir, repo) = setup();

    let input = course("Databases 101", false, "4000");
    let id = repo.create(&input).unwrap();
    assert!(id > 0);

    let stored = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored, Course { id, ..input });
}

#[test]
fn get_unknown_id_is_none_not_error() {
    let (_dir, repo) = setup();
    assert_eq!(repo.get_by_id(12345).unwrap(), None);
}

#[test]
fn price_precision_survives_storage() {
    let (_dir, repo) = setup();

    let id = repo.create(&course("Bookkeeping", false, "999999.99")).unwrap();
    let stored = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.price, "999999.99".parse().unwrap());

    // Decimal equality is numeric, not textual.
    let id = repo.create(&course("Bookkeeping II", false, "4000.00")).unwrap();
    let stored = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.price, "4000".parse().unwrap());
}

#[test]
fn update_touches_everything_but_price() {
    let (_dir, repo) = setup();

    let id = repo.create(&course("Old Name", false, "4000")).unwrap();

    let mut changed = course("New Name", true, "7777");
    changed.id = id;
    changed.teacher_name = None;
    changed.notes = Some("moved to room 4".into());
    repo.update_except_price(&changed).unwrap();

    let stored = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name, "New Name");
    assert!(stored.finished);
    assert_eq!(stored.teacher_name, None);
    assert_eq!(stored.notes, Some("moved to room 4".into()));
    // Price keeps its original value no matter what the update carried.
    assert_eq!(stored.price, "4000".parse().unwrap());
}

#[test]
fn update_of_unknown_id_is_a_noop_success() {
    let (_dir, repo) = setup();

    let mut ghost = course("Ghost", false, "100");
    ghost.id = 999;
    repo.update_except_price(&ghost).unwrap();
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn search_matches_substring_case_insensitively_and_status_exactly() {
    let (_dir, repo) = setup();

    let a = repo.create(&course("Databases 101", false, "4000")).unwrap();
    let b = repo.create(&course("Advanced Databases", false, "8000")).unwrap();
    let finished = repo.create(&course("Databases Archive", true, "8000")).unwrap();
    repo.create(&course("Woodworking", false, "2000")).unwrap();

    let hits = repo.search_by_name_and_status("dataBASE", false).unwrap();
    let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a, b]);

    let hits = repo.search_by_name_and_status("dataBASE", true).unwrap();
    let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![finished]);

    assert!(repo.search_by_name_and_status("pottery", false).unwrap().is_empty());
}

#[test]
fn search_treats_like_metacharacters_literally() {
    let (_dir, repo) = setup();

    let percent = repo.create(&course("100% Remote Rust", false, "4000")).unwrap();
    repo.create(&course("100 Days of Code", false, "4000")).unwrap();

    let hits = repo.search_by_name_and_status("100%", false).unwrap();
    let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![percent]);
}

#[test]
fn department_listing_keeps_only_positive_prices() {
    let (_dir, repo) = setup();

    let paid = repo.create(&course("Databases 101", false, "4000")).unwrap();
    repo.create(&course("Department Onboarding", false, "0")).unwrap();
    repo.create(&course("Department Refresher", true, "0.00")).unwrap();
    let cheap = repo.create(&course("Evening Sketching", false, "0.01")).unwrap();

    let listed = repo.all_with_department().unwrap();
    let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![paid, cheap]);
    assert!(listed.iter().all(|c| c.price > "0".parse().unwrap()));
}

#[test]
fn count_tracks_inserts() {
    let (_dir, repo) = setup();
    assert_eq!(repo.count().unwrap(), 0);
    repo.create(&course("One", false, "1")).unwrap();
    repo.create(&course("Two", true, "2")).unwrap();
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn negative_price_is_rejected_as_integrity_error() {
    let (_dir, repo) = setup();

    let err = repo.create(&course("Refund Magnet", false, "-5")).unwrap_err();
    assert!(matches!(err, StorageError::Integrity(_)));
}

#[test]
fn reopening_keeps_data_and_reruns_migrations_harmlessly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.db");

    let id = {
        let repo = CourseRepository::new(Arc::new(Database::open(&path).unwrap()));
        repo.create(&course("Persistent", false, "4000")).unwrap()
    };

    let repo = CourseRepository::new(Arc::new(Database::open(&path).unwrap()));
    assert_eq!(repo.get_by_id(id).unwrap().unwrap().name, "Persistent");
}
