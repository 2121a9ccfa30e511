//! Tests for RosterService
//!
//! Verifies load/save round-trips, the missing-file first-run condition,
//! corrupt-file detection, and the documented on-disk layout.

use std::sync::Arc;

use tempfile::TempDir;

use rsvp::application::services::RosterService;
use rsvp::application::ApplicationError;
use rsvp::domain::{GuestEntry, GuestList};
use rsvp::infrastructure::traits::RealFileSystem;
use rsvp::util::testing::init_test_setup;

fn service_for(temp: &TempDir) -> RosterService {
    RosterService::new(Arc::new(RealFileSystem), temp.path().join("RSVP.dat"))
}

#[test]
fn given_missing_file_when_load_then_roster_not_found() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    let err = service.load().unwrap_err();

    assert!(matches!(err, ApplicationError::RosterNotFound(_)));
}

#[test]
fn given_saved_list_when_load_then_round_trips_order_and_values() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    let mut list = GuestList::new();
    list.add("Alice", 3);
    list.add("  Bob  ", 2);
    list.add("Alice", 3); // duplicates are part of the contract

    service.save(&list).unwrap();
    let loaded = service.load().unwrap();

    assert_eq!(loaded, list);
    assert_eq!(loaded.entries()[1], GuestEntry::new("Bob", 2));
    assert_eq!(loaded.total_guests(), 8);
}

#[test]
fn given_prior_file_when_save_then_contents_replaced_wholesale() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    let mut first = GuestList::new();
    first.add("Carol", 5);
    service.save(&first).unwrap();

    let mut second = GuestList::new();
    second.add("Dan", 2);
    service.save(&second).unwrap();

    let loaded = service.load().unwrap();
    assert_eq!(loaded, second);
    assert_eq!(loaded.len(), 1);
}

#[test]
fn given_garbage_file_when_load_then_corrupt_roster() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    std::fs::write(service.data_file(), b"not a roster file").unwrap();

    let err = service.load().unwrap_err();

    assert!(
        matches!(err, ApplicationError::CorruptRoster { .. }),
        "corruption must surface distinctly from a missing file, got: {err}"
    );
}

#[test]
fn given_single_entry_when_save_then_bytes_match_documented_layout() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    let mut list = GuestList::new();
    list.add("Dan", 2);
    service.save(&list).unwrap();

    // u64 LE entry count, u64 LE name length, name bytes, i64 LE party size
    let mut expected = Vec::new();
    expected.extend_from_slice(&1u64.to_le_bytes());
    expected.extend_from_slice(&3u64.to_le_bytes());
    expected.extend_from_slice(b"Dan");
    expected.extend_from_slice(&2i64.to_le_bytes());

    let actual = std::fs::read(service.data_file()).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn given_empty_list_when_saved_and_loaded_then_empty() {
    // The session never saves an empty list, but the service-level
    // round-trip must still hold.
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let service = service_for(&temp);

    service.save(&GuestList::new()).unwrap();
    let loaded = service.load().unwrap();

    assert!(loaded.is_empty());
    assert_eq!(loaded.total_guests(), 0);
}
