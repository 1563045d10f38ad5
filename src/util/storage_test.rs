use serde::{Deserialize, Serialize};

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    label: String,
    count: u32,
}

#[test]
fn save_then_load_round_trips() {
    let record = Record { label: "first".to_owned(), count: 3 };
    save_json("storage-test.round-trip", &record);
    assert_eq!(load_json::<Record>("storage-test.round-trip"), Some(record));
}

#[test]
fn save_overwrites_previous_value() {
    save_json("storage-test.overwrite", &Record { label: "old".to_owned(), count: 1 });
    save_json("storage-test.overwrite", &Record { label: "new".to_owned(), count: 2 });

    let loaded: Option<Record> = load_json("storage-test.overwrite");
    assert_eq!(loaded, Some(Record { label: "new".to_owned(), count: 2 }));
}

#[test]
fn load_missing_key_is_none() {
    assert_eq!(load_json::<Record>("storage-test.missing"), None);
}

#[test]
fn remove_key_deletes_the_value() {
    save_json("storage-test.remove", &Record { label: "gone".to_owned(), count: 0 });
    remove_key("storage-test.remove");
    assert_eq!(load_json::<Record>("storage-test.remove"), None);
}

#[test]
fn load_ignores_undecodable_payloads() {
    save_json("storage-test.shape", &"just a string");
    assert_eq!(load_json::<Record>("storage-test.shape"), None);
}
