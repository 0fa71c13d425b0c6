mod helpers;

use bioread::reading::vocab::{add_entry, count_entries, list_entries, VocabError};
use helpers::{day, test_db};

#[test]
fn empty_word_is_rejected_and_store_unchanged() {
    let conn = test_db();
    add_entry(&conn, day(2024, 10, 1), "homeostasis", "internal balance", "").unwrap();
    let before = count_entries(&conn).unwrap();

    let err = add_entry(&conn, day(2024, 10, 1), "", "a meaning", "a note").unwrap_err();
    assert!(matches!(err, VocabError::MissingWord));

    assert_eq!(count_entries(&conn).unwrap(), before);
}

#[test]
fn empty_meaning_is_rejected() {
    let conn = test_db();
    let err = add_entry(&conn, day(2024, 10, 1), "photosynthesis", "  ", "").unwrap_err();
    assert!(matches!(err, VocabError::MissingMeaning));
    assert!(list_entries(&conn).unwrap().is_empty());
}

#[test]
fn entries_keep_their_date_and_note() {
    let conn = test_db();
    let entry = add_entry(
        &conn,
        day(2024, 10, 2),
        "symbiosis",
        "close long-term interaction",
        "Clownfish and anemones.",
    )
    .unwrap();

    let listed = list_entries(&conn).unwrap();
    assert_eq!(listed, vec![entry]);
    assert_eq!(listed[0].date, day(2024, 10, 2));
    assert_eq!(listed[0].note, "Clownfish and anemones.");
}
