mod common;

use jisho_core::{AutofillError, CollectionStore, Record, fill_record};
use jisho_types::Deck;

use common::{DECK, NOTE_TYPE, StubDictionary, collection, config};

fn note(word: &str) -> Record {
    let mut record = Record::new(NOTE_TYPE, ["Word", "Reading", "Meaning"]);
    record.try_set_field("Word", word);
    record
}

#[tokio::test]
async fn fills_and_saves_existing_note() {
    let dictionary = StubDictionary::new();
    let store = collection();
    let deck = Deck {
        id: DECK,
        name: "Japanese".into(),
    };
    let id = store.create_note(&deck, &note(" ねこ ")).await.unwrap();
    let mut record = store.load_note(id).await.unwrap();

    let outcome = fill_record(&dictionary, &store, &config(), Some(&mut record))
        .await
        .unwrap();

    assert!(outcome.persisted);
    assert_eq!(outcome.word.as_deref(), Some("猫"));
    assert_eq!(outcome.written, vec!["Reading", "Meaning", "Word"]);
    assert_eq!(dictionary.calls("ねこ"), 1);

    let saved = store.note(id).await.unwrap();
    assert_eq!(saved.try_get_field("Word"), Some("猫"));
    assert_eq!(saved.try_get_field("Reading"), Some("ねこ"));
    assert!(saved.try_get_field("Meaning").unwrap().starts_with("<dl>"));
}

#[tokio::test]
async fn new_note_is_filled_but_not_saved() {
    let dictionary = StubDictionary::new();
    let store = collection();
    let mut record = note("犬");

    let outcome = fill_record(&dictionary, &store, &config(), Some(&mut record))
        .await
        .unwrap();

    assert!(!outcome.persisted);
    assert_eq!(record.try_get_field("Reading"), Some("いぬ"));
    assert!(store.notes().await.is_empty());
}

#[tokio::test]
async fn lookup_failure_leaves_note_untouched() {
    let dictionary = StubDictionary::new().unreachable_for("猫");
    let store = collection();
    let mut record = note("猫");
    let before = record.clone();

    let err = fill_record(&dictionary, &store, &config(), Some(&mut record))
        .await
        .unwrap_err();

    assert!(matches!(err, AutofillError::LookupFailed(ref t) if t == "猫"));
    assert_eq!(dictionary.calls("猫"), 3);
    assert_eq!(record, before);
}

#[tokio::test]
async fn requires_lookup_field_and_note() {
    let dictionary = StubDictionary::new();
    let store = collection();

    let mut no_lookup = config();
    no_lookup.fields.lookup.clear();
    let err = fill_record(&dictionary, &store, &no_lookup, Some(&mut note("猫")))
        .await
        .unwrap_err();
    assert!(matches!(err, AutofillError::NoLookupField));

    let err = fill_record(&dictionary, &store, &config(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, AutofillError::NoActiveNote));
    assert_eq!(err.to_string(), "Not editing a note.");

    assert_eq!(dictionary.total_calls(), 0);
}

#[tokio::test]
async fn empty_or_absent_lookup_field_makes_no_call() {
    let dictionary = StubDictionary::new();
    let store = collection();

    let err = fill_record(&dictionary, &store, &config(), Some(&mut note("  ")))
        .await
        .unwrap_err();
    assert!(matches!(err, AutofillError::LookupFieldEmpty(ref f) if f == "Word"));

    let mut other_type = Record::new("Kanji", ["Kanji", "Onyomi"]);
    let err = fill_record(&dictionary, &store, &config(), Some(&mut other_type))
        .await
        .unwrap_err();
    assert!(matches!(err, AutofillError::LookupFieldNotInNote(_)));
    assert_eq!(err.to_string(), "Word not in note.");

    assert_eq!(dictionary.total_calls(), 0);
}
