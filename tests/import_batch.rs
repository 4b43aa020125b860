use std::fs;

use tempfile::TempDir;

use contactbook::{
    import::{self, ImportError, ImportRow, RowRejection},
    store::sqlite::ContactStore,
};

fn row(name: &str, birth_date: &str) -> ImportRow {
    ImportRow {
        name: name.to_string(),
        birth_date: (!birth_date.is_empty()).then(|| birth_date.to_string()),
        ..ImportRow::default()
    }
}

#[test]
fn invalid_date_rejects_only_that_row() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let rows = vec![
        row("Ann Lee", "1990-04-02"),
        row("Bad Date", "02.04.1990"),
        row("Lea Ward", "1985-06-01"),
    ];
    let report = import::import_rows(&mut store, rows).expect("import");

    assert_eq!(report.inserted.len(), 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].row, 1);
    assert!(matches!(
        &report.rejected[0].reason,
        RowRejection::InvalidDate(value) if value == "02.04.1990"
    ));

    assert_eq!(
        store.list_all_names().expect("names"),
        vec!["Ann Lee".to_string(), "Lea Ward".to_string()]
    );
}

#[test]
fn empty_name_rejects_the_row() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let report =
        import::import_rows(&mut store, vec![row("  ", ""), row("Ann Lee", "")]).expect("import");

    assert_eq!(report.inserted.len(), 1);
    assert!(matches!(report.rejected[0].reason, RowRejection::EmptyName));
}

#[test]
fn dates_are_normalized_to_padded_day_form() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let rows = vec![
        row("Ann Lee", "1990-4-2"),
        row("Lea Ward", "1985-06-01 00:00:00"),
        row("Bob Hope", ""),
    ];
    let report = import::import_rows(&mut store, rows).expect("import");
    assert_eq!(report.inserted.len(), 3);

    let dates: Vec<String> = report
        .inserted
        .iter()
        .map(|id| store.get(*id).expect("get").birth_date)
        .collect();
    assert_eq!(
        dates,
        vec!["1990-04-02".to_string(), "1985-06-01".to_string(), String::new()]
    );
}

#[test]
fn unreadable_photo_path_inserts_the_row_without_a_photo() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let mut with_photo = row("Ann Lee", "");
    with_photo.photo = Some("/no/such/portrait.png".to_string());
    let report = import::import_rows(&mut store, vec![with_photo]).expect("import");

    assert_eq!(report.inserted.len(), 1);
    assert_eq!(report.photos_skipped, vec![0]);
    assert!(store.get(report.inserted[0]).expect("get").photo.is_none());
}

#[test]
fn readable_photo_path_round_trips_the_file_bytes() {
    let tmp = TempDir::new().expect("tmp");
    let photo_path = tmp.path().join("portrait.png");
    fs::write(&photo_path, b"portrait bytes").expect("write photo");

    let mut store = ContactStore::open_in_memory().expect("open");
    let mut with_photo = row("Ann Lee", "");
    with_photo.photo = Some(photo_path.display().to_string());
    let report = import::import_rows(&mut store, vec![with_photo]).expect("import");

    let stored = store
        .get(report.inserted[0])
        .expect("get")
        .photo
        .expect("photo");
    assert_eq!(stored.bytes, b"portrait bytes");
    assert!(report.photos_skipped.is_empty());
}

#[test]
fn json_interchange_feeds_the_same_batch_path() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let payload = r#"[
        {"name": "Ann Lee", "email": "ann@example.com", "birth_date": "1990-04-02"},
        {"name": "Lea Ward", "notes": "imported"},
        {"name": "Bad Date", "birth_date": "yesterday"}
    ]"#;
    let report = import::import_json(&mut store, payload.as_bytes()).expect("import");

    assert_eq!(report.inserted.len(), 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(
        store.get(report.inserted[0]).expect("get").email,
        "ann@example.com"
    );
}

#[test]
fn malformed_json_aborts_before_any_insert() {
    let mut store = ContactStore::open_in_memory().expect("open");

    let err = import::import_json(&mut store, &b"{not json"[..]).expect_err("parse failure");
    assert!(matches!(err, ImportError::Json(_)));
    assert!(store.list_all_names().expect("names").is_empty());
}
