mod common;
use common::{LOG, rec, temp_store};
use lifepulse::core::LogStore;
use lifepulse::errors::AppError;
use lifepulse::models::{Category, Record};
use lifepulse::storage::BlobStore;

#[test]
fn load_without_blob_is_empty() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    assert!(log.load().unwrap().is_empty());
    assert!(!store.exists(LOG).unwrap());
}

#[test]
fn saved_records_come_back_sorted_by_timestamp_string() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    let input = vec![
        rec("2024-03-02T08:00", Category::Mood, "6"),
        rec("2024-03-01T09:00", Category::Event, "Concert"),
        rec("2024-03-01 - 07h", Category::Mood, "4"),
        rec("2024-02-28T23:59", Category::Health, "Headache"),
    ];
    for r in &input {
        log.save(r.clone()).unwrap();
    }

    let mut expected = input.clone();
    expected.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let loaded = log.load().unwrap();
    assert_eq!(loaded, expected);
    // plain string order: ' ' sorts before 'T'
    assert_eq!(loaded[1].timestamp, "2024-03-01 - 07h");
}

#[test]
fn equal_timestamps_keep_insertion_order() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    log.save(rec("2024-03-09T00:00", Category::Sleep, "7.50")).unwrap();
    log.save(rec("2024-03-09T00:00", Category::Steps, "9000")).unwrap();
    log.save(rec("2024-03-08T00:00", Category::Steps, "4000")).unwrap();

    let cats: Vec<Category> = log.load().unwrap().iter().map(|r| r.category).collect();
    assert_eq!(cats, vec![Category::Steps, Category::Sleep, Category::Steps]);
}

#[test]
fn delete_of_absent_record_is_not_found_and_leaves_log_untouched() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    log.save(rec("2024-01-01T10:00", Category::Mood, "5")).unwrap();
    log.save(rec("2024-01-02T10:00", Category::Mood, "7")).unwrap();
    let before = store.read(LOG).unwrap();

    let err = log
        .delete(&rec("2024-01-01T10:00", Category::Mood, "6"))
        .unwrap_err();

    assert!(matches!(err, AppError::RecordNotFound(_)));
    assert_eq!(store.read(LOG).unwrap(), before);
}

#[test]
fn delete_without_any_log_is_not_found() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    let err = log
        .delete(&rec("2024-01-01T10:00", Category::Mood, "6"))
        .unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
    assert!(!store.exists(LOG).unwrap());
}

#[test]
fn delete_removes_only_the_exact_match() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    let target = Record::new("2024-01-01T10:00", Category::Event, "Run", "5km");
    let near_misses = [
        Record::new("2024-01-01T10:00", Category::Event, "Run", "10km"),
        Record::new("2024-01-01T10:00", Category::Health, "Run", "5km"),
        Record::new("2024-01-01T10:01", Category::Event, "Run", "5km"),
    ];
    log.save(target.clone()).unwrap();
    for r in &near_misses {
        log.save(r.clone()).unwrap();
    }

    log.delete(&target).unwrap();

    let left = log.load().unwrap();
    assert_eq!(left.len(), 3);
    assert!(!left.contains(&target));
    for r in &near_misses {
        assert!(left.contains(r));
    }
}

#[test]
fn delete_takes_only_the_first_of_duplicates() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let dup = rec("2024-01-01T10:00", Category::Mood, "5");

    log.save(dup.clone()).unwrap();
    log.save(dup.clone()).unwrap();
    log.delete(&dup).unwrap();

    assert_eq!(log.load().unwrap(), vec![dup]);
}

#[test]
fn delete_keeps_stored_order() {
    let (_dir, store) = temp_store();
    // hand-written, deliberately unsorted
    store
        .write(
            LOG,
            "2024-01-03T10:00,Mood,3,\r\n2024-01-01T10:00,Mood,1,\r\n2024-01-02T10:00,Mood,2,\r\n",
        )
        .unwrap();
    let log = LogStore::new(&store, LOG);

    log.delete(&rec("2024-01-01T10:00", Category::Mood, "1")).unwrap();

    let values: Vec<String> = log.load().unwrap().into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec!["3", "2"]);
}

#[test]
fn comments_with_commas_and_quotes_survive_a_rewrite() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let tricky = Record::new(
        "2024-01-01T10:00",
        Category::Event,
        "Dinner, then \"cinema\"",
        "with A, B\nand C",
    );

    log.save(tricky.clone()).unwrap();
    log.save(rec("2024-01-02T10:00", Category::Mood, "8")).unwrap();

    assert_eq!(log.load().unwrap()[0], tricky);
}

#[test]
fn three_column_rows_load_with_an_empty_comment() {
    let (_dir, store) = temp_store();
    store
        .write(LOG, "2023-05-01 - 09h,Mood,7\n\n2023-05-01 - 21h,Event,Party,late\n")
        .unwrap();

    let loaded = LogStore::new(&store, LOG).load().unwrap();

    assert_eq!(
        loaded,
        vec![
            rec("2023-05-01 - 09h", Category::Mood, "7"),
            Record::new("2023-05-01 - 21h", Category::Event, "Party", "late"),
        ]
    );
}

#[test]
fn save_rewrites_in_four_columns_with_crlf() {
    let (_dir, store) = temp_store();
    store.write(LOG, "2023-05-01 - 09h,Mood,7\n").unwrap();
    let log = LogStore::new(&store, LOG);

    log.save(rec("2023-05-02T09:00", Category::Mood, "8")).unwrap();

    assert_eq!(
        store.read(LOG).unwrap().unwrap(),
        "2023-05-01 - 09h,Mood,7,\r\n2023-05-02T09:00,Mood,8,\r\n"
    );
}

#[test]
fn malformed_rows_fail_the_load() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);

    store.write(LOG, "2024-01-01T10:00,Dream,flying\n").unwrap();
    assert!(matches!(
        log.load().unwrap_err(),
        AppError::MalformedRow { line: 1, .. }
    ));

    store.write(LOG, "2024-01-01T10:00,Mood\n").unwrap();
    assert!(matches!(
        log.load().unwrap_err(),
        AppError::MalformedRow { .. }
    ));

    // a malformed log is never overwritten by a save
    assert!(log.save(rec("2024-01-02T10:00", Category::Mood, "1")).is_err());
    assert_eq!(
        store.read(LOG).unwrap().unwrap(),
        "2024-01-01T10:00,Mood\n"
    );
}
