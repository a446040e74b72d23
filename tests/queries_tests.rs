mod common;
use chrono::NaiveDate;
use common::rec;
use lifepulse::core::queries::{latest_mood, recent_history};
use lifepulse::errors::AppError;
use lifepulse::models::{Category, Record};

#[test]
fn latest_mood_of_empty_log_is_none() {
    assert_eq!(latest_mood(&[]).unwrap(), None);
}

#[test]
fn latest_mood_with_single_entry() {
    let records = vec![
        rec("2024-01-01T08:00", Category::Event, "Breakfast"),
        Record::new("2024-01-01T09:00", Category::Mood, "6", "sleepy"),
    ];

    let mood = latest_mood(&records).unwrap().unwrap();
    assert_eq!(mood.value, "6");
    assert_eq!(mood.comment, "sleepy");
}

#[test]
fn latest_mood_in_legacy_hour_format() {
    let records = vec![
        rec("2024-01-01 - 09h", Category::Mood, "4"),
        rec("2024-01-02 - 09h", Category::Mood, "8"),
    ];

    let mood = latest_mood(&records).unwrap().unwrap();
    assert_eq!(mood.value, "8");
    assert_eq!(
        mood.timestamp,
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    );
}

#[test]
fn latest_mood_compares_dates_not_strings_across_formats() {
    // as strings "2024-01-02T08:30" > "2024-01-02 - 09h", as times it is earlier
    let records = vec![
        rec("2024-01-02 - 09h", Category::Mood, "late"),
        rec("2024-01-02T08:30", Category::Mood, "early"),
    ];

    assert_eq!(latest_mood(&records).unwrap().unwrap().value, "late");
}

#[test]
fn latest_mood_ties_go_to_the_first_row() {
    let records = vec![
        rec("2024-01-02T09:00", Category::Mood, "first"),
        rec("2024-01-02 - 09h", Category::Mood, "second"),
    ];

    assert_eq!(latest_mood(&records).unwrap().unwrap().value, "first");
}

#[test]
fn latest_mood_fails_on_unparseable_mood_timestamp() {
    let records = vec![
        rec("2024-01-02T09:00", Category::Mood, "7"),
        rec("yesterday", Category::Mood, "3"),
    ];

    let err = latest_mood(&records).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(ts) if ts == "yesterday"));
}

#[test]
fn latest_mood_ignores_other_categories_timestamps() {
    let records = vec![
        rec("sometime", Category::Event, "Unknown"),
        rec("2024-01-02T09:00", Category::Mood, "7"),
    ];

    assert_eq!(latest_mood(&records).unwrap().unwrap().value, "7");
}

fn twenty_five() -> Vec<Record> {
    (1..=25)
        .map(|d| rec(&format!("2024-01-{d:02}T12:00"), Category::Event, &d.to_string()))
        .collect()
}

#[test]
fn recent_history_is_capped_and_newest_first() {
    let records = twenty_five();

    let recent = recent_history(&records, 20, false);

    assert_eq!(recent.len(), 20);
    let values: Vec<&str> = recent.iter().map(|r| r.value.as_str()).collect();
    let expected: Vec<String> = (6..=25).rev().map(|d| d.to_string()).collect();
    assert_eq!(values, expected);
}

#[test]
fn recent_history_show_all_returns_everything_reversed() {
    let records = twenty_five();

    let all = recent_history(&records, 20, true);

    assert_eq!(all.len(), 25);
    assert_eq!(all.first().unwrap().value, "25");
    assert_eq!(all.last().unwrap().value, "1");
}

#[test]
fn recent_history_of_short_log() {
    let records = twenty_five();
    assert_eq!(recent_history(&records[..3], 20, false).len(), 3);
    assert!(recent_history(&[], 20, false).is_empty());
}
