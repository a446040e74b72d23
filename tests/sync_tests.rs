mod common;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use common::{LOG, rec, temp_store};
use lifepulse::core::sync::{
    DailyFitness, FitnessSource, SyncOutcome, backfill, is_stale, missing_days, sync_day,
    sync_if_stale,
};
use lifepulse::core::{LogStore, TimestampMarker};
use lifepulse::errors::{AppError, AppResult};
use lifepulse::models::{Category, Record};

const MARKER: &str = "last_fitness_sync.txt";

#[derive(Default)]
struct FakeFitbit {
    calls: Vec<NaiveDate>,
}

impl FitnessSource for FakeFitbit {
    fn daily_summary(&mut self, date: NaiveDate) -> AppResult<DailyFitness> {
        self.calls.push(date);
        Ok(DailyFitness {
            steps: 1000 + date.day() as u64,
            sleep_hours: 7.5,
        })
    }
}

struct Disconnected;

impl FitnessSource for Disconnected {
    fn daily_summary(&mut self, _date: NaiveDate) -> AppResult<DailyFitness> {
        Err(AppError::AuthorizationRequired("fitbit"))
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn at(d: u32, h: u32) -> NaiveDateTime {
    day(d).and_hms_opt(h, 0, 0).unwrap()
}

#[test]
fn sync_day_flips_at_six() {
    assert_eq!(sync_day(at(10, 5)), day(9));
    assert_eq!(sync_day(at(10, 6)), day(10));
    assert_eq!(sync_day(at(10, 23)), day(10));
}

#[test]
fn staleness_is_one_day() {
    assert!(is_stale(None, at(10, 12)));
    assert!(!is_stale(Some(at(10, 8)), at(10, 12)));
    assert!(is_stale(Some(at(9, 12)), at(10, 12)));
}

#[test]
fn empty_log_misses_both_categories_for_seven_days() {
    let missing = missing_days(&[], day(10));

    assert_eq!(missing.len(), 7);
    assert_eq!(missing.first().unwrap().0, day(9));
    assert_eq!(missing.last().unwrap().0, day(3));
    assert!(missing.iter().all(|(_, cats)| cats == &Category::FITNESS.to_vec()));
}

#[test]
fn today_itself_is_never_backfilled() {
    let missing = missing_days(&[], day(10));
    assert!(missing.iter().all(|(d, _)| *d != day(10)));
}

#[test]
fn partial_days_only_miss_what_is_absent() {
    let records = vec![
        rec("2024-03-09T00:00", Category::Sleep, "6.00"),
        rec("2024-03-08T00:00", Category::Sleep, "6.00"),
        rec("2024-03-08T00:00", Category::Steps, "5000"),
        // other categories on a day do not count
        rec("2024-03-07T21:00", Category::Mood, "7"),
    ];

    let missing = missing_days(&records, day(10));

    assert_eq!(missing.len(), 6);
    assert_eq!(missing[0], (day(9), vec![Category::Steps]));
    assert_eq!(missing[1], (day(7), vec![Category::Sleep, Category::Steps]));
}

#[test]
fn backfill_writes_missing_records_once() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let mut source = FakeFitbit::default();

    assert_eq!(backfill(&log, &mut source, day(10)).unwrap(), 14);
    assert_eq!(source.calls.len(), 7);

    let records = log.load().unwrap();
    assert_eq!(records.len(), 14);
    assert!(records.contains(&Record::new("2024-03-09T00:00", Category::Sleep, "7.50", "")));
    assert!(records.contains(&Record::new("2024-03-09T00:00", Category::Steps, "1009", "")));

    let mut again = FakeFitbit::default();
    assert_eq!(backfill(&log, &mut again, day(10)).unwrap(), 0);
    assert!(again.calls.is_empty());
}

#[test]
fn backfill_keeps_existing_values() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    log.save(rec("2024-03-09T00:00", Category::Sleep, "4.00")).unwrap();

    let mut source = FakeFitbit::default();
    backfill(&log, &mut source, day(10)).unwrap();

    let sleep_on_9th: Vec<Record> = log
        .load()
        .unwrap()
        .into_iter()
        .filter(|r| r.day() == "2024-03-09" && r.category == Category::Sleep)
        .collect();
    assert_eq!(sleep_on_9th, vec![rec("2024-03-09T00:00", Category::Sleep, "4.00")]);
}

#[test]
fn fresh_sync_is_skipped() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let marker = TimestampMarker::new(&store, MARKER);
    marker.set(at(10, 7)).unwrap();

    let mut source = FakeFitbit::default();
    let outcome = sync_if_stale(&log, &marker, &mut source, at(10, 20), false).unwrap();

    assert_eq!(outcome, SyncOutcome::Fresh);
    assert!(source.calls.is_empty());
    assert!(log.load().unwrap().is_empty());
}

#[test]
fn stale_or_forced_sync_runs_and_stamps_the_marker() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let marker = TimestampMarker::new(&store, MARKER);

    let mut source = FakeFitbit::default();
    let outcome = sync_if_stale(&log, &marker, &mut source, at(10, 20), false).unwrap();
    assert_eq!(outcome, SyncOutcome::Synced { written: 14 });
    assert_eq!(marker.get().unwrap(), Some(at(10, 20)));

    let mut forced = FakeFitbit::default();
    let outcome = sync_if_stale(&log, &marker, &mut forced, at(10, 21), true).unwrap();
    assert_eq!(outcome, SyncOutcome::Synced { written: 0 });
    assert_eq!(marker.get().unwrap(), Some(at(10, 21)));
}

#[test]
fn missing_authorization_leaves_marker_unset() {
    let (_dir, store) = temp_store();
    let log = LogStore::new(&store, LOG);
    let marker = TimestampMarker::new(&store, MARKER);

    let err = sync_if_stale(&log, &marker, &mut Disconnected, at(10, 20), false).unwrap_err();

    assert!(matches!(err, AppError::AuthorizationRequired("fitbit")));
    assert_eq!(marker.get().unwrap(), None);
}
