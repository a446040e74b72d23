//! Weekly calendar summary: hours per configured category, with the
//! previous week for comparison and the configured targets.

use crate::config::CalendarCategory;
use crate::errors::AppResult;
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::Serialize;

pub const OTHER: &str = "Other";

/// Anything that can list calendar events in a time range.
pub trait EventSource {
    fn events_between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Hours {
    pub completed: f64,
    pub scheduled: f64,
    pub total: f64,
}

impl Hours {
    fn add(&mut self, other: &Hours) {
        self.completed += other.completed;
        self.scheduled += other.scheduled;
        self.total += other.total;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedEvent {
    pub title: String,
    pub weekday: String,
    pub duration: f64,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub hours: Hours,
    pub events: Vec<CategorizedEvent>,
}

/// Configured categories in config order, then "Other".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsSummary {
    pub categories: Vec<CategorySummary>,
    /// Sum over configured categories, "Other" excluded.
    pub total: Hours,
}

impl EventsSummary {
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub current_week: EventsSummary,
    pub previous_week: EventsSummary,
    pub targets: Vec<(String, f64)>,
    pub target_total: f64,
}

/// Monday 00:00:00 to Sunday 23:59:59.999999 (UTC) of the week
/// `weeks_ago` weeks before the one containing `now`.
pub fn week_range(now: DateTime<Utc>, weeks_ago: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let back = now.weekday().num_days_from_monday() as i64 + 7 * weeks_ago as i64;
    let monday = now.date_naive() - Duration::days(back);

    let start = monday.and_time(NaiveTime::MIN).and_utc();
    let end = (start + Duration::days(7)) - Duration::microseconds(1);
    (start, end)
}

/// Sort timed events of at least one hour into categories.
///
/// An event goes to the first category with a keyword contained in its title
/// (case-insensitive), else to "Other". `now` decides which events count as
/// completed; without it none do.
pub fn summarize(
    events: &[CalendarEvent],
    categories: &[CalendarCategory],
    now: Option<DateTime<Utc>>,
) -> EventsSummary {
    let mut out: Vec<CategorySummary> = categories
        .iter()
        .map(|c| c.name.as_str())
        .chain([OTHER])
        .map(|name| CategorySummary {
            name: name.to_string(),
            hours: Hours::default(),
            events: Vec::new(),
        })
        .collect();

    for ev in events {
        let (Some(start), Some(end), Some(duration)) =
            (ev.start.date_time, ev.end.date_time, ev.duration_hours())
        else {
            continue;
        };
        if duration < 1.0 {
            continue;
        }

        let is_completed = now.is_some_and(|n| end <= n);
        let title = ev.title();
        let lowered = title.to_lowercase();

        let idx = categories
            .iter()
            .position(|c| c.keywords.iter().any(|k| lowered.contains(&k.to_lowercase())))
            .unwrap_or(categories.len());

        let slot = &mut out[idx];
        slot.hours.total += duration;
        slot.hours.scheduled += duration;
        if is_completed {
            slot.hours.completed += duration;
        }
        slot.events.push(CategorizedEvent {
            title: title.to_string(),
            weekday: start.format("%A").to_string(),
            duration,
            is_completed,
        });
    }

    let mut total = Hours::default();
    for c in out.iter().filter(|c| c.name != OTHER) {
        total.add(&c.hours);
    }

    EventsSummary {
        categories: out,
        total,
    }
}

/// Current week (with completion as of `now`) and the previous week.
pub fn weekly_summary(
    source: &mut dyn EventSource,
    categories: &[CalendarCategory],
    now: DateTime<Utc>,
) -> AppResult<WeeklySummary> {
    let (cur_start, cur_end) = week_range(now, 0);
    let (prev_start, prev_end) = week_range(now, 1);

    let current = source.events_between(cur_start, cur_end)?;
    let previous = source.events_between(prev_start, prev_end)?;

    let targets: Vec<(String, f64)> = categories
        .iter()
        .map(|c| (c.name.clone(), c.target))
        .collect();
    let target_total: f64 = targets.iter().map(|(_, t)| t).sum();

    Ok(WeeklySummary {
        current_week: summarize(&current, categories, Some(now)),
        previous_week: summarize(&previous, categories, None),
        targets,
        target_total,
    })
}

/// A line of the "this week" event list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLine {
    pub title: String,
    pub start: String,
    pub duration: f64,
}

/// Every event of the list, all-day ones counted as 24 hours, ordered by start.
pub fn event_lines(events: &[CalendarEvent]) -> Vec<EventLine> {
    let mut keyed: Vec<(String, EventLine)> = events
        .iter()
        .filter_map(|ev| {
            let title = ev.summary.clone().unwrap_or_else(|| "(No title)".into());
            if let Some(start) = ev.start.date_time {
                Some((
                    start.to_rfc3339(),
                    EventLine {
                        title,
                        start: start.format("%Y-%m-%d %H:%M").to_string(),
                        duration: ev.duration_hours().unwrap_or(0.0),
                    },
                ))
            } else {
                ev.start.date.map(|d| {
                    (
                        d.format("%Y-%m-%d").to_string(),
                        EventLine {
                            title,
                            start: d.format("%Y-%m-%d (all day)").to_string(),
                            duration: 24.0,
                        },
                    )
                })
            }
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, line)| line).collect()
}
