//! Calendar View
//!
//! Month grid of a playlist's schedule. Days are matched against the
//! backend's entries by `YYYY-MM-DD` string; timestamps sent with a time
//! part are compared on their date only.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{CalendarEntry, Video};

/// Message shown when the selected day has no videos
pub const EMPTY_DAY_MESSAGE: &str = "No videos scheduled for this day.";

/// Result of picking a day on the grid
#[derive(Debug, Clone, PartialEq)]
pub enum DaySelection<'a> {
    /// Nothing picked yet
    None,
    Videos(&'a [Video]),
    Empty,
}

/// Entries of one playlist's calendar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarView {
    entries: Vec<CalendarEntry>,
}

impl CalendarView {
    pub fn new(entries: Vec<CalendarEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    fn entry(&self, date: NaiveDate) -> Option<&CalendarEntry> {
        let key = date.format("%Y-%m-%d").to_string();
        self.entries.iter().find(|e| day_key(&e.date) == key)
    }

    pub fn select(&self, date: Option<NaiveDate>) -> DaySelection<'_> {
        let Some(date) = date else {
            return DaySelection::None;
        };
        match self.entry(date) {
            Some(entry) if !entry.videos.is_empty() => DaySelection::Videos(&entry.videos),
            _ => DaySelection::Empty,
        }
    }

    /// Badge count on a day tile
    pub fn video_count(&self, date: NaiveDate) -> usize {
        self.entry(date).map_or(0, |e| e.videos.len())
    }

    /// Month of the earliest scheduled day, used as the initial page
    pub fn first_month(&self) -> Option<Month> {
        self.entries
            .iter()
            .filter_map(|e| NaiveDate::parse_from_str(day_key(&e.date), "%Y-%m-%d").ok())
            .min()
            .map(Month::of)
    }
}

fn day_key(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// A displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Heading such as "June 2024"
    pub fn title(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Week rows, Monday first; cells outside the month are `None`
    pub fn grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        month_grid(self.year, self.month)
    }
}

/// Week rows of a month, Monday first. Invalid months give no rows.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut day = first;

    while day.month() == month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day += Duration::days(1);
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Id, VideoStatus};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn video(id: i64) -> Video {
        Video {
            id: Id::Num(id),
            title: format!("Lesson {}", id),
            thumbnail: None,
            duration_seconds: 120,
            status: VideoStatus::NotStarted,
            scheduled_date: None,
            youtube_url: String::new(),
        }
    }

    fn view() -> CalendarView {
        CalendarView::new(vec![
            CalendarEntry {
                date: "2024-06-03".into(),
                videos: vec![video(1), video(2)],
            },
            CalendarEntry {
                date: "2024-06-04T00:00:00".into(),
                videos: vec![video(3)],
            },
            CalendarEntry {
                date: "2024-06-05".into(),
                videos: vec![],
            },
        ])
    }

    #[test]
    fn test_select_day() {
        let view = view();
        assert_eq!(view.select(None), DaySelection::None);

        match view.select(Some(date("2024-06-03"))) {
            DaySelection::Videos(videos) => assert_eq!(videos.len(), 2),
            other => panic!("expected videos, got {:?}", other),
        }
        assert!(matches!(
            view.select(Some(date("2024-06-04"))),
            DaySelection::Videos(v) if v.len() == 1
        ));
        assert_eq!(view.select(Some(date("2024-06-05"))), DaySelection::Empty);
        assert_eq!(view.select(Some(date("2024-06-06"))), DaySelection::Empty);
    }

    #[test]
    fn test_video_count() {
        let view = view();
        assert_eq!(view.video_count(date("2024-06-03")), 2);
        assert_eq!(view.video_count(date("2024-06-30")), 0);
        assert_eq!(view.first_month(), Some(Month { year: 2024, month: 6 }));
        assert_eq!(CalendarView::default().first_month(), None);
    }

    #[test]
    fn test_month_grid_monday_first() {
        // June 2024 starts on a Saturday and has 30 days
        let weeks = month_grid(2024, 6);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][..5], [None; 5]);
        assert_eq!(weeks[0][5], Some(date("2024-06-01")));
        assert_eq!(weeks[4][0], Some(date("2024-06-24")));
        assert_eq!(weeks[4][6], Some(date("2024-06-30")));

        let days = weeks.iter().flatten().filter(|d| d.is_some()).count();
        assert_eq!(days, 30);
        assert!(month_grid(2024, 13).is_empty());
    }

    #[test]
    fn test_month_grid_six_rows() {
        // September 2024 starts on a Sunday
        let weeks = month_grid(2024, 9);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(date("2024-09-01")));
        assert_eq!(weeks[5][0], Some(date("2024-09-30")));
        assert_eq!(weeks[5][1..], [None; 6]);
    }

    #[test]
    fn test_month_navigation() {
        let jan = Month { year: 2024, month: 1 };
        assert_eq!(jan.prev(), Month { year: 2023, month: 12 });
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(Month { year: 2024, month: 12 }.next(), Month { year: 2025, month: 1 });
        assert_eq!(Month { year: 2024, month: 6 }.title(), "June 2024");
    }
}
