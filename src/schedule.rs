//! Scheduling Requests
//!
//! The backend can spread a playlist over calendar days two ways: a fixed
//! number of hours per day, or finishing by a target date. The UI toggles
//! between the two and posts a different payload shape for each.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::{Id, PlaylistSummary};

/// Smallest accepted hours-per-day value
pub const MIN_HOURS_PER_DAY: f64 = 0.5;

/// Hours-per-day prefilled after an import
pub const DEFAULT_HOURS_PER_DAY: f64 = 1.5;

/// Client-side form validation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a playlist URL.")]
    EmptyUrl,

    #[error("Start date is required.")]
    MissingStartDate,

    #[error("Hours per day is required.")]
    MissingHours,

    #[error("Hours per day must be at least 0.5.")]
    HoursTooLow(f64),

    #[error("Target end date is required.")]
    MissingTargetDate,
}

/// Which scheduling strategy the user picked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScheduleMode {
    #[default]
    ByHours,
    ByDate,
}

impl ScheduleMode {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ScheduleMode::ByHours => Endpoint::schedule_by_hours(),
            ScheduleMode::ByDate => Endpoint::schedule_by_date(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleMode::ByHours => "By Hours",
            ScheduleMode::ByDate => "By Target Date",
        }
    }
}

/// Body posted to one of the schedule endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScheduleRequest {
    ByHours {
        playlist_id: Id,
        hours_per_day: f64,
        start_date: NaiveDate,
    },
    ByDate {
        playlist_id: Id,
        target_date: NaiveDate,
        start_date: NaiveDate,
    },
}

impl ScheduleRequest {
    pub fn mode(&self) -> ScheduleMode {
        match self {
            ScheduleRequest::ByHours { .. } => ScheduleMode::ByHours,
            ScheduleRequest::ByDate { .. } => ScheduleMode::ByDate,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.mode().endpoint()
    }

    pub fn playlist_id(&self) -> &Id {
        match self {
            ScheduleRequest::ByHours { playlist_id, .. } | ScheduleRequest::ByDate { playlist_id, .. } => {
                playlist_id
            }
        }
    }
}

/// Raw input of the schedule modal / import schedule section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleForm {
    pub mode: ScheduleMode,
    pub start_date: Option<NaiveDate>,
    pub hours_per_day: Option<f64>,
    pub target_date: Option<NaiveDate>,
}

impl ScheduleForm {
    /// Form prefilled the way the import page offers it
    pub fn by_hours_from(start_date: NaiveDate) -> Self {
        Self {
            mode: ScheduleMode::ByHours,
            start_date: Some(start_date),
            hours_per_day: Some(DEFAULT_HOURS_PER_DAY),
            target_date: None,
        }
    }

    /// Validate and build the payload for a playlist. Only the field of the
    /// active mode is checked; the other is ignored.
    pub fn build(&self, playlist_id: Id) -> Result<ScheduleRequest, FormError> {
        let start_date = self.start_date.ok_or(FormError::MissingStartDate)?;

        match self.mode {
            ScheduleMode::ByHours => {
                let hours = self.hours_per_day.ok_or(FormError::MissingHours)?;
                if !hours.is_finite() || hours < MIN_HOURS_PER_DAY {
                    return Err(FormError::HoursTooLow(hours));
                }
                Ok(ScheduleRequest::ByHours {
                    playlist_id,
                    hours_per_day: hours,
                    start_date,
                })
            }
            ScheduleMode::ByDate => {
                let target_date = self.target_date.ok_or(FormError::MissingTargetDate)?;
                Ok(ScheduleRequest::ByDate {
                    playlist_id,
                    target_date,
                    start_date,
                })
            }
        }
    }
}

/// Parse an `<input type="date">` value; empty or malformed is `None`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse an `<input type="number">` value; empty or malformed is `None`
pub fn parse_hours(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|h| h.is_finite())
}

/// Heading of the schedule modal
pub fn modal_title(playlist: &PlaylistSummary) -> &'static str {
    if playlist.is_scheduled() {
        "Reschedule Playlist?"
    } else {
        "Schedule Playlist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_by_hours_payload() {
        let form = ScheduleForm {
            mode: ScheduleMode::ByHours,
            start_date: Some(date("2024-06-01")),
            hours_per_day: Some(2.0),
            target_date: Some(date("2024-07-01")),
        };
        let request = form.build(Id::Num(4)).unwrap();

        assert_eq!(request.endpoint().path, "/calendar/schedule/by-hours");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "playlist_id": 4,
                "hours_per_day": 2.0,
                "start_date": "2024-06-01"
            })
        );
    }

    #[test]
    fn test_by_date_payload() {
        let form = ScheduleForm {
            mode: ScheduleMode::ByDate,
            start_date: Some(date("2024-06-01")),
            hours_per_day: None,
            target_date: Some(date("2024-06-30")),
        };
        let request = form.build(Id::Num(4)).unwrap();

        assert_eq!(request.endpoint().path, "/calendar/schedule/by-date");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "playlist_id": 4,
                "target_date": "2024-06-30",
                "start_date": "2024-06-01"
            })
        );
    }

    #[test]
    fn test_validation() {
        let mut form = ScheduleForm::default();
        assert_eq!(form.build(Id::Num(1)), Err(FormError::MissingStartDate));

        form.start_date = Some(date("2024-06-01"));
        assert_eq!(form.build(Id::Num(1)), Err(FormError::MissingHours));

        form.hours_per_day = Some(0.25);
        assert_eq!(form.build(Id::Num(1)), Err(FormError::HoursTooLow(0.25)));

        form.hours_per_day = Some(MIN_HOURS_PER_DAY);
        assert!(form.build(Id::Num(1)).is_ok());

        form.mode = ScheduleMode::ByDate;
        assert_eq!(form.build(Id::Num(1)), Err(FormError::MissingTargetDate));
    }

    #[test]
    fn test_import_defaults() {
        let form = ScheduleForm::by_hours_from(date("2024-01-10"));
        assert_eq!(form.hours_per_day, Some(1.5));
        assert_eq!(form.mode, ScheduleMode::ByHours);
        assert!(form.build(Id::Text("PL1".into())).is_ok());
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("06/01/2024"), None);
        assert_eq!(parse_hours(" 1.5 "), Some(1.5));
        assert_eq!(parse_hours(""), None);
        assert_eq!(parse_hours("NaN"), None);
    }

    #[test]
    fn test_modal_title() {
        let mut playlist: PlaylistSummary = serde_json::from_value(serde_json::json!({
            "playlist_id": 1,
            "title": "x",
            "scheduled_start": "2024-06-01"
        }))
        .unwrap();
        assert_eq!(modal_title(&playlist), "Reschedule Playlist?");

        playlist.scheduled_start = None;
        assert_eq!(modal_title(&playlist), "Schedule Playlist");
    }
}
