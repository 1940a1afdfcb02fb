//! Playlist Import
//!
//! Two-step flow: post a playlist URL, then (once the backend returns the
//! playlist id) offer the by-hours schedule form for it.

use chrono::NaiveDate;

use crate::api::ImportRequest;
use crate::model::{Id, ImportResponse};
use crate::schedule::{FormError, ScheduleForm, ScheduleRequest};

/// State of the import page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportFlow {
    pub url: String,
    /// Set once the backend accepted the playlist
    pub imported: Option<ImportResponse>,
}

impl ImportFlow {
    /// Submit button state: needs a URL and no request in flight
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.url.trim().is_empty()
    }

    /// Body for the import endpoint
    pub fn request(&self) -> Result<ImportRequest, FormError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(FormError::EmptyUrl);
        }
        Ok(ImportRequest {
            youtube_url: url.to_string(),
        })
    }

    /// Record a successful import; enables scheduling
    pub fn complete(&mut self, response: ImportResponse) {
        tracing::debug!(
            playlist_id = %response.playlist_id,
            videos = response.videos.len(),
            "playlist imported"
        );
        self.imported = Some(response);
    }

    /// Forget a previous result before a new attempt
    pub fn reset(&mut self) {
        self.imported = None;
    }

    pub fn playlist_id(&self) -> Option<&Id> {
        self.imported.as_ref().map(|r| &r.playlist_id)
    }

    pub fn can_schedule(&self) -> bool {
        self.imported.is_some()
    }

    /// Schedule form offered after import, starting `today`
    pub fn schedule_form(today: NaiveDate) -> ScheduleForm {
        ScheduleForm::by_hours_from(today)
    }

    /// Build the schedule payload for the imported playlist.
    /// `None` when nothing has been imported yet.
    pub fn schedule(&self, form: &ScheduleForm) -> Option<Result<ScheduleRequest, FormError>> {
        self.playlist_id().map(|id| form.build(id.clone()))
    }
}

/// `m:ss` video length
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImportedVideo;
    use crate::schedule::{parse_date, ScheduleMode};

    fn response() -> ImportResponse {
        ImportResponse {
            playlist_id: Id::Num(11),
            message: "Imported 2 videos".into(),
            videos: vec![
                ImportedVideo {
                    title: "One".into(),
                    thumbnail: None,
                    duration_seconds: 65,
                },
                ImportedVideo {
                    title: "Two".into(),
                    thumbnail: None,
                    duration_seconds: 600,
                },
            ],
        }
    }

    #[test]
    fn test_submit_requires_url() {
        let mut flow = ImportFlow::default();
        assert!(!flow.can_submit(false));
        assert_eq!(flow.request(), Err(FormError::EmptyUrl));

        flow.url = "  https://youtube.com/playlist?list=PL1 ".into();
        assert!(flow.can_submit(false));
        assert!(!flow.can_submit(true));
        assert_eq!(
            flow.request().unwrap().youtube_url,
            "https://youtube.com/playlist?list=PL1"
        );
    }

    #[test]
    fn test_schedule_enabled_after_import() {
        let mut flow = ImportFlow::default();
        let today = parse_date("2024-06-01").unwrap();
        let form = ImportFlow::schedule_form(today);
        assert!(!flow.can_schedule());
        assert!(flow.schedule(&form).is_none());

        flow.complete(response());
        assert!(flow.can_schedule());

        let request = flow.schedule(&form).unwrap().unwrap();
        assert_eq!(request.mode(), ScheduleMode::ByHours);
        assert_eq!(request.playlist_id(), &Id::Num(11));

        flow.reset();
        assert!(!flow.can_schedule());
    }

    #[test]
    fn test_schedule_validation_surfaces() {
        let mut flow = ImportFlow::default();
        flow.complete(response());

        let mut form = ImportFlow::schedule_form(parse_date("2024-06-01").unwrap());
        form.hours_per_day = Some(0.0);
        assert_eq!(flow.schedule(&form), Some(Err(FormError::HoursTooLow(0.0))));

        form.hours_per_day = Some(1.0);
        form.start_date = None;
        assert_eq!(flow.schedule(&form), Some(Err(FormError::MissingStartDate)));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
        assert_eq!(format_duration(0), "0:00");
    }
}
