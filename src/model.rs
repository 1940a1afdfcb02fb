//! Wire Models
//!
//! View models mirroring the backend's JSON responses. None of these are
//! owned by the front end beyond the lifetime of the page that fetched them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier.
///
/// The backend is free to send ids as numbers or strings; we keep whichever
/// shape arrived so it serializes back unchanged in request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        // Route params arrive as text; numeric ones go back out as numbers.
        match s.parse::<i64>() {
            Ok(n) => Id::Num(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::from(s.as_str())
    }
}

/// Watch status of a single video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl VideoStatus {
    pub const ALL: [VideoStatus; 3] = [
        VideoStatus::NotStarted,
        VideoStatus::InProgress,
        VideoStatus::Completed,
    ];

    /// Label used on the wire and in the UI
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::NotStarted => "Not Started",
            VideoStatus::InProgress => "In Progress",
            VideoStatus::Completed => "Completed",
        }
    }

    /// Parse a wire label, also accepting CLI-friendly spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "not started" | "todo" => Some(VideoStatus::NotStarted),
            "in progress" | "started" => Some(VideoStatus::InProgress),
            "completed" | "done" => Some(VideoStatus::Completed),
            _ => None,
        }
    }
}

impl Default for VideoStatus {
    fn default() -> Self {
        VideoStatus::NotStarted
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dashboard card: read-only projection of a playlist and its progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub playlist_id: Id,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub total_videos: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub percent_complete: f64,
    #[serde(default)]
    pub scheduled_start: Option<String>,
    #[serde(default)]
    pub scheduled_end: Option<String>,
    #[serde(default)]
    pub youtube_url: String,
}

impl PlaylistSummary {
    /// A playlist with a start date has been scheduled before
    pub fn is_scheduled(&self) -> bool {
        self.scheduled_start.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Percentage clamped for progress bars
    pub fn progress_width(&self) -> f64 {
        self.percent_complete.clamp(0.0, 100.0)
    }

    /// List key for a rendered card. Changes whenever anything the card
    /// shows changes, so a re-fetched summary rebuilds its card.
    pub fn card_key(&self) -> CardKey {
        (
            self.playlist_id.clone(),
            self.title.clone(),
            self.scheduled_start.clone(),
            self.scheduled_end.clone(),
            self.completed,
            self.total_videos,
            self.percent_complete.to_bits(),
        )
    }
}

/// See [`PlaylistSummary::card_key`]
pub type CardKey = (Id, String, Option<String>, Option<String>, u32, u32, u64);

/// A video inside a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub youtube_url: String,
}

impl Video {
    /// Date part of the scheduled timestamp, or "N/A"
    pub fn scheduled_day(&self) -> String {
        self.scheduled_date
            .as_deref()
            .and_then(|d| d.split('T').next())
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A")
            .to_string()
    }
}

/// Videos scheduled on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// Preview of a video returned by the import endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedVideo {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration_seconds: u64,
}

/// Response from `POST /playlists/import`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub playlist_id: Id,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub videos: Vec<ImportedVideo>,
}

/// Response from `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub users_id: Option<Id>,
}

/// Email/password pair for login and registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Form fields for the login endpoint (OAuth2 password flow names)
    pub fn login_form(&self) -> [(&'static str, &str); 2] {
        [("username", self.email.as_str()), ("password", self.password.as_str())]
    }
}

// ============ Analytics panels ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub total_videos: u32,
    pub completed: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTime {
    pub total_time_sec: u64,
    pub completed_sec: u64,
    pub remaining_sec: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub current_streak: u32,
    pub max_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub total_videos: u32,
    pub completed_videos: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub youtube_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_keeps_wire_shape() {
        let num: Id = serde_json::from_str("42").unwrap();
        let text: Id = serde_json::from_str("\"PLabc\"").unwrap();
        assert_eq!(num, Id::Num(42));
        assert_eq!(text, Id::Text("PLabc".to_string()));
        assert_eq!(serde_json::to_string(&num).unwrap(), "42");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"PLabc\"");
    }

    #[test]
    fn test_id_from_route_param() {
        assert_eq!(Id::from("17"), Id::Num(17));
        assert_eq!(Id::from("abc"), Id::Text("abc".to_string()));
        assert_eq!(Id::from("17").to_string(), "17");
    }

    #[test]
    fn test_status_wire_labels() {
        let status: VideoStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, VideoStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&VideoStatus::NotStarted).unwrap(),
            "\"Not Started\""
        );
    }

    #[test]
    fn test_status_parse_cli_spellings() {
        assert_eq!(VideoStatus::parse("done"), Some(VideoStatus::Completed));
        assert_eq!(VideoStatus::parse("in-progress"), Some(VideoStatus::InProgress));
        assert_eq!(VideoStatus::parse("Not Started"), Some(VideoStatus::NotStarted));
        assert_eq!(VideoStatus::parse("paused"), None);
    }

    #[test]
    fn test_video_scheduled_day() {
        let mut video: Video = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Intro",
            "status": "Completed",
            "scheduled_date": "2024-06-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(video.scheduled_day(), "2024-06-01");

        video.scheduled_date = None;
        assert_eq!(video.scheduled_day(), "N/A");
    }

    #[test]
    fn test_dashboard_summary_tolerates_missing_fields() {
        let summary: PlaylistSummary = serde_json::from_value(serde_json::json!({
            "playlist_id": 3,
            "title": "Rust course",
            "total_videos": 10,
            "completed": 4,
            "percent_complete": 40.0,
            "scheduled_start": null
        }))
        .unwrap();
        assert!(!summary.is_scheduled());
        assert_eq!(summary.progress_width(), 40.0);
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn test_card_key_tracks_refetched_fields() {
        let before: PlaylistSummary = serde_json::from_value(serde_json::json!({
            "playlist_id": 3,
            "title": "Rust course",
            "total_videos": 10,
            "completed": 4,
            "percent_complete": 40.0
        }))
        .unwrap();
        assert_eq!(before.card_key(), before.clone().card_key());

        let mut scheduled = before.clone();
        scheduled.scheduled_start = Some("2024-06-01".into());
        scheduled.scheduled_end = Some("2024-06-20".into());
        assert_ne!(before.card_key(), scheduled.card_key());

        let mut progressed = before.clone();
        progressed.completed = 5;
        progressed.percent_complete = 50.0;
        assert_ne!(before.card_key(), progressed.card_key());
    }

    #[test]
    fn test_login_form_fields() {
        let creds = Credentials::new("a@b.c", "pw");
        assert_eq!(creds.login_form(), [("username", "a@b.c"), ("password", "pw")]);
    }
}
