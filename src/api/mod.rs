//! Backend API
//!
//! Endpoint table and wire error types shared by the browser and terminal
//! clients. Transport lives elsewhere (`gloo-net` in the browser crate,
//! `reqwest` in [`crate::client`]); this module only knows paths, methods,
//! body encodings and which calls need a bearer token.

pub mod error;

pub use error::{ApiError, ApiResult, ErrorDetail, FieldError, NETWORK_MESSAGE};

use crate::model::Id;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// How the request body is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Json,
    Form,
}

/// A backend endpoint: method, path relative to the base URL, body encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub body: BodyKind,
    /// Whether the `Authorization: Bearer` header is attached
    pub authenticated: bool,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>, body: BodyKind, authenticated: bool) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            authenticated,
        }
    }

    /// Absolute URL against a base (trailing slashes on the base are ignored)
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    // ============ Auth ============

    /// `POST /auth/login`, form-encoded `username` + `password`
    pub fn login() -> Self {
        Self::new(Method::Post, "/auth/login", BodyKind::Form, false)
    }

    /// `POST /auth/register`, JSON `{email, password}`
    pub fn register() -> Self {
        Self::new(Method::Post, "/auth/register", BodyKind::Json, false)
    }

    // ============ Playlists ============

    /// `POST /playlists/import`, JSON `{youtube_url}`
    pub fn import_playlist() -> Self {
        Self::new(Method::Post, "/playlists/import", BodyKind::Json, true)
    }

    /// `GET /calendar/user/me/dashboard`
    pub fn dashboard() -> Self {
        Self::new(Method::Get, "/calendar/user/me/dashboard", BodyKind::None, true)
    }

    /// `POST /calendar/schedule/by-hours`
    pub fn schedule_by_hours() -> Self {
        Self::new(Method::Post, "/calendar/schedule/by-hours", BodyKind::Json, true)
    }

    /// `POST /calendar/schedule/by-date`
    pub fn schedule_by_date() -> Self {
        Self::new(Method::Post, "/calendar/schedule/by-date", BodyKind::Json, true)
    }

    /// `GET /calendar/playlist/{id}/videos`
    pub fn playlist_videos(id: &Id) -> Self {
        Self::new(
            Method::Get,
            format!("/calendar/playlist/{}/videos", id),
            BodyKind::None,
            true,
        )
    }

    /// `PUT /calendar/video/{id}`, JSON `{status}`
    pub fn update_video(id: &Id) -> Self {
        Self::new(Method::Put, format!("/calendar/video/{}", id), BodyKind::Json, true)
    }

    /// `GET /calendar/playlist/{id}/calendar-view`
    pub fn calendar_view(id: &Id) -> Self {
        Self::new(
            Method::Get,
            format!("/calendar/playlist/{}/calendar-view", id),
            BodyKind::None,
            true,
        )
    }

    // ============ Analytics ============

    pub fn progress(id: &Id) -> Self {
        Self::playlist_panel(id, "/progress")
    }

    pub fn watch_time(id: &Id) -> Self {
        Self::playlist_panel(id, "/watch-time")
    }

    pub fn streak(id: &Id) -> Self {
        Self::playlist_panel(id, "/streak")
    }

    pub fn chart_data(id: &Id) -> Self {
        Self::playlist_panel(id, "/chart-data")
    }

    /// `GET /calendar/playlist/{id}` (title, thumbnail, link)
    pub fn playlist_info(id: &Id) -> Self {
        Self::playlist_panel(id, "")
    }

    fn playlist_panel(id: &Id, suffix: &str) -> Self {
        Self::new(
            Method::Get,
            format!("/calendar/playlist/{}{}", id, suffix),
            BodyKind::None,
            true,
        )
    }
}

// ============ Request bodies ============

/// Body of `POST /playlists/import`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ImportRequest {
    pub youtube_url: String,
}

/// Body of `PUT /calendar/video/{id}`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatusRequest {
    pub status: crate::model::VideoStatus,
}
