//! Backend HTTP Client
//!
//! Native client used by the terminal front end. Every call goes through
//! [`Endpoint`] so paths, methods and auth rules match the browser client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analytics::AnalyticsBundle;
use crate::api::{ApiError, ApiResult, BodyKind, Endpoint, ImportRequest, Method};
use crate::model::{
    CalendarEntry, ChartSummary, Credentials, Id, ImportResponse, LoginResponse, PlaylistInfo,
    PlaylistSummary, Progress, Streak, Video, WatchTime,
};
use crate::progress::StatusUpdate;
use crate::schedule::ScheduleRequest;
use crate::session::Session;

/// Operations the front ends need from the backend
#[async_trait]
pub trait TrackerApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    async fn register(&self, credentials: &Credentials) -> ApiResult<()>;

    async fn import_playlist(&self, request: &ImportRequest) -> ApiResult<ImportResponse>;

    async fn dashboard(&self) -> ApiResult<Vec<PlaylistSummary>>;

    async fn schedule(&self, request: &ScheduleRequest) -> ApiResult<()>;

    async fn playlist_videos(&self, playlist_id: &Id) -> ApiResult<Vec<Video>>;

    async fn update_status(&self, update: &StatusUpdate) -> ApiResult<()>;

    async fn calendar_view(&self, playlist_id: &Id) -> ApiResult<Vec<CalendarEntry>>;

    /// All analytics panels, requested together
    async fn analytics(&self, playlist_id: &Id) -> AnalyticsBundle;
}

/// `reqwest`-backed [`TrackerApi`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session: Session::default(),
        }
    }

    /// Attach the session whose token authenticates protected calls
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, endpoint: &Endpoint) -> ApiResult<RequestBuilder> {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };

        if !endpoint.authenticated {
            return Ok(builder);
        }
        match self.session.token() {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Err(ApiError::Request("not logged in".to_string())),
        }
    }

    async fn send(&self, endpoint: &Endpoint, builder: RequestBuilder) -> ApiResult<Response> {
        tracing::debug!(path = %endpoint.path, method = ?endpoint.method, "backend request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %endpoint.path, error = %e, "backend unreachable");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::http(status.as_u16(), &body);
        tracing::warn!(path = %endpoint.path, error = %err, "backend rejected request");
        Err(err)
    }

    async fn call<B, T>(&self, endpoint: Endpoint, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.request(&endpoint)?;
        if let Some(body) = body {
            builder = match endpoint.body {
                BodyKind::Json => builder.json(body),
                BodyKind::Form => builder.form(body),
                BodyKind::None => builder,
            };
        }

        let response = self.send(&endpoint, builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For calls whose success body carries nothing we use
    async fn call_ignoring_body<B>(&self, endpoint: Endpoint, body: &B) -> ApiResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let builder = match endpoint.body {
            BodyKind::Json => self.request(&endpoint)?.json(body),
            BodyKind::Form => self.request(&endpoint)?.form(body),
            BodyKind::None => self.request(&endpoint)?,
        };
        self.send(&endpoint, builder).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        self.call::<(), T>(endpoint, None).await
    }
}

#[async_trait]
impl TrackerApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.call(Endpoint::login(), Some(&credentials.login_form()))
            .await
    }

    async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        self.call_ignoring_body(Endpoint::register(), credentials).await
    }

    async fn import_playlist(&self, request: &ImportRequest) -> ApiResult<ImportResponse> {
        self.call(Endpoint::import_playlist(), Some(request)).await
    }

    async fn dashboard(&self) -> ApiResult<Vec<PlaylistSummary>> {
        self.get(Endpoint::dashboard()).await
    }

    async fn schedule(&self, request: &ScheduleRequest) -> ApiResult<()> {
        self.call_ignoring_body(request.endpoint(), request).await
    }

    async fn playlist_videos(&self, playlist_id: &Id) -> ApiResult<Vec<Video>> {
        self.get(Endpoint::playlist_videos(playlist_id)).await
    }

    async fn update_status(&self, update: &StatusUpdate) -> ApiResult<()> {
        self.call_ignoring_body(update.endpoint.clone(), &update.body)
            .await
    }

    async fn calendar_view(&self, playlist_id: &Id) -> ApiResult<Vec<CalendarEntry>> {
        self.get(Endpoint::calendar_view(playlist_id)).await
    }

    async fn analytics(&self, playlist_id: &Id) -> AnalyticsBundle {
        let (info, progress, watch_time, streak, chart) = tokio::join!(
            self.get::<PlaylistInfo>(Endpoint::playlist_info(playlist_id)),
            self.get::<Progress>(Endpoint::progress(playlist_id)),
            self.get::<WatchTime>(Endpoint::watch_time(playlist_id)),
            self.get::<Streak>(Endpoint::streak(playlist_id)),
            self.get::<ChartSummary>(Endpoint::chart_data(playlist_id)),
        );

        AnalyticsBundle {
            info,
            progress,
            watch_time,
            streak,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoStatus;
    use crate::progress::VideoBoard;
    use crate::schedule::{ScheduleForm, ScheduleMode};
    use axum::extract::{Form, Path};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(String, Value)>>>;

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer secret")
    }

    fn fake_backend(seen: Seen) -> Router {
        let schedule_seen = seen.clone();
        let status_seen = seen;

        Router::new()
            .route(
                "/auth/login",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    if form.get("username").map(String::as_str) == Some("a@b.c")
                        && form.get("password").map(String::as_str) == Some("pw")
                    {
                        (
                            StatusCode::OK,
                            Json(json!({"access_token": "secret", "users_id": 7})),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"detail": "Invalid credentials"})),
                        )
                    }
                }),
            )
            .route(
                "/auth/register",
                post(|Json(_body): Json<Value>| async move {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"detail": [
                            {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}
                        ]})),
                    )
                }),
            )
            .route(
                "/calendar/user/me/dashboard",
                get(|headers: HeaderMap| async move {
                    if !authorized(&headers) {
                        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})));
                    }
                    (
                        StatusCode::OK,
                        Json(json!([{
                            "playlist_id": 1,
                            "title": "Rust",
                            "total_videos": 4,
                            "completed": 1,
                            "percent_complete": 25.0,
                            "scheduled_start": null
                        }])),
                    )
                }),
            )
            .route(
                "/calendar/schedule/by-hours",
                post(move |Json(body): Json<Value>| {
                    let seen = schedule_seen.clone();
                    async move {
                        if let Ok(mut seen) = seen.lock() {
                            seen.push(("by-hours".to_string(), body));
                        }
                        Json(json!({"message": "scheduled"}))
                    }
                }),
            )
            .route(
                "/calendar/video/:id",
                put(move |Path(id): Path<String>, Json(body): Json<Value>| {
                    let seen = status_seen.clone();
                    async move {
                        if id == "404" {
                            return (StatusCode::NOT_FOUND, Json(json!({"detail": "Video not found"})));
                        }
                        if let Ok(mut seen) = seen.lock() {
                            seen.push((format!("video/{}", id), body));
                        }
                        (StatusCode::OK, Json(json!({"ok": true})))
                    }
                }),
            )
            .route(
                "/calendar/playlist/:id/videos",
                get(|| async {
                    Json(json!([
                        {"id": 1, "title": "One", "status": "Not Started"},
                        {"id": 404, "title": "Gone", "status": "In Progress"}
                    ]))
                }),
            )
            .route(
                "/calendar/playlist/:id/calendar-view",
                get(|| async {
                    Json(json!([{"date": "2024-06-01", "videos": [{"id": 1, "title": "One"}]}]))
                }),
            )
            .route(
                "/calendar/playlist/:id",
                get(|| async { Json(json!({"title": "Rust", "thumbnail": null, "youtube_url": "u"})) }),
            )
            .route(
                "/calendar/playlist/:id/progress",
                get(|| async { Json(json!({"total_videos": 4, "completed": 1, "percentage": 25.0})) }),
            )
            .route(
                "/calendar/playlist/:id/watch-time",
                get(|| async {
                    Json(json!({"total_time_sec": 3600, "completed_sec": 900, "remaining_sec": 2700}))
                }),
            )
            .route(
                "/calendar/playlist/:id/streak",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/calendar/playlist/:id/chart-data",
                get(|| async { Json(json!({"total_videos": 4, "completed_videos": 1})) }),
            )
    }

    async fn spawn_backend() -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let app = fake_backend(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), seen)
    }

    fn authed(base: &str) -> HttpClient {
        HttpClient::new(base).with_session(Session::new("secret", Some("7".into())))
    }

    #[tokio::test]
    async fn test_login_posts_form() {
        let (base, _) = spawn_backend().await;
        let client = HttpClient::new(&base);

        let ok = client.login(&Credentials::new("a@b.c", "pw")).await.unwrap();
        assert_eq!(ok.access_token, "secret");
        assert_eq!(ok.users_id, Some(Id::Num(7)));

        let err = client
            .login(&Credentials::new("a@b.c", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_field_errors() {
        let (base, _) = spawn_backend().await;
        let err = HttpClient::new(&base)
            .register(&Credentials::new("nope", "pw"))
            .await
            .unwrap_err();
        assert_eq!(
            err.items("Registration failed."),
            vec!["value is not a valid email address".to_string()]
        );
    }

    #[tokio::test]
    async fn test_protected_call_needs_token() {
        let (base, seen) = spawn_backend().await;
        let err = HttpClient::new(&base).dashboard().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(seen.lock().unwrap().is_empty());

        let playlists = authed(&base).dashboard().await.unwrap();
        assert_eq!(playlists.len(), 1);
        assert!(!playlists[0].is_scheduled());
    }

    #[tokio::test]
    async fn test_schedule_posts_payload() {
        let (base, seen) = spawn_backend().await;
        let form = ScheduleForm {
            mode: ScheduleMode::ByHours,
            start_date: crate::schedule::parse_date("2024-06-01"),
            hours_per_day: Some(2.0),
            target_date: None,
        };
        let request = form.build(Id::Num(1)).unwrap();
        authed(&base).schedule(&request).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "by-hours");
        assert_eq!(
            seen[0].1,
            json!({"playlist_id": 1, "hours_per_day": 2.0, "start_date": "2024-06-01"})
        );
    }

    #[tokio::test]
    async fn test_status_update_round() {
        let (base, seen) = spawn_backend().await;
        let client = authed(&base);

        let videos = client.playlist_videos(&Id::Num(1)).await.unwrap();
        let mut board = VideoBoard::new(videos);

        let update = board.begin(&Id::Num(1), VideoStatus::Completed).unwrap();
        client.update_status(&update).await.unwrap();
        board.confirm(&update);

        let update = board.begin(&Id::Num(404), VideoStatus::Completed).unwrap();
        let err = client.update_status(&update).await.unwrap_err();
        board.fail(&update, err.user_message("Failed to update status"));

        assert_eq!(board.get(&Id::Num(1)).unwrap().status, VideoStatus::Completed);
        assert_eq!(board.get(&Id::Num(404)).unwrap().status, VideoStatus::InProgress);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ("video/1".to_string(), json!({"status": "Completed"})));
    }

    #[tokio::test]
    async fn test_analytics_partial_failure() {
        let (base, _) = spawn_backend().await;
        let bundle = authed(&base).analytics(&Id::Num(1)).await;

        assert!(bundle.has_failures());
        assert_eq!(bundle.failed_panels(), vec!["streak"]);
        assert_eq!(bundle.progress.as_ref().unwrap().completed, 1);
        assert_eq!(bundle.pie().unwrap().remaining, 3);
    }

    #[tokio::test]
    async fn test_calendar_view() {
        let (base, _) = spawn_backend().await;
        let entries = authed(&base).calendar_view(&Id::Num(1)).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].videos[0].status, VideoStatus::NotStarted);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let err = HttpClient::new("http://127.0.0.1:1")
            .login(&Credentials::new("a@b.c", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
