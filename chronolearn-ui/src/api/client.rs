//! HTTP API Client
//!
//! Functions for communicating with the ChronoLearn REST API. Paths, methods
//! and auth rules come from [`Endpoint`]; this module only moves bytes.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use chronolearn::analytics::AnalyticsBundle;
use chronolearn::api::{ApiError, ApiResult, Endpoint, ImportRequest, Method};
use chronolearn::model::{
    CalendarEntry, ChartSummary, Credentials, Id, ImportResponse, LoginResponse, PlaylistInfo,
    PlaylistSummary, Progress, Streak, Video, WatchTime,
};
use chronolearn::progress::StatusUpdate;
use chronolearn::schedule::ScheduleRequest;
use chronolearn::session::Session;

/// Default API base URL, fixed at build time
pub const DEFAULT_API_BASE: &str = match option_env!("CHRONOLEARN_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

const API_URL_KEY: &str = "chronolearn_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

fn builder(endpoint: &Endpoint, session: &Session) -> ApiResult<RequestBuilder> {
    let url = endpoint.url(&get_api_base());
    let builder = match endpoint.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    if !endpoint.authenticated {
        return Ok(builder);
    }
    match session.bearer() {
        Some(bearer) => Ok(builder.header("Authorization", &bearer)),
        None => Err(ApiError::Request("not logged in".to_string())),
    }
}

fn log_failure(endpoint: &Endpoint, err: &ApiError) {
    web_sys::console::error_1(&format!("{} failed: {}", endpoint.path, err).into());
}

/// Map transport failures and non-2xx responses into [`ApiError`]
async fn check(
    endpoint: &Endpoint,
    result: Result<Response, gloo_net::Error>,
) -> ApiResult<Response> {
    let response = result.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log_failure(endpoint, &err);
        err
    })?;

    if response.ok() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ApiError::http(response.status(), &body);
    log_failure(endpoint, &err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(endpoint: Endpoint, session: &Session) -> ApiResult<T> {
    let request = builder(&endpoint, session)?;
    let response = check(&endpoint, request.send().await).await?;
    decode(response).await
}

async fn send_json<B: Serialize>(
    endpoint: &Endpoint,
    session: &Session,
    body: &B,
) -> ApiResult<Response> {
    let request = builder(endpoint, session)?
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    check(endpoint, request.send().await).await
}

// ============ Auth ============

/// Form-encoded login; returns the token and user id
pub async fn login(credentials: &Credentials) -> ApiResult<LoginResponse> {
    let endpoint = Endpoint::login();

    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| ApiError::Request("could not build form body".to_string()))?;
    for (key, value) in credentials.login_form() {
        params.append(key, value);
    }

    let request = builder(&endpoint, &Session::default())?
        .body(params)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let response = check(&endpoint, request.send().await).await?;
    decode(response).await
}

pub async fn register(credentials: &Credentials) -> ApiResult<()> {
    send_json(&Endpoint::register(), &Session::default(), credentials).await?;
    Ok(())
}

// ============ Playlists ============

pub async fn import_playlist(session: &Session, request: &ImportRequest) -> ApiResult<ImportResponse> {
    let response = send_json(&Endpoint::import_playlist(), session, request).await?;
    decode(response).await
}

pub async fn fetch_dashboard(session: &Session) -> ApiResult<Vec<PlaylistSummary>> {
    get(Endpoint::dashboard(), session).await
}

pub async fn schedule(session: &Session, request: &ScheduleRequest) -> ApiResult<()> {
    send_json(&request.endpoint(), session, request).await?;
    Ok(())
}

pub async fn fetch_videos(session: &Session, playlist_id: &Id) -> ApiResult<Vec<Video>> {
    get(Endpoint::playlist_videos(playlist_id), session).await
}

pub async fn update_status(session: &Session, update: &StatusUpdate) -> ApiResult<()> {
    send_json(&update.endpoint, session, &update.body).await?;
    Ok(())
}

pub async fn fetch_calendar(session: &Session, playlist_id: &Id) -> ApiResult<Vec<CalendarEntry>> {
    get(Endpoint::calendar_view(playlist_id), session).await
}

// ============ Analytics ============

/// All five panels, requested together and awaited jointly
pub async fn fetch_analytics(session: &Session, playlist_id: &Id) -> AnalyticsBundle {
    let (info, progress, watch_time, streak, chart) = futures::join!(
        get::<PlaylistInfo>(Endpoint::playlist_info(playlist_id), session),
        get::<Progress>(Endpoint::progress(playlist_id), session),
        get::<WatchTime>(Endpoint::watch_time(playlist_id), session),
        get::<Streak>(Endpoint::streak(playlist_id), session),
        get::<ChartSummary>(Endpoint::chart_data(playlist_id), session),
    );

    AnalyticsBundle {
        info,
        progress,
        watch_time,
        streak,
        chart,
    }
}
