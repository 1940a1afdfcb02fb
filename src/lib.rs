//! # ChronoLearn
//!
//! Turn a YouTube playlist into a study schedule and track progress through it.
//! Scheduling, streaks and progress aggregation are computed by the backend;
//! this crate holds the front-end logic shared by the browser app
//! (`chronolearn-ui`) and the terminal client.
//!
//! ## Modules
//!
//! - [`route`] and [`nav`]: route table and navigation links per page
//! - [`session`]: explicit session value and the protected-page gate
//! - [`api`]: endpoint table and backend error taxonomy
//! - [`import`], [`schedule`], [`menu`], [`progress`], [`calendar`],
//!   [`analytics`]: per-page view state
//! - `client`, `config`, `store` (feature `cli`): native HTTP client,
//!   configuration and the session file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chronolearn::client::{HttpClient, TrackerApi};
//! use chronolearn::model::Credentials;
//! use chronolearn::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new("http://localhost:8000");
//!     let login = client.login(&Credentials::new("me@example.com", "secret")).await?;
//!
//!     let client = client.with_session(Session::new(login.access_token, None));
//!     for playlist in client.dashboard().await? {
//!         println!("{}: {:.0}%", playlist.title, playlist.percent_complete);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod calendar;
pub mod import;
pub mod menu;
pub mod model;
pub mod nav;
pub mod progress;
pub mod route;
pub mod schedule;
pub mod session;

#[cfg(feature = "cli")]
pub mod client;
#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod store;

// Re-export top-level types for convenience
pub use analytics::{format_seconds, AnalyticsBundle, PieSlices};
pub use api::{ApiError, ApiResult, Endpoint, ErrorDetail};
pub use calendar::{CalendarView, DaySelection, Month};
pub use import::{format_duration, ImportFlow};
pub use menu::MenuState;
pub use model::{
    CalendarEntry, Credentials, Id, ImportResponse, LoginResponse, PlaylistSummary, Video,
    VideoStatus,
};
pub use nav::{nav_links, MobileMenu, NavAction, NavLink};
pub use progress::{Flash, StatusUpdate, SyncState, VideoBoard};
pub use route::Route;
pub use schedule::{FormError, ScheduleForm, ScheduleMode, ScheduleRequest};
pub use session::{gate, Gate, Session, SessionStore, StoreError};

#[cfg(feature = "cli")]
pub use client::{HttpClient, TrackerApi};
#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "cli")]
pub use store::FileSessionStore;
