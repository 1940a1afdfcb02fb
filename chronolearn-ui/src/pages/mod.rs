//! Page Components
//!
//! One component per route.

pub mod analytics;
pub mod calendar;
pub mod dashboard;
pub mod home;
pub mod import;
pub mod login;
pub mod playlist;
pub mod register;

pub use analytics::Analytics;
pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use home::Home;
pub use import::Import;
pub use login::Login;
pub use playlist::PlaylistDetail;
pub use register::Register;

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use chronolearn::model::Id;
use chronolearn::session::{gate, Gate, Session};

use crate::state::use_session;

/// Session of a protected page, checked once on mount.
///
/// `Err` carries the redirect to render instead of the page; no request is
/// issued in that case.
pub(crate) fn protected() -> Result<Session, View> {
    let session = use_session().get_untracked();
    match gate(&session) {
        Gate::Proceed(_) => Ok(session),
        Gate::Redirect(route) => Err(view! { <Redirect path=route.path() /> }.into_view()),
    }
}

/// `:playlist_id` route parameter
pub(crate) fn playlist_param() -> Id {
    let params = use_params_map();
    Id::from(params.with_untracked(|p| p.get("playlist_id").cloned().unwrap_or_default()))
}

/// Open a URL in a new tab
pub(crate) fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            web_sys::console::error_1(&e);
        }
    }
}

/// Attribute naming the list item a menu belongs to
const MENU_OWNER_ATTR: &str = "data-menu-owner";

/// Id of the menu-owning item that contains the event target, if any
pub(crate) fn menu_owner(ev: &web_sys::MouseEvent) -> Option<Id> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let owner = target
        .closest(&format!("[{}]", MENU_OWNER_ATTR))
        .ok()
        .flatten()?;
    owner.get_attribute(MENU_OWNER_ATTR).map(Id::from)
}
