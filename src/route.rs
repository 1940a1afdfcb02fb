//! Route Table
//!
//! Every screen the front end knows about, parsed from a URL path.

use crate::model::Id;

/// A screen of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Import,
    Dashboard,
    Playlist(String),
    PlaylistCalendar(String),
    PlaylistAnalytics(String),
    Other(String),
}

impl Route {
    /// Parse a location pathname
    pub fn parse(path: &str) -> Self {
        match path {
            "/" | "" => return Route::Home,
            "/login" => return Route::Login,
            "/register" => return Route::Register,
            "/import" => return Route::Import,
            "/dashboard" => return Route::Dashboard,
            _ => {}
        }

        if let Some(rest) = path.strip_prefix("/playlist/") {
            let mut parts = rest.splitn(2, '/');
            let id = parts.next().unwrap_or_default();
            if !id.is_empty() {
                match parts.next() {
                    None | Some("") => return Route::Playlist(id.to_string()),
                    Some("calendar") => return Route::PlaylistCalendar(id.to_string()),
                    Some("analytics") => return Route::PlaylistAnalytics(id.to_string()),
                    Some(_) => {}
                }
            }
        }

        Route::Other(path.to_string())
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Import => "/import".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Playlist(id) => format!("/playlist/{}", id),
            Route::PlaylistCalendar(id) => format!("/playlist/{}/calendar", id),
            Route::PlaylistAnalytics(id) => format!("/playlist/{}/analytics", id),
            Route::Other(path) => path.clone(),
        }
    }

    /// Pages that need a session token before they fetch anything
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Import
                | Route::Dashboard
                | Route::Playlist(_)
                | Route::PlaylistCalendar(_)
                | Route::PlaylistAnalytics(_)
        )
    }

    /// Playlist detail and its calendar/analytics subpages
    pub fn is_playlist_page(&self) -> bool {
        matches!(
            self,
            Route::Playlist(_) | Route::PlaylistCalendar(_) | Route::PlaylistAnalytics(_)
        )
    }

    pub fn playlist(id: &Id) -> Self {
        Route::Playlist(id.to_string())
    }

    pub fn calendar(id: &Id) -> Self {
        Route::PlaylistCalendar(id.to_string())
    }

    pub fn analytics(id: &Id) -> Self {
        Route::PlaylistAnalytics(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register"), Route::Register);
        assert_eq!(Route::parse("/import"), Route::Import);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
    }

    #[test]
    fn test_parse_playlist_routes() {
        assert_eq!(Route::parse("/playlist/12"), Route::Playlist("12".into()));
        assert_eq!(Route::parse("/playlist/12/"), Route::Playlist("12".into()));
        assert_eq!(
            Route::parse("/playlist/12/calendar"),
            Route::PlaylistCalendar("12".into())
        );
        assert_eq!(
            Route::parse("/playlist/12/analytics"),
            Route::PlaylistAnalytics("12".into())
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/playlist/"), Route::Other("/playlist/".into()));
        assert_eq!(
            Route::parse("/playlist/12/edit"),
            Route::Other("/playlist/12/edit".into())
        );
        assert_eq!(Route::parse("/settings"), Route::Other("/settings".into()));
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/login", "/dashboard", "/playlist/5", "/playlist/5/calendar"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_protected_routes() {
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Import.is_protected());
        assert!(Route::PlaylistAnalytics("1".into()).is_protected());
        assert!(!Route::Home.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Register.is_protected());
    }
}
