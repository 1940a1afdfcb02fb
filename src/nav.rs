//! Navigation Links
//!
//! The navigation bar shows a different link set per page family. The set is
//! re-derived from the current route and login state on every navigation.

use crate::route::Route;

/// Anchor id of the feature list on the home page
pub const FEATURES_ANCHOR: &str = "features";

/// What a navigation link does when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Navigate to a path
    Go(String),
    /// Smooth-scroll to an element id on the current page
    ScrollTo(&'static str),
    /// Clear the session and go to the login page
    Logout,
}

/// A single entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub action: NavAction,
}

impl NavLink {
    fn go(label: &'static str, route: Route) -> Self {
        Self {
            label,
            action: NavAction::Go(route.path()),
        }
    }

    fn logout() -> Self {
        Self {
            label: "Logout",
            action: NavAction::Logout,
        }
    }

    pub fn is_logout(&self) -> bool {
        self.action == NavAction::Logout
    }
}

/// Link set for the given route and session presence
pub fn nav_links(route: &Route, logged_in: bool) -> Vec<NavLink> {
    match route {
        r if r.is_playlist_page() => vec![
            NavLink::go("Home", Route::Home),
            NavLink::go("Dashboard", Route::Dashboard),
            NavLink::go("Upload", Route::Import),
            NavLink::logout(),
        ],
        Route::Home => {
            let mut links = vec![NavLink {
                label: "Features",
                action: NavAction::ScrollTo(FEATURES_ANCHOR),
            }];
            if logged_in {
                links.push(NavLink::go("Dashboard", Route::Dashboard));
                links.push(NavLink::go("Upload", Route::Import));
                links.push(NavLink::logout());
            } else {
                links.push(NavLink::go("Login", Route::Login));
                links.push(NavLink::go("Register", Route::Register));
            }
            links
        }
        Route::Login => vec![
            NavLink::go("Home", Route::Home),
            NavLink::go("Register", Route::Register),
        ],
        Route::Register => vec![
            NavLink::go("Home", Route::Home),
            NavLink::go("Login", Route::Login),
        ],
        Route::Import => vec![
            NavLink::go("Home", Route::Home),
            NavLink::go("Dashboard", Route::Dashboard),
            NavLink::logout(),
        ],
        Route::Dashboard => vec![
            NavLink::go("Home", Route::Home),
            NavLink::go("Upload", Route::Import),
            NavLink::logout(),
        ],
        _ => Vec::new(),
    }
}

/// Open/closed state of the collapsed (mobile) menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any route change closes the menu
    pub fn on_navigate(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(route: &str, logged_in: bool) -> Vec<&'static str> {
        nav_links(&Route::parse(route), logged_in)
            .into_iter()
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn test_playlist_pages() {
        for path in ["/playlist/1", "/playlist/1/calendar", "/playlist/1/analytics"] {
            assert_eq!(labels(path, true), ["Home", "Dashboard", "Upload", "Logout"]);
            // Login state does not change this branch
            assert_eq!(labels(path, false), ["Home", "Dashboard", "Upload", "Logout"]);
        }
    }

    #[test]
    fn test_home_logged_in_and_out() {
        assert_eq!(labels("/", true), ["Features", "Dashboard", "Upload", "Logout"]);
        assert_eq!(labels("/", false), ["Features", "Login", "Register"]);

        let links = nav_links(&Route::Home, false);
        assert_eq!(links[0].action, NavAction::ScrollTo("features"));
    }

    #[test]
    fn test_auth_pages_link_to_each_other() {
        let login = nav_links(&Route::Login, false);
        assert_eq!(login[1].action, NavAction::Go("/register".into()));
        assert_eq!(labels("/login", false), ["Home", "Register"]);

        let register = nav_links(&Route::Register, false);
        assert_eq!(register[1].action, NavAction::Go("/login".into()));
        assert_eq!(labels("/register", true), ["Home", "Login"]);
    }

    #[test]
    fn test_import_and_dashboard() {
        assert_eq!(labels("/import", true), ["Home", "Dashboard", "Logout"]);
        assert_eq!(labels("/dashboard", true), ["Home", "Upload", "Logout"]);
        assert!(nav_links(&Route::Dashboard, true)[2].is_logout());
    }

    #[test]
    fn test_other_routes_have_no_links() {
        assert!(labels("/settings", true).is_empty());
        assert!(labels("/playlist/1/edit", false).is_empty());
    }

    #[test]
    fn test_mobile_menu_closes_on_navigation() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.on_navigate();
        assert!(!menu.is_open());
    }
}
