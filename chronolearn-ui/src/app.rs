//! App Root Component
//!
//! Main application component with routing and the session provider.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Analytics, Calendar, Dashboard, Home, Import, Login, PlaylistDetail, Register};
use crate::state::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/register" view=Register />
                        <Route path="/import" view=Import />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/playlist/:playlist_id" view=PlaylistDetail />
                        <Route path="/playlist/:playlist_id/calendar" view=Calendar />
                        <Route path="/playlist/:playlist_id/analytics" view=Analytics />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
