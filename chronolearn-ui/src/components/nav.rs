//! Navigation Component
//!
//! Header navigation bar. The link set depends on the current page and on
//! whether a session exists; on small screens it collapses into a menu.

use leptos::*;
use leptos_router::*;

use chronolearn::nav::{nav_links, MobileMenu, NavAction, NavLink};
use chronolearn::route::Route;

use crate::state::use_session;

fn scroll_to(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        el.scroll_into_view();
    }
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let (menu, set_menu) = create_signal(MobileMenu::default());

    let route = create_memo(move |_| Route::parse(&location.pathname.get()));

    // Any route change closes the collapsed menu
    create_effect(move |_| {
        route.with(|_| ());
        set_menu.update(MobileMenu::on_navigate);
    });

    let run = move |action: NavAction| {
        match action {
            NavAction::Go(path) => navigate(&path, Default::default()),
            NavAction::ScrollTo(id) => scroll_to(id),
            NavAction::Logout => {
                session.logout();
                navigate(&Route::Login.path(), Default::default());
            }
        }
        set_menu.update(MobileMenu::on_navigate);
    };

    let links = move || nav_links(&route.get(), session.is_authenticated());

    let desktop_run = run.clone();
    let mobile_run = run;

    view! {
        <nav class="sticky top-0 z-40 bg-gray-900/80 backdrop-blur border-b border-white/10">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"⏳"</span>
                        <span class="text-xl font-bold text-white">
                            "Chrono"<span class="text-violet-400">"Learn"</span>
                        </span>
                    </A>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        {move || render_links(links(), desktop_run.clone())}
                    </div>

                    // Mobile menu toggle
                    <Show when=move || !links().is_empty()>
                        <button
                            class="md:hidden p-2 rounded-lg text-gray-300 hover:bg-white/10"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu.update(MobileMenu::toggle)
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </Show>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden flex flex-col space-y-1 pb-4">
                        {
                            let run = mobile_run.clone();
                            move || render_links(links(), run.clone())
                        }
                    </div>
                </Show>
            </div>
        </nav>
    }
}

fn render_links(links: Vec<NavLink>, run: impl Fn(NavAction) + Clone + 'static) -> View {
    links
        .into_iter()
        .map(|link| {
            let run = run.clone();
            let action = link.action.clone();
            let class = if link.is_logout() {
                "px-4 py-2 rounded-lg text-red-300 hover:text-white hover:bg-red-500/20 transition-colors text-left"
            } else {
                "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-white/10 transition-colors text-left"
            };
            view! {
                <button class=class on:click=move |_| run(action.clone())>
                    {link.label}
                </button>
            }
        })
        .collect_view()
}
