//! Dashboard Page
//!
//! All imported playlists with progress. Each card has an action menu; at
//! most one menu is open and a click anywhere outside its card closes it.

use leptos::*;
use leptos_router::*;

use chronolearn::menu::MenuState;
use chronolearn::model::{Id, PlaylistSummary};
use chronolearn::route::Route;
use chronolearn::session::Session;

use crate::api;
use crate::components::{CardSkeleton, Notice, NoticeView, ScheduleModal, SuccessModal};
use crate::pages::{menu_owner, open_external, protected};

#[component]
pub fn Dashboard() -> impl IntoView {
    match protected() {
        Ok(session) => view! { <PlaylistGrid session=session /> }.into_view(),
        Err(redirect) => redirect,
    }
}

#[component]
fn PlaylistGrid(session: Session) -> impl IntoView {
    let session = store_value(session);
    let playlists = create_rw_signal(Vec::<PlaylistSummary>::new());
    let (loading, set_loading) = create_signal(true);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let menu = create_rw_signal(MenuState::<Id>::default());
    let scheduling = create_rw_signal(None::<PlaylistSummary>);
    let (success_open, set_success_open) = create_signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_dashboard(&session.get_value()).await {
                Ok(list) => {
                    set_notice.set(None);
                    playlists.set(list);
                }
                Err(e) => set_notice.set(Some(Notice::error(e.user_message("Failed to load dashboard.")))),
            }
            set_loading.set(false);
        });
    };

    // Fetch once on mount
    load();

    // Click-outside dismissal for the card menus
    let listener = window_event_listener(ev::mousedown, move |ev| {
        let owner = menu_owner(&ev);
        menu.update(|m| m.dismiss_outside(owner.as_ref()));
    });
    on_cleanup(move || listener.remove());

    let on_scheduled = Callback::new(move |_| {
        scheduling.set(None);
        load();
        set_success_open.set(true);
    });

    view! {
        <div class="container mx-auto px-4 py-10">
            <h1 class="text-3xl font-bold mb-6">"Your Playlists"</h1>

            <NoticeView notice=notice />

            {move || {
                if loading.get() && playlists.with(Vec::is_empty) {
                    view! { <CardSkeleton /> }.into_view()
                } else if playlists.with(Vec::is_empty) {
                    view! {
                        <div class="text-center py-16 text-white/70">
                            <p class="mb-4">"No playlists yet."</p>
                            <A href="/import" class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium">
                                "Import your first playlist"
                            </A>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mt-4">
                            <For
                                each=move || playlists.get()
                                key=PlaylistSummary::card_key
                                children=move |playlist| view! {
                                    <PlaylistCard playlist=playlist menu=menu scheduling=scheduling />
                                }
                            />
                        </div>
                    }.into_view()
                }
            }}

            {move || scheduling.get().map(|playlist| view! {
                <ScheduleModal
                    playlist=playlist
                    on_close=Callback::new(move |_| scheduling.set(None))
                    on_scheduled=on_scheduled
                />
            })}

            <SuccessModal
                open=success_open
                message="Playlist scheduled successfully!"
                on_close=Callback::new(move |_| set_success_open.set(false))
            />
        </div>
    }
}

#[component]
fn PlaylistCard(
    playlist: PlaylistSummary,
    menu: RwSignal<MenuState<Id>>,
    scheduling: RwSignal<Option<PlaylistSummary>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let id = playlist.playlist_id.clone();
    let owner = id.to_string();
    let width = format!("width: {:.0}%", playlist.progress_width());
    let schedule_label = if playlist.is_scheduled() { "Reschedule" } else { "Schedule" };

    let is_open = {
        let id = id.clone();
        move || menu.with(|m| m.is_open(&id))
    };
    let toggle = {
        let id = id.clone();
        move |_: ev::MouseEvent| menu.update(|m| m.toggle(id.clone()))
    };

    let go = move |route: Route| {
        let navigate = navigate.clone();
        move |_: ()| {
            menu.update(MenuState::close);
            navigate(&route.path(), Default::default());
        }
    };

    let schedule_target = playlist.clone();
    let youtube_url = playlist.youtube_url.clone();

    view! {
        <div
            class="relative bg-white/5 border border-white/10 rounded-2xl overflow-visible"
            data-menu-owner=owner
        >
            {playlist.thumbnail.clone().map(|src| view! {
                <img src=src alt="" class="w-full h-40 object-cover rounded-t-2xl" />
            })}

            <div class="p-4">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="text-xl font-semibold line-clamp-2">{playlist.title.clone()}</h2>
                    <button
                        class="px-2 py-1 rounded-lg hover:bg-white/10 text-xl leading-none"
                        aria-label="Playlist actions"
                        on:click=toggle
                    >
                        "⋮"
                    </button>
                </div>

                <p class="text-sm text-white/70 mt-2">
                    {format!("{} / {} videos completed", playlist.completed, playlist.total_videos)}
                </p>
                <div class="w-full bg-white/10 rounded-full h-2 mt-2">
                    <div class="bg-violet-500 h-2 rounded-full" style=width />
                </div>
                <p class="text-xs text-white/60 mt-2">
                    {match (&playlist.scheduled_start, &playlist.scheduled_end) {
                        (Some(start), Some(end)) if playlist.is_scheduled() => format!("{} → {}", start, end),
                        _ => "Not scheduled yet".to_string(),
                    }}
                </p>
            </div>

            <Show when=is_open.clone()>
                <div class="absolute right-4 top-14 z-30 w-48 bg-gray-800 border border-white/10 rounded-lg shadow-xl py-1 text-sm">
                    <MenuItem
                        label=schedule_label
                        on_click=Callback::new({
                            let target = schedule_target.clone();
                            move |_| {
                                menu.update(MenuState::close);
                                scheduling.set(Some(target.clone()));
                            }
                        })
                    />
                    <MenuItem label="View Videos" on_click=Callback::new(go(Route::playlist(&id))) />
                    <MenuItem label="Calendar" on_click=Callback::new(go(Route::calendar(&id))) />
                    <MenuItem label="Analytics" on_click=Callback::new(go(Route::analytics(&id))) />
                    <MenuItem
                        label="Open on YouTube"
                        on_click=Callback::new({
                            let url = youtube_url.clone();
                            move |_| {
                                menu.update(MenuState::close);
                                open_external(&url);
                            }
                        })
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(crate) fn MenuItem(label: &'static str, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="w-full text-left px-4 py-2 hover:bg-white/10"
            on:click=move |_| on_click.call(())
        >
            {label}
        </button>
    }
}
