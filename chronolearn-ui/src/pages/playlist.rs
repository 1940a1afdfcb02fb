//! Playlist Detail Page
//!
//! Videos of one playlist with a status selector each. A status change shows
//! immediately, is sent as one PUT and rolls back if the backend rejects it.

use leptos::*;
use leptos_router::*;

use chronolearn::import::format_duration;
use chronolearn::menu::MenuState;
use chronolearn::model::{Id, Video, VideoStatus};
use chronolearn::progress::{parse_filter, Flash, SyncState, VideoBoard};
use chronolearn::route::Route;
use chronolearn::session::Session;

use crate::api;
use crate::components::{Loading, Notice, NoticeView};
use crate::pages::dashboard::MenuItem;
use crate::pages::{menu_owner, open_external, playlist_param, protected};

/// How long a status message stays up
const MESSAGE_MS: u32 = 3000;

#[component]
pub fn PlaylistDetail() -> impl IntoView {
    match protected() {
        Ok(session) => view! { <VideoList session=session playlist_id=playlist_param() /> }.into_view(),
        Err(redirect) => redirect,
    }
}

#[component]
fn VideoList(session: Session, playlist_id: Id) -> impl IntoView {
    let session = store_value(session);
    let board = create_rw_signal(VideoBoard::default());
    let (loading, set_loading) = create_signal(true);
    let (notice, set_notice) = create_signal(None::<Notice>);
    let (filter, set_filter) = create_signal(None::<VideoStatus>);
    let menu = create_rw_signal(MenuState::<Id>::default());
    let status_message = create_rw_signal(Flash::<Notice>::default());

    // Only the newest message's timer clears it
    let flash = move |n: Notice| {
        let Some(generation) = status_message.try_update(|f| f.show(n)) else {
            return;
        };
        gloo_timers::callback::Timeout::new(MESSAGE_MS, move || {
            let _ = status_message.try_update(|f| f.expire(generation));
        })
        .forget();
    };

    let listener = window_event_listener(ev::mousedown, move |ev| {
        let owner = menu_owner(&ev);
        menu.update(|m| m.dismiss_outside(owner.as_ref()));
    });
    on_cleanup(move || listener.remove());

    {
        let playlist_id = playlist_id.clone();
        spawn_local(async move {
            match api::fetch_videos(&session.get_value(), &playlist_id).await {
                Ok(videos) => board.set(VideoBoard::new(videos)),
                Err(e) => set_notice.set(Some(Notice::error(e.user_message("Failed to fetch videos.")))),
            }
            set_loading.set(false);
        });
    }

    let change_status = Callback::new(move |(video_id, status): (Id, VideoStatus)| {
        menu.update(MenuState::close);
        let Some(update) = board.try_update(|b| b.begin(&video_id, status)).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::update_status(&session.get_value(), &update).await {
                Ok(()) => board.update(|b| b.confirm(&update)),
                Err(e) => {
                    let message = e.user_message("Failed to update video.");
                    board.update(|b| b.fail(&update, message.clone()));
                    flash(Notice::error(message));
                }
            }
        });
    });

    let calendar_path = Route::calendar(&playlist_id).path();
    let playlist_id = store_value(playlist_id);

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-6">
                <div>
                    <h1 class="text-3xl font-bold">"Playlist Videos"</h1>
                    <p class="text-white/60 text-sm mt-1">
                        {move || board.with(|b| {
                            let (done, total) = b.completed();
                            format!("{} of {} completed", done, total)
                        })}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <A href=calendar_path class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20 text-sm">
                        "Calendar"
                    </A>
                    <select
                        class="bg-white/5 border border-white/10 rounded-lg px-3 py-2 text-sm"
                        on:change=move |ev| set_filter.set(parse_filter(&event_target_value(&ev)))
                    >
                        <option value="All">"All"</option>
                        {VideoStatus::ALL.iter().map(|s| view! {
                            <option value=s.label()>{s.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <NoticeView notice=notice />
            <NoticeView notice=Signal::derive(move || status_message.with(|f| f.current().cloned())) />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="space-y-4 mt-4">
                    <For
                        each=move || board.with(|b| b.filtered(filter.get()).into_iter().cloned().collect::<Vec<_>>())
                        key=|v| v.id.clone()
                        children=move |video| view! {
                            <VideoRow
                                video=video
                                board=board
                                menu=menu
                                playlist_id=playlist_id.get_value()
                                on_status=change_status
                            />
                        }
                    />
                    <Show when=move || board.with(|b| b.filtered(filter.get()).is_empty())>
                        <p class="text-center text-white/60 py-10">"No videos match this filter."</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn VideoRow(
    video: Video,
    board: RwSignal<VideoBoard>,
    menu: RwSignal<MenuState<Id>>,
    playlist_id: Id,
    on_status: Callback<(Id, VideoStatus)>,
) -> impl IntoView {
    let navigate = use_navigate();
    let id = store_value(video.id.clone());

    let status = move || {
        id.with_value(|id| board.with(|b| b.get(id).map(|v| v.status)))
            .unwrap_or_default()
    };
    let sync = move || id.with_value(|id| board.with(|b| b.sync_state(id).cloned()));

    let youtube_url = video.youtube_url.clone();
    let calendar_path = Route::calendar(&playlist_id).path();

    view! {
        <div
            class="relative bg-white/5 border border-white/10 rounded-2xl p-4 flex gap-4"
            data-menu-owner=video.id.to_string()
        >
            {video.thumbnail.clone().map(|src| view! {
                <img src=src alt="" class="w-40 h-24 object-cover rounded-lg hidden sm:block" />
            })}

            <div class="flex-1 min-w-0">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="text-lg font-semibold line-clamp-2">{video.title.clone()}</h2>
                    <button
                        class="px-2 py-1 rounded-lg hover:bg-white/10 text-xl leading-none"
                        aria-label="Video actions"
                        on:click=move |_| menu.update(|m| m.toggle(id.get_value()))
                    >
                        "⋮"
                    </button>
                </div>
                <p class="text-xs text-white/60 mt-1">
                    {format!(
                        "Scheduled: {} · {}",
                        video.scheduled_day(),
                        format_duration(video.duration_seconds)
                    )}
                </p>

                <div class="flex items-center gap-3 mt-3">
                    <select
                        class="bg-white/5 border border-white/10 rounded-lg px-3 py-1 text-sm"
                        prop:value=move || status().label()
                        on:change=move |ev| {
                            if let Some(next) = VideoStatus::parse(&event_target_value(&ev)) {
                                on_status.call((id.get_value(), next));
                            }
                        }
                    >
                        {VideoStatus::ALL.iter().map(|s| view! {
                            <option value=s.label()>{s.label()}</option>
                        }).collect_view()}
                    </select>
                    {move || if status() == VideoStatus::Completed {
                        view! {
                            <span class="text-sm text-green-300">"✅ Completed"</span>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                class="px-3 py-1 rounded-lg bg-green-600 hover:bg-green-700 text-sm font-medium"
                                on:click=move |_| on_status.call((id.get_value(), VideoStatus::Completed))
                            >
                                "Mark as Completed"
                            </button>
                        }.into_view()
                    }}
                    {move || match sync() {
                        Some(SyncState::Pending { .. }) => view! {
                            <span class="text-xs text-white/60">"Saving..."</span>
                        }.into_view(),
                        Some(SyncState::Failed { message, .. }) => view! {
                            <span class="text-xs text-red-300">{message}</span>
                        }.into_view(),
                        _ => ().into_view(),
                    }}
                </div>
            </div>

            <Show when=move || menu.with(|m| id.with_value(|id| m.is_open(id)))>
                <div class="absolute right-4 top-12 z-30 w-48 bg-gray-800 border border-white/10 rounded-lg shadow-xl py-1 text-sm">
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
                    <MenuItem
                        label="View Calendar"
                        on_click=Callback::new({
                            let navigate = navigate.clone();
                            let path = calendar_path.clone();
                            move |_| {
                                menu.update(MenuState::close);
                                navigate(&path, Default::default());
                            }
                        })
                    />
                    {VideoStatus::ALL.iter().map(|s| {
                        let next = *s;
                        view! {
                            <MenuItem
                                label=next.label()
                                on_click=Callback::new(move |_| on_status.call((id.get_value(), next)))
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
