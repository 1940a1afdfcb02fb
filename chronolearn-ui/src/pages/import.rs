//! Import Page
//!
//! Paste a playlist URL, preview the imported videos, then schedule it.

use leptos::*;

use chronolearn::import::{format_duration, ImportFlow};
use chronolearn::model::ImportedVideo;
use chronolearn::schedule::{parse_date, parse_hours, DEFAULT_HOURS_PER_DAY, MIN_HOURS_PER_DAY};
use chronolearn::session::Session;

use crate::api;
use crate::components::{InlineLoading, Notice, NoticeView};
use crate::pages::protected;

#[component]
pub fn Import() -> impl IntoView {
    match protected() {
        Ok(session) => view! { <ImportForm session=session /> }.into_view(),
        Err(redirect) => redirect,
    }
}

#[component]
fn ImportForm(session: Session) -> impl IntoView {
    let flow = create_rw_signal(ImportFlow::default());
    let (loading, set_loading) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let today = chrono::Local::now().date_naive();
    let (start, set_start) = create_signal(today.format("%Y-%m-%d").to_string());
    let (hours, set_hours) = create_signal(DEFAULT_HOURS_PER_DAY.to_string());
    let (scheduling, set_scheduling) = create_signal(false);

    let import_session = session.clone();
    let on_import = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match flow.with_untracked(ImportFlow::request) {
            Ok(request) => request,
            Err(e) => {
                set_notice.set(Some(Notice::error(e.to_string())));
                return;
            }
        };

        set_notice.set(None);
        set_loading.set(true);
        flow.update(ImportFlow::reset);

        let session = import_session.clone();
        spawn_local(async move {
            match api::import_playlist(&session, &request).await {
                Ok(response) => {
                    flow.update(|f| f.complete(response));
                    set_notice.set(Some(Notice::success("Playlist imported successfully!")));
                }
                Err(e) => {
                    set_notice.set(Some(Notice::from_api(&e, "Failed to import playlist.")));
                }
            }
            set_loading.set(false);
        });
    };

    let on_schedule = move |_: ev::MouseEvent| {
        let mut form = ImportFlow::schedule_form(today);
        form.start_date = parse_date(&start.get_untracked());
        form.hours_per_day = parse_hours(&hours.get_untracked());

        let request = match flow.with_untracked(|f| f.schedule(&form)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                set_notice.set(Some(Notice::error(e.to_string())));
                return;
            }
            None => return,
        };

        set_notice.set(None);
        set_scheduling.set(true);
        let session = session.clone();
        spawn_local(async move {
            match api::schedule(&session, &request).await {
                Ok(()) => set_notice.set(Some(Notice::success("Playlist scheduled successfully!"))),
                Err(e) => set_notice.set(Some(Notice::error(e.user_message("Failed to schedule.")))),
            }
            set_scheduling.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-10">
            <div class="bg-white/10 border border-white/20 rounded-3xl shadow-2xl px-6 py-10 sm:px-10">
                <h2 class="text-2xl sm:text-3xl font-semibold mb-2">"Import a Playlist"</h2>
                <p class="text-white/70 text-sm mb-8">
                    "Paste a YouTube playlist link to turn it into a study schedule."
                </p>

                <form on:submit=on_import class="flex flex-col sm:flex-row gap-3">
                    <input
                        type="url"
                        placeholder="https://youtube.com/playlist?list=..."
                        class="flex-1 bg-white/5 rounded-lg px-4 py-3 outline-none placeholder-white/50 focus:ring-2 focus:ring-violet-500"
                        prop:value=move || flow.with(|f| f.url.clone())
                        on:input=move |ev| flow.update(|f| f.url = event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        disabled=move || !flow.with(|f| f.can_submit(loading.get()))
                        class="px-6 py-3 bg-violet-600 hover:bg-violet-700 disabled:bg-gray-600 rounded-lg font-semibold flex items-center justify-center space-x-2"
                    >
                        <Show when=move || loading.get()>
                            <InlineLoading />
                        </Show>
                        <span>"Import"</span>
                    </button>
                </form>

                <div class="mt-4">
                    <NoticeView notice=notice />
                </div>

                <Show when=move || flow.with(ImportFlow::can_schedule)>
                    <div class="mt-8 border-t border-white/10 pt-6">
                        <h3 class="text-lg font-semibold mb-4">"Schedule this playlist"</h3>
                        <div class="flex flex-col sm:flex-row gap-3">
                            <input
                                type="date"
                                class="flex-1 bg-white/5 rounded-lg px-4 py-3 outline-none focus:ring-2 focus:ring-violet-500"
                                prop:value=start
                                on:input=move |ev| set_start.set(event_target_value(&ev))
                            />
                            <input
                                type="number"
                                step="0.5"
                                min=MIN_HOURS_PER_DAY
                                placeholder="Hours per day"
                                class="flex-1 bg-white/5 rounded-lg px-4 py-3 outline-none focus:ring-2 focus:ring-violet-500"
                                prop:value=hours
                                on:input=move |ev| set_hours.set(event_target_value(&ev))
                            />
                            <button
                                disabled=move || scheduling.get()
                                class="px-6 py-3 bg-green-600 hover:bg-green-700 disabled:bg-gray-600 rounded-lg font-semibold"
                                on:click=on_schedule.clone()
                            >
                                "Schedule"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>

            // Imported videos
            {move || {
                flow.with(|f| f.imported.as_ref().map(|r| r.videos.clone()))
                    .filter(|videos| !videos.is_empty())
                    .map(|videos| view! {
                        <div class="mt-10">
                            <h3 class="text-xl font-semibold mb-4">
                                {format!("{} videos", videos.len())}
                            </h3>
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {videos.into_iter().map(|video| view! { <VideoPreview video=video /> }).collect_view()}
                            </div>
                        </div>
                    })
            }}
        </div>
    }
}

#[component]
fn VideoPreview(video: ImportedVideo) -> impl IntoView {
    view! {
        <div class="bg-white/5 border border-white/10 rounded-xl overflow-hidden">
            {video.thumbnail.map(|src| view! {
                <img src=src alt="" class="w-full h-32 object-cover" />
            })}
            <div class="p-3">
                <p class="text-sm font-medium line-clamp-2">{video.title}</p>
                <p class="text-xs text-white/60 mt-1">{format_duration(video.duration_seconds)}</p>
            </div>
        </div>
    }
}
