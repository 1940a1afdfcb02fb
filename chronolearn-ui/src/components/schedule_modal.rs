//! Schedule Modal
//!
//! Schedule (or reschedule) a playlist either at a fixed number of hours per
//! day or to finish by a target date.

use leptos::*;

use chronolearn::model::PlaylistSummary;
use chronolearn::schedule::{
    modal_title, parse_date, parse_hours, ScheduleForm, ScheduleMode, DEFAULT_HOURS_PER_DAY,
    MIN_HOURS_PER_DAY,
};

use crate::api;
use crate::components::{InlineLoading, Notice, NoticeView};
use crate::state::use_session;

/// Modal dialog for one playlist.
///
/// `on_scheduled` runs exactly once per successful submit; the caller closes
/// the modal and reloads its list there.
#[component]
pub fn ScheduleModal(
    playlist: PlaylistSummary,
    on_close: Callback<()>,
    on_scheduled: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let today = chrono::Local::now().date_naive();

    let (mode, set_mode) = create_signal(ScheduleMode::ByHours);
    let (start, set_start) = create_signal(today.format("%Y-%m-%d").to_string());
    let (hours, set_hours) = create_signal(DEFAULT_HOURS_PER_DAY.to_string());
    let (target, set_target) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let title = modal_title(&playlist);
    let playlist_id = playlist.playlist_id.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_notice.set(None);

        let form = ScheduleForm {
            mode: mode.get_untracked(),
            start_date: parse_date(&start.get_untracked()),
            hours_per_day: parse_hours(&hours.get_untracked()),
            target_date: parse_date(&target.get_untracked()),
        };
        let request = match form.build(playlist_id.clone()) {
            Ok(request) => request,
            Err(e) => {
                set_notice.set(Some(Notice::error(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        let session = session.get_untracked();
        spawn_local(async move {
            let result = api::schedule(&session, &request).await;
            set_submitting.set(false);
            match result {
                Ok(()) => on_scheduled.call(()),
                Err(e) => set_notice.set(Some(Notice::error(e.user_message("Scheduling failed")))),
            }
        });
    };

    let mode_button = move |target_mode: ScheduleMode| {
        view! {
            <button
                type="button"
                class=move || {
                    if mode.get() == target_mode {
                        "flex-1 py-2 rounded-lg bg-violet-600 text-white font-medium"
                    } else {
                        "flex-1 py-2 rounded-lg bg-white/5 text-gray-300 hover:bg-white/10"
                    }
                }
                on:click=move |_| set_mode.set(target_mode)
            >
                {target_mode.label()}
            </button>
        }
    };

    view! {
        <div class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center px-4">
            <div class="bg-gray-800 border border-white/10 rounded-2xl shadow-2xl p-6 max-w-md w-full">
                <h2 class="text-xl font-semibold mb-1">{title}</h2>
                <p class="text-sm text-gray-400 mb-6 truncate">{playlist.title.clone()}</p>

                <div class="flex space-x-2 mb-6">
                    {mode_button(ScheduleMode::ByHours)}
                    {mode_button(ScheduleMode::ByDate)}
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <label class="block text-sm">
                        <span class="text-gray-300">"Start date"</span>
                        <input
                            type="date"
                            class="mt-1 w-full bg-white/5 rounded-lg px-4 py-2 outline-none focus:ring-2 focus:ring-violet-500"
                            prop:value=start
                            on:input=move |ev| set_start.set(event_target_value(&ev))
                        />
                    </label>

                    {move || match mode.get() {
                        ScheduleMode::ByHours => view! {
                            <label class="block text-sm">
                                <span class="text-gray-300">"Hours per day"</span>
                                <input
                                    type="number"
                                    step="0.5"
                                    min=MIN_HOURS_PER_DAY
                                    class="mt-1 w-full bg-white/5 rounded-lg px-4 py-2 outline-none focus:ring-2 focus:ring-violet-500"
                                    prop:value=hours
                                    on:input=move |ev| set_hours.set(event_target_value(&ev))
                                />
                            </label>
                        }.into_view(),
                        ScheduleMode::ByDate => view! {
                            <label class="block text-sm">
                                <span class="text-gray-300">"Finish by"</span>
                                <input
                                    type="date"
                                    class="mt-1 w-full bg-white/5 rounded-lg px-4 py-2 outline-none focus:ring-2 focus:ring-violet-500"
                                    prop:value=target
                                    on:input=move |ev| set_target.set(event_target_value(&ev))
                                />
                            </label>
                        }.into_view(),
                    }}

                    <NoticeView notice=notice />

                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            class="flex-1 py-2 rounded-lg bg-white/5 hover:bg-white/10"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 py-2 rounded-lg bg-violet-600 hover:bg-violet-700 disabled:bg-gray-600 font-semibold flex items-center justify-center space-x-2"
                        >
                            <Show when=move || submitting.get()>
                                <InlineLoading />
                            </Show>
                            <span>"Schedule"</span>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
