//! Calendar Page

use chrono::NaiveDate;
use leptos::*;
use leptos_router::*;

use chronolearn::calendar::{CalendarView, DaySelection, Month, EMPTY_DAY_MESSAGE};
use chronolearn::import::format_duration;
use chronolearn::model::Id;
use chronolearn::route::Route;
use chronolearn::session::Session;

use crate::api;
use crate::components::{Loading, Notice, NoticeView};
use crate::pages::{playlist_param, protected};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn Calendar() -> impl IntoView {
    match protected() {
        Ok(session) => view! { <ScheduleCalendar session=session playlist_id=playlist_param() /> }.into_view(),
        Err(redirect) => redirect,
    }
}

#[component]
fn ScheduleCalendar(session: Session, playlist_id: Id) -> impl IntoView {
    let today = chrono::Local::now().date_naive();

    let calendar = create_rw_signal(CalendarView::default());
    let month = create_rw_signal(Month::of(today));
    let selected = create_rw_signal(None::<NaiveDate>);
    let (loading, set_loading) = create_signal(true);
    let (notice, set_notice) = create_signal(None::<Notice>);

    {
        let playlist_id = playlist_id.clone();
        spawn_local(async move {
            match api::fetch_calendar(&session, &playlist_id).await {
                Ok(entries) => {
                    let view = CalendarView::new(entries);
                    if let Some(first) = view.first_month() {
                        month.set(first);
                    }
                    calendar.set(view);
                }
                Err(e) => set_notice.set(Some(Notice::error(e.user_message("Failed to load calendar.")))),
            }
            set_loading.set(false);
        });
    }

    let back_path = Route::playlist(&playlist_id).path();

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">"Study Calendar"</h1>
                <A href=back_path class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20 text-sm">
                    "Back to videos"
                </A>
            </div>

            <NoticeView notice=notice />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="grid lg:grid-cols-3 gap-6 mt-4">
                    <div class="lg:col-span-2 bg-white/5 border border-white/10 rounded-2xl p-4">
                        <div class="flex items-center justify-between mb-4">
                            <button
                                class="px-3 py-1 rounded-lg hover:bg-white/10"
                                aria-label="Previous month"
                                on:click=move |_| month.update(|m| *m = m.prev())
                            >
                                "‹"
                            </button>
                            <h2 class="text-xl font-semibold">{move || month.get().title()}</h2>
                            <button
                                class="px-3 py-1 rounded-lg hover:bg-white/10"
                                aria-label="Next month"
                                on:click=move |_| month.update(|m| *m = m.next())
                            >
                                "›"
                            </button>
                        </div>

                        <div class="grid grid-cols-7 gap-1 text-center text-xs text-white/60 mb-1">
                            {WEEKDAYS.iter().map(|d| view! { <div>{*d}</div> }).collect_view()}
                        </div>
                        <div class="grid grid-cols-7 gap-1">
                            {move || {
                                month.get().grid().into_iter().flatten().map(|cell| match cell {
                                    Some(date) => view! {
                                        <DayTile date=date today=today calendar=calendar selected=selected />
                                    }.into_view(),
                                    None => view! { <div class="h-16" /> }.into_view(),
                                }).collect_view()
                            }}
                        </div>
                    </div>

                    <div class="bg-white/5 border border-white/10 rounded-2xl p-4">
                        <h2 class="text-lg font-semibold mb-3">
                            {move || selected.get()
                                .map(|d| d.format("%A, %B %-d").to_string())
                                .unwrap_or_else(|| "Pick a day".to_string())}
                        </h2>
                        {move || calendar.with(|c| match c.select(selected.get()) {
                            DaySelection::None => view! {
                                <p class="text-sm text-white/60">"Select a date to see its videos."</p>
                            }.into_view(),
                            DaySelection::Empty => view! {
                                <p class="text-sm text-white/60">{EMPTY_DAY_MESSAGE}</p>
                            }.into_view(),
                            DaySelection::Videos(videos) => view! {
                                <ul class="space-y-3">
                                    {videos.iter().map(|v| view! {
                                        <li class="bg-white/5 rounded-lg p-3">
                                            <a href=v.youtube_url.clone() target="_blank" class="text-sm font-medium hover:underline">
                                                {v.title.clone()}
                                            </a>
                                            <p class="text-xs text-white/60 mt-1">
                                                {format!("{} · {}", v.status, format_duration(v.duration_seconds))}
                                            </p>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_view(),
                        })}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DayTile(
    date: NaiveDate,
    today: NaiveDate,
    calendar: RwSignal<CalendarView>,
    selected: RwSignal<Option<NaiveDate>>,
) -> impl IntoView {
    let count = move || calendar.with(|c| c.video_count(date));
    let class = move || {
        let base = "h-16 rounded-lg p-1 text-left text-sm flex flex-col justify-between";
        if selected.get() == Some(date) {
            format!("{} bg-violet-600", base)
        } else if date == today {
            format!("{} bg-white/15 hover:bg-white/20", base)
        } else {
            format!("{} bg-white/5 hover:bg-white/10", base)
        }
    };

    view! {
        <button class=class on:click=move |_| selected.set(Some(date))>
            <span>{date.format("%-d").to_string()}</span>
            <Show when=move || count() > 0>
                <span class="self-end text-xs bg-violet-500/80 rounded-full px-2">{count}</span>
            </Show>
        </button>
    }
}
