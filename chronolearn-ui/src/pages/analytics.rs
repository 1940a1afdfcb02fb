//! Analytics Page
//!
//! Panels render independently: a failed endpoint hides its own panel and
//! the page shows one banner for all failures.

use leptos::*;
use leptos_router::*;

use chronolearn::analytics::{format_seconds, AnalyticsBundle, PieSlices};
use chronolearn::model::{Id, Progress, Streak, WatchTime};
use chronolearn::route::Route;
use chronolearn::session::Session;

use crate::api;
use crate::components::{CardSkeleton, Notice, NoticeView};
use crate::pages::{playlist_param, protected};

#[component]
pub fn Analytics() -> impl IntoView {
    match protected() {
        Ok(session) => view! { <AnalyticsPanels session=session playlist_id=playlist_param() /> }.into_view(),
        Err(redirect) => redirect,
    }
}

#[component]
fn AnalyticsPanels(session: Session, playlist_id: Id) -> impl IntoView {
    let bundle = create_rw_signal(None::<AnalyticsBundle>);

    {
        let playlist_id = playlist_id.clone();
        spawn_local(async move {
            let loaded = api::fetch_analytics(&session, &playlist_id).await;
            bundle.set(Some(loaded));
        });
    }

    let banner = Signal::derive(move || {
        bundle.with(|b| b.as_ref().and_then(AnalyticsBundle::banner).map(Notice::error))
    });
    let back_path = Route::playlist(&playlist_id).path();

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">
                    {move || bundle.with(|b| {
                        b.as_ref()
                            .and_then(|b| b.info.as_ref().ok())
                            .map(|info| info.title.clone())
                            .unwrap_or_else(|| "Playlist Analytics".to_string())
                    })}
                </h1>
                <A href=back_path class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20 text-sm">
                    "Back to videos"
                </A>
            </div>

            <NoticeView notice=banner />

            {move || match bundle.get() {
                None => view! { <CardSkeleton count=4 /> }.into_view(),
                Some(b) => view! {
                    <div class="grid md:grid-cols-2 gap-6 mt-4">
                        {b.progress.ok().map(|p| view! { <ProgressPanel progress=p /> })}
                        {b.watch_time.ok().map(|w| view! { <WatchTimePanel watch_time=w /> })}
                        {b.streak.ok().map(|s| view! { <StreakPanel streak=s /> })}
                        {b.chart.as_ref().ok().map(|c| view! { <PiePanel slices=PieSlices::from(c) /> })}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Panel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl p-6">
            <h2 class="text-sm uppercase tracking-wide text-white/60 mb-4">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
fn ProgressPanel(progress: Progress) -> impl IntoView {
    let width = format!("width: {:.0}%", progress.percentage.clamp(0.0, 100.0));
    view! {
        <Panel title="Progress">
            <p class="text-4xl font-bold">{format!("{:.1}%", progress.percentage)}</p>
            <p class="text-sm text-white/70 mt-1">
                {format!("{} of {} videos completed", progress.completed, progress.total_videos)}
            </p>
            <div class="w-full bg-white/10 rounded-full h-2 mt-4">
                <div class="bg-violet-500 h-2 rounded-full" style=width />
            </div>
        </Panel>
    }
}

#[component]
fn WatchTimePanel(watch_time: WatchTime) -> impl IntoView {
    let rows = [
        ("Total", watch_time.total_time_sec),
        ("Watched", watch_time.completed_sec),
        ("Remaining", watch_time.remaining_sec),
    ];
    view! {
        <Panel title="Watch Time">
            <dl class="space-y-2">
                {rows.into_iter().map(|(label, secs)| view! {
                    <div class="flex justify-between">
                        <dt class="text-white/70">{label}</dt>
                        <dd class="font-mono">{format_seconds(secs)}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </Panel>
    }
}

#[component]
fn StreakPanel(streak: Streak) -> impl IntoView {
    view! {
        <Panel title="Streak">
            <div class="flex gap-8">
                <div>
                    <p class="text-4xl font-bold">{streak.current_streak}</p>
                    <p class="text-sm text-white/70">"Current (days)"</p>
                </div>
                <div>
                    <p class="text-4xl font-bold">{streak.max_streak}</p>
                    <p class="text-sm text-white/70">"Longest (days)"</p>
                </div>
            </div>
        </Panel>
    }
}

#[component]
fn PiePanel(slices: PieSlices) -> impl IntoView {
    let style = format!(
        "background: conic-gradient(#8b5cf6 0deg {deg:.1}deg, rgba(255,255,255,0.1) {deg:.1}deg 360deg)",
        deg = slices.completed_degrees()
    );
    view! {
        <Panel title="Completion">
            <div class="flex items-center gap-6">
                <div class="w-32 h-32 rounded-full" style=style />
                <ul class="text-sm space-y-1">
                    <li>
                        <span class="inline-block w-3 h-3 rounded-sm bg-violet-500 mr-2" />
                        {format!("Completed: {}", slices.completed)}
                    </li>
                    <li>
                        <span class="inline-block w-3 h-3 rounded-sm bg-white/10 mr-2" />
                        {format!("Remaining: {}", slices.remaining)}
                    </li>
                </ul>
            </div>
        </Panel>
    }
}
