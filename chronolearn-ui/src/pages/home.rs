//! Home Page
//!
//! Landing page: hero with a call to action, the feature list and the
//! author panel.

use leptos::*;
use leptos_router::*;

use chronolearn::nav::FEATURES_ANCHOR;
use chronolearn::route::Route;

const FEATURES: [(&str, &str, &str); 7] = [
    (
        "🎬",
        "YouTube Playlist Input",
        "Accept any playlist URL and extract video data using YouTube API.",
    ),
    (
        "🧠",
        "Smart Scheduling",
        "Choose between “X hours per day” or “Finish by date” to auto-generate schedule.",
    ),
    ("📅", "Calendar View", "Visual display of scheduled videos by date."),
    (
        "✅",
        "Progress Tracking",
        "Mark videos as Not Started, In Progress or Completed.",
    ),
    (
        "🔥",
        "Streak Tracker",
        "See how many consecutive days you’ve stayed on track.",
    ),
    (
        "📊",
        "Completion Analytics",
        "View percentage progress, total watch time, and remaining time and much more.",
    ),
    (
        "🗂",
        "User Dashboard",
        "Overview of all playlists and their progress.",
    ),
];

const CONTACTS: [(&str, &str); 4] = [
    ("Portfolio", "https://harshitabisht-portfolio.netlify.app/"),
    ("LinkedIn", "https://www.linkedin.com/in/harshitabisht0511"),
    ("GitHub", "https://github.com/harshitabisht05"),
    (
        "Email",
        "https://mail.google.com/mail/?view=cm&fs=1&to=harshitabisht0515@gmail.com",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div>
            // Hero
            <section class="min-h-[80vh] flex flex-col md:flex-row items-center justify-between px-6 md:px-16 lg:px-24 py-10 gap-10">
                <div class="flex flex-col items-start w-full md:w-1/2 gap-5">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-extrabold">
                        "Track Your YouTube"<br />"Learning"
                    </h1>
                    <button
                        class="inline-flex items-center gap-2 px-6 py-2 bg-white/10 hover:bg-white/20 rounded-full font-semibold ring-1 ring-white/10 transition-colors"
                        on:click=move |_| navigate(&Route::Login.path(), Default::default())
                    >
                        "Get Started →"
                    </button>
                    <p class="text-lg text-white/80 max-w-xl">
                        "“"<span class="text-violet-400">"Chrono"</span>"” (time) + “"
                        <span class="text-violet-400">"Learn"</span>"” = time-based learning."
                    </p>
                    <p class="text-lg text-white/80 max-w-xl">
                        "Generate a personalized study calendar from any YouTube playlist and stay consistent every day."
                    </p>
                </div>
                <div class="w-full md:w-1/2 flex justify-center">
                    <video
                        src="/images/demo.mp4"
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                        class="w-full max-w-xl rounded-2xl shadow-lg"
                    />
                </div>
            </section>

            <Features />
            <CreatedBy />
        </div>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="px-6 md:px-16 lg:px-24 py-16">
            <h2 class="text-3xl font-bold mb-10 text-center">
                "Why "<span class="text-violet-400">"ChronoLearn"</span>"?"
            </h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES.iter().map(|(icon, title, description)| view! {
                    <div class="bg-white/5 border border-white/10 rounded-2xl p-6">
                        <div class="text-3xl mb-3">{*icon}</div>
                        <h3 class="text-lg font-semibold mb-2">{*title}</h3>
                        <p class="text-white/80 text-sm">{*description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CreatedBy() -> impl IntoView {
    view! {
        <section class="px-6 md:px-16 lg:px-24 py-16">
            <div class="max-w-3xl mx-auto bg-white/5 border border-white/10 rounded-3xl p-8 flex flex-col md:flex-row items-center gap-8">
                <img
                    src="/images/harshita.jpg"
                    alt="Harshita Bisht"
                    class="w-32 h-32 rounded-full object-cover"
                />
                <div>
                    <p class="text-sm text-white/60">"Created by"</p>
                    <h3 class="text-2xl font-bold mb-4">"Harshita Bisht"</h3>
                    <p class="text-sm text-white/60 mb-2">"Contact Info"</p>
                    <div class="flex flex-wrap gap-3">
                        {CONTACTS.iter().map(|(label, href)| view! {
                            <a
                                href=*href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-3 py-1 rounded-full bg-white/10 hover:bg-white/20 text-sm"
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
