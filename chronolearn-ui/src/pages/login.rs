//! Login Page

use leptos::*;
use leptos_router::*;

use chronolearn::model::Credentials;
use chronolearn::route::Route;
use chronolearn::session::Session;

use crate::api;
use crate::components::{InlineLoading, Notice, NoticeView};
use crate::state::use_session;

/// Delay between the success message and the redirect to the import page
const REDIRECT_MS: u32 = 1200;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);
        set_loading.set(true);

        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(response) => {
                    session.login(Session::new(
                        response.access_token,
                        response.users_id.map(|id| id.to_string()),
                    ));
                    set_notice.set(Some(Notice::success("Logged in successfully!")));

                    gloo_timers::callback::Timeout::new(REDIRECT_MS, move || {
                        set_loading.set(false);
                        navigate(&Route::Import.path(), Default::default());
                    })
                    .forget();
                }
                Err(e) => {
                    set_notice.set(Some(Notice::error(e.user_message("Login failed"))));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Welcome Back" subtitle="Log in to continue your learning schedule">
            <form on:submit=on_submit class="space-y-5">
                <input
                    type="email"
                    required=true
                    placeholder="Enter your email"
                    class="w-full bg-white/5 rounded-md px-4 py-3 outline-none placeholder-white/50 focus:ring-2 focus:ring-violet-500"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    required=true
                    placeholder="Enter your password"
                    class="w-full bg-white/5 rounded-md px-4 py-3 outline-none placeholder-white/50 focus:ring-2 focus:ring-violet-500"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full bg-violet-600 hover:bg-violet-700 disabled:bg-gray-600 rounded-md py-3 font-semibold flex items-center justify-center space-x-2 transition-colors"
                >
                    <Show when=move || loading.get()>
                        <InlineLoading />
                    </Show>
                    <span>"Log In"</span>
                </button>
            </form>

            <div class="mt-4">
                <NoticeView notice=notice />
            </div>

            <p class="mt-6 text-sm text-white/70">
                "Don't have an account? "
                <A href="/register" class="text-violet-400 hover:underline">"Create one"</A>
            </p>
        </AuthLayout>
    }
}

/// Two-column frame shared by the login and register pages
#[component]
pub fn AuthLayout(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-[80vh] flex flex-col md:flex-row">
            <div class="w-full md:w-1/2 p-4 sm:p-8 flex justify-center items-center">
                <video
                    src="/images/demo.mp4"
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    class="w-full max-h-[80vh] rounded-2xl shadow-lg object-cover"
                />
            </div>
            <div class="w-full md:w-1/2 flex justify-center items-center p-6 sm:p-10 md:p-16">
                <div class="w-full max-w-md bg-white/10 border border-white/20 rounded-3xl shadow-2xl px-6 py-10 sm:px-10">
                    <h2 class="text-2xl sm:text-3xl font-semibold mb-2">{title}</h2>
                    <p class="text-white/70 text-sm mb-8">{subtitle}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}
