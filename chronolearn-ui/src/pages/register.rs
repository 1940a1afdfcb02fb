//! Register Page

use leptos::*;
use leptos_router::*;

use chronolearn::model::Credentials;
use chronolearn::route::Route;

use crate::api;
use crate::components::{InlineLoading, Notice, NoticeView};
use crate::pages::login::AuthLayout;

/// Delay between the success message and the redirect to the login page
const REDIRECT_MS: u32 = 2000;

#[component]
pub fn Register() -> impl IntoView {
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
            match api::register(&credentials).await {
                Ok(()) => {
                    set_notice.set(Some(Notice::success(
                        "Registration successful! Please log in.",
                    )));
                    gloo_timers::callback::Timeout::new(REDIRECT_MS, move || {
                        navigate(&Route::Login.path(), Default::default());
                    })
                    .forget();
                }
                Err(e) => {
                    set_notice.set(Some(Notice::from_api(&e, "Registration failed.")));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <AuthLayout title="Create Account" subtitle="Start turning playlists into a study plan">
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
                    <span>"Register"</span>
                </button>
            </form>

            <div class="mt-4">
                <NoticeView notice=notice />
            </div>

            <p class="mt-6 text-sm text-white/70">
                "Already have an account? "
                <A href="/login" class="text-violet-400 hover:underline">"Log in"</A>
            </p>
        </AuthLayout>
    }
}
