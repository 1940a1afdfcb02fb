//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for playlist cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white/5 rounded-2xl p-4">
                    <div class="h-36 bg-white/10 rounded-xl mb-4" />
                    <div class="h-5 bg-white/10 rounded w-2/3 mb-3" />
                    <div class="h-2 bg-white/10 rounded w-full" />
                </div>
            }).collect_view()}
        </div>
    }
}
