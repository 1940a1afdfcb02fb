//! ChronoLearn Web App
//!
//! Turn a YouTube playlist into a day-by-day study calendar and track
//! progress through it, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Scheduling, streaks and progress are computed by the backend;
//! pages talk to it over HTTP and keep only view state. Page logic that does
//! not touch the DOM lives in the `chronolearn` crate so it is tested natively.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
