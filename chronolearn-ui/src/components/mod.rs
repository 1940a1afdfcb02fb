//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod schedule_modal;
pub mod toast;

pub use loading::{CardSkeleton, InlineLoading, Loading};
pub use nav::Nav;
pub use schedule_modal::ScheduleModal;
pub use toast::{Notice, NoticeView, SuccessModal, Tone};
