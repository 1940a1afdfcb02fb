//! State Management
//!
//! Session context shared by every page.

pub mod session;

pub use session::{provide_session, use_session, SessionState};
