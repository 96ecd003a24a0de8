//! # Skrolla Host
//!
//! The seam between **Skrolla** widgets and whatever runtime displays them: an in-process
//! element sink with per-session, handle-keyed storage, a repeating ticker facility and the
//! scroll-position source trait.

#![deny(rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub use self::{
    scroll::{FixedScroll, RandomScroll, ScrollSource},
    store::{ElementId, Host, SessionId},
    timer::{Repeat, Ticker},
};

mod scroll;
mod store;
mod timer;

/// Errors that can occur when adding elements to a [`Host`].
///
/// Teardown-path operations (element removal, anchor updates, closing a session) have no
/// error path: against a closed session or a stale handle they are silent no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The session was closed, or never existed.
    #[error("the session is closed")]
    SessionClosed,
    /// The parent to attach an element under is gone.
    #[error("the parent element does not exist")]
    UnknownParent,
}
