//! Boundary between the window calculation and a calendar store.
//!
//! The store itself (accounts, network, persistence) lives outside this
//! workspace behind [`EventSink`]. This crate turns one day's windows into
//! events keyed by (date, window label) and upserts them, so a scheduler
//! can re-run a day as often as it likes.

pub mod event;
pub mod sink;
pub mod sync;

pub use event::{CalendarEvent, EventKey, UpsertOutcome};
pub use sink::{EventSink, InMemoryCalendar};
pub use sync::{SyncError, SyncReport, build_events, sync_day, tomorrow_in};
