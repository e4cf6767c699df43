//! The calendar-store seam and an in-memory store.

use std::collections::BTreeMap;
use std::convert::Infallible;

use tracing::debug;

use crate::event::{CalendarEvent, EventKey, UpsertOutcome};

/// A calendar store that can create-or-update events by key.
///
/// Implementations must be idempotent: upserting the same key and event
/// twice leaves one event and reports `Unchanged` the second time.
pub trait EventSink {
    type Error;

    fn upsert_event(
        &mut self,
        key: EventKey,
        event: CalendarEvent,
    ) -> Result<UpsertOutcome, Self::Error>;
}

/// Calendar held in a `BTreeMap`, ordered by (date, label).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendar {
    events: BTreeMap<EventKey, CalendarEvent>,
}

impl InMemoryCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &EventKey) -> Option<&CalendarEvent> {
        self.events.get(key)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EventKey, &CalendarEvent)> {
        self.events.iter()
    }
}

impl EventSink for InMemoryCalendar {
    type Error = Infallible;

    fn upsert_event(
        &mut self,
        key: EventKey,
        event: CalendarEvent,
    ) -> Result<UpsertOutcome, Infallible> {
        let outcome = match self.events.get(&key) {
            None => UpsertOutcome::Created,
            Some(existing) if *existing == event => UpsertOutcome::Unchanged,
            Some(_) => UpsertOutcome::Updated,
        };
        debug!(%key, ?outcome, "upsert");
        if outcome != UpsertOutcome::Unchanged {
            self.events.insert(key, event);
        }
        Ok(outcome)
    }
}
