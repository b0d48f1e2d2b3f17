//! In-memory event store.
//!
//! Events live for the lifetime of the process only. The store is owned
//! explicitly and shared through `Arc`; a single `Mutex` serializes every
//! mutation so id assignment and removal are atomic.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::error::{EvtagError, Result};
use crate::types::{Event, EventInput, Tag};

#[derive(Debug, Default)]
struct StoreInner {
    /// Keyed by id. Ids only grow, so key order is creation order.
    events: BTreeMap<u64, Event>,
    /// Highest id ever assigned; ids are not reused after deletion.
    last_id: u64,
}

/// Process-lifetime store of event records.
#[derive(Debug, Default)]
pub struct EventStore {
    inner: Mutex<StoreInner>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| EvtagError::Storage(format!("Event store lock poisoned: {}", e)))
    }

    /// Assign the next id, store the event and return the stored record.
    pub fn insert(&self, input: EventInput, tags: Vec<Tag>) -> Result<Event> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let event = Event::from_input(inner.last_id, input, tags);
        inner.events.insert(event.id, event.clone());
        info!(event_id = event.id, tags = ?event.tags, "Event created");
        Ok(event)
    }

    /// All events in creation order.
    pub fn list(&self) -> Result<Vec<Event>> {
        Ok(self.lock()?.events.values().cloned().collect())
    }

    pub fn get(&self, id: u64) -> Result<Option<Event>> {
        Ok(self.lock()?.events.get(&id).cloned())
    }

    pub fn contains(&self, id: u64) -> Result<bool> {
        Ok(self.lock()?.events.contains_key(&id))
    }

    /// Overwrite title, date and description of an event and replace its tags.
    ///
    /// Returns `EvtagError::EventNotFound` and leaves the store untouched if
    /// no event has this id.
    pub fn update(&self, id: u64, input: EventInput, tags: Vec<Tag>) -> Result<Event> {
        let mut inner = self.lock()?;
        let event = inner
            .events
            .get_mut(&id)
            .ok_or(EvtagError::EventNotFound { id })?;
        event.title = input.title;
        event.date = input.date;
        event.desc = input.desc;
        event.tags = tags;
        info!(event_id = id, tags = ?event.tags, "Event updated");
        Ok(event.clone())
    }

    /// Remove an event. Returns whether a record was actually removed.
    pub fn remove(&self, id: u64) -> Result<bool> {
        let removed = self.lock()?.events.remove(&id).is_some();
        if removed {
            info!(event_id = id, "Event deleted");
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.events.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.events.is_empty())
    }
}
