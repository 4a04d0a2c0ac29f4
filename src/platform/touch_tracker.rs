//=========================================================================
// Touch Tracker
//=========================================================================
//
// Winit reports one contact per `Touch` event. The bridge wants every
// active contact per event, the way a mobile motion event carries them.
// This tracker keeps the set of active contacts and emits a full
// snapshot for each incoming touch.
//
// Phase handling:
//   Started   → append contact
//   Moved     → update contact (append if unseen)
//   Ended     → update, snapshot still includes it, then remove
//   Cancelled → same as Ended
//
// Contacts keep first-down order, so indices shift when an earlier
// contact lifts. Indices are not identities.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::event::TouchPhase;

//=== Internal Dependencies ===============================================

use crate::core::{Pointer, PointerSnapshot};

//=== Contact =============================================================

#[derive(Debug, Clone, Copy)]
struct Contact {
    id: u64,
    pointer: Pointer,
}

//=== TouchTracker ========================================================

#[derive(Debug, Default)]
pub(crate) struct TouchTracker {
    contacts: Vec<Contact>,
}

impl TouchTracker {
    pub(crate) fn new() -> Self {
        Self {
            contacts: Vec::with_capacity(10),
        }
    }

    //--- apply() ----------------------------------------------------------

    /// Applies one contact update and returns the resulting snapshot.
    pub(crate) fn apply(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f32,
        y: f32,
    ) -> PointerSnapshot {
        let pointer = Pointer::new(x, y);

        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.upsert(id, pointer);
                self.snapshot()
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.upsert(id, pointer);
                let snapshot = self.snapshot();
                self.contacts.retain(|c| c.id != id);
                snapshot
            }
        }
    }

    /// Forgets all contacts (host lost focus, touches are void).
    pub(crate) fn clear(&mut self) {
        if !self.contacts.is_empty() {
            trace!(
                target: "platform::input",
                "Dropping {} active contact(s)",
                self.contacts.len()
            );
        }
        self.contacts.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.contacts.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn upsert(&mut self, id: u64, pointer: Pointer) {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => contact.pointer = pointer,
            None => self.contacts.push(Contact { id, pointer }),
        }
    }

    fn snapshot(&self) -> PointerSnapshot {
        self.contacts.iter().map(|c| c.pointer).collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
