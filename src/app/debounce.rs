//! Per-field debounce bookkeeping.
//!
//! Zellij timers cannot be cancelled once armed, and a `Timer` event does not
//! say which request it answers. Every schedule therefore hands out a ticket,
//! and tickets are queued in arming order. All tickets share one delay, so
//! timers elapse in the same order and each `Timer` event settles the oldest
//! ticket. A ticket only fires if it is still its field's pending ticket;
//! anything superseded or cancelled is dropped without effect.

use crate::domain::FieldId;
use std::collections::{BTreeMap, VecDeque};

/// One armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub field: FieldId,
    pub id: u64,
}

/// Tracks at most one pending recomputation per field.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    next_id: u64,
    pending: BTreeMap<FieldId, u64>,
    armed: VecDeque<Ticket>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a new ticket for `field`, superseding any pending one.
    pub fn schedule(&mut self, field: FieldId) -> Ticket {
        self.next_id += 1;
        let ticket = Ticket {
            field,
            id: self.next_id,
        };

        if let Some(previous) = self.pending.insert(field, ticket.id) {
            tracing::trace!(field = ?field, superseded = previous, "debounce restarted");
        }
        self.armed.push_back(ticket);
        ticket
    }

    /// Cancels the pending ticket for `field`, if any.
    pub fn cancel(&mut self, field: FieldId) -> bool {
        self.pending.remove(&field).is_some()
    }

    /// Cancels every pending ticket.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(cancelled = self.pending.len(), "debounce cancelled");
        }
        self.pending.clear();
    }

    /// Settles the oldest armed ticket.
    ///
    /// Returns the field to re-validate, or `None` if the ticket was superseded,
    /// cancelled, or no ticket was armed.
    pub fn elapse(&mut self) -> Option<FieldId> {
        let ticket = self.armed.pop_front()?;
        if self.pending.get(&ticket.field) == Some(&ticket.id) {
            self.pending.remove(&ticket.field);
            Some(ticket.field)
        } else {
            tracing::trace!(field = ?ticket.field, ticket = ticket.id, "stale debounce ticket dropped");
            None
        }
    }

    #[must_use]
    pub fn is_pending(&self, field: FieldId) -> bool {
        self.pending.contains_key(&field)
    }

    /// Number of armed timers that have not elapsed yet, stale ones included.
    #[must_use]
    pub fn armed_len(&self) -> usize {
        self.armed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut d = Debouncer::new();
        d.schedule(FieldId::Email);
        d.schedule(FieldId::Email);
        d.schedule(FieldId::Email);

        assert_eq!(d.elapse(), None);
        assert_eq!(d.elapse(), None);
        assert_eq!(d.elapse(), Some(FieldId::Email));
        assert!(!d.is_pending(FieldId::Email));
        assert_eq!(d.elapse(), None);
    }

    #[test]
    fn fields_debounce_independently() {
        let mut d = Debouncer::new();
        d.schedule(FieldId::Email);
        d.schedule(FieldId::Password);

        assert_eq!(d.elapse(), Some(FieldId::Email));
        assert_eq!(d.elapse(), Some(FieldId::Password));
    }

    #[test]
    fn cancel_drops_pending_ticket() {
        let mut d = Debouncer::new();
        d.schedule(FieldId::Password);
        assert!(d.cancel(FieldId::Password));
        assert!(!d.cancel(FieldId::Password));
        assert_eq!(d.elapse(), None);
    }

    #[test]
    fn cancel_all_then_reschedule() {
        let mut d = Debouncer::new();
        d.schedule(FieldId::Email);
        d.schedule(FieldId::Password);
        d.cancel_all();
        d.schedule(FieldId::Email);
        assert_eq!(d.armed_len(), 3);

        assert_eq!(d.elapse(), None);
        assert_eq!(d.elapse(), None);
        assert_eq!(d.elapse(), Some(FieldId::Email));
    }
}
