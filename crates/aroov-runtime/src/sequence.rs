use std::cell::Cell;

/// Ticket handed out for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Latest-wins guard for overlapping requests.
///
/// Every request takes a ticket before suspending; when its response arrives
/// it is applied only if no newer ticket was issued in the meantime. Responses
/// may complete in any order, superseded ones are simply dropped.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    latest: Cell<u64>,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// The most recently issued ticket, without issuing a new one.
    pub fn current(&self) -> Ticket {
        Ticket(self.latest.get())
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.issue();
    }
}
