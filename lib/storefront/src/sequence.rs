/// Position of a request in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out tickets in submission order and decides whether a completed
/// request may still touch page state.
///
/// Only the most recently issued ticket is applicable. Anything older was
/// superseded by a later submission and its response is dropped, whatever
/// order the responses arrive in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestSequencer {
    issued: u64,
    applied: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued && self.applied.is_none_or(|applied| ticket.0 > applied)
    }

    /// Marks `ticket` as applied. Returns false, and changes nothing, when the
    /// ticket is stale.
    pub fn try_apply(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied = Some(ticket.0);
        true
    }
}
