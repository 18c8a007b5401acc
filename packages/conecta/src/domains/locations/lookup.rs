use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PostalCode;

/// Address fields resolved for a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Outcome of a lookup that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressLookupResult {
    Found(AddressFields),
    /// Well-formed code the service does not know.
    NotFound,
}

/// The lookup never produced an answer. Every variant is a transport failure
/// from the user's point of view; they differ only in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("postal lookup network failure: {0}")]
    Network(String),

    #[error("postal lookup timed out")]
    Timeout,

    #[error("postal lookup returned an unusable response: {0}")]
    InvalidResponse(String),

    /// Local fault: the request could not be built or the lookup task died.
    #[error("postal lookup could not run: {0}")]
    Internal(String),
}

/// A dispatched lookup. Results are only applied while the ticket is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub postal_code: PostalCode,
}

/// Tracks which lookup, if any, the postal code field is waiting on.
///
/// Every edit of the field bumps the generation, so a response for a code the
/// user has since changed no longer matches and is dropped.
#[derive(Debug, Default)]
pub struct LookupTracker {
    generation: u64,
    pending: Option<LookupTicket>,
}

impl LookupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede whatever is in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Issue a ticket for a new lookup, superseding any earlier one.
    pub fn begin(&mut self, postal_code: PostalCode) -> LookupTicket {
        self.invalidate();
        let ticket = LookupTicket {
            generation: self.generation,
            postal_code,
        };
        self.pending = Some(ticket.clone());
        ticket
    }

    pub fn is_current(&self, ticket: &LookupTicket) -> bool {
        self.pending.as_ref() == Some(ticket)
    }

    /// Consume the pending ticket if `ticket` is the current one.
    pub fn complete(&mut self, ticket: &LookupTicket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<&LookupTicket> {
        self.pending.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
