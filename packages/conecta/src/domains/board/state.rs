use std::collections::BTreeSet;

use crate::common::NeedId;
use crate::domains::locations::{LookupTracker, PostalCode};
use crate::domains::needs::{
    FormField, NeedForm, NeedListing, NeedQuery, NeedRecord, NeedRegistry, RegistryError,
    ValidationError,
};

/// Where the address autofill stands for the current postal code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddressStatus {
    #[default]
    Idle,
    Pending(PostalCode),
    Found(PostalCode),
    NotFound(PostalCode),
    /// The service could not be reached or answered garbage
    Failed(PostalCode),
}

/// Feedback for the last submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NeedRegistered(NeedId),
    ValidationFailed(ValidationError),
    /// The form was valid but the registry refused the record; the form is kept.
    RegistrationRefused(RegistryError),
}

/// Everything the page shows, owned by the board machine.
#[derive(Debug, Default)]
pub struct BoardState {
    pub registry: NeedRegistry,
    pub query: NeedQuery,
    pub form: NeedForm,
    /// Fields to highlight as invalid
    pub field_errors: BTreeSet<FormField>,
    pub address_status: AddressStatus,
    pub notice: Option<Notice>,
    pub(crate) lookups: LookupTracker,
}

impl BoardState {
    pub fn new(registry: NeedRegistry) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }

    /// Needs matching the current search and category, in registration order.
    pub fn matches(&self) -> Vec<&NeedRecord> {
        self.query.apply(self.registry.all())
    }

    pub fn listing(&self) -> NeedListing {
        NeedListing::from_matches(&self.matches())
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.field_errors.contains(&field)
    }
}
