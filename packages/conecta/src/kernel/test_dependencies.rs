// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into BoardDeps for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseAddressLookup, BoardDeps};
use crate::domains::locations::{AddressFields, AddressLookupResult, LookupError, PostalCode};

// =============================================================================
// Mock Address Lookup
// =============================================================================

/// Replays canned outcomes per postal code and records every call.
///
/// Codes without a canned outcome resolve to `NotFound`.
#[derive(Clone, Default)]
pub struct MockAddressLookup {
    outcomes: Arc<Mutex<HashMap<String, Result<AddressLookupResult, LookupError>>>>,
    calls: Arc<Mutex<Vec<PostalCode>>>,
}

impl MockAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(self, postal_code: &str, address: AddressFields) -> Self {
        self.outcomes.lock().unwrap().insert(
            postal_code.to_string(),
            Ok(AddressLookupResult::Found(address)),
        );
        self
    }

    pub fn with_failure(self, postal_code: &str, error: LookupError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(postal_code.to_string(), Err(error));
        self
    }

    /// Postal codes looked up so far, in call order.
    pub fn calls(&self) -> Vec<PostalCode> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_deps(self) -> BoardDeps {
        BoardDeps::new(Arc::new(self))
    }
}

#[async_trait]
impl BaseAddressLookup for MockAddressLookup {
    async fn lookup(&self, postal_code: &PostalCode) -> Result<AddressLookupResult, LookupError> {
        self.calls.lock().unwrap().push(postal_code.clone());
        self.outcomes
            .lock()
            .unwrap()
            .get(postal_code.as_str())
            .cloned()
            .unwrap_or(Ok(AddressLookupResult::NotFound))
    }
}
