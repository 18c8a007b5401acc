//! Board dependencies for effects (using traits for testability)

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use viacep::{ViaCepClient, ViaCepError};

use crate::domains::locations::{AddressFields, AddressLookupResult, LookupError, PostalCode};
use crate::kernel::BaseAddressLookup;

// =============================================================================
// ViaCepClient Adapter (implements BaseAddressLookup trait)
// =============================================================================

/// Wrapper around ViaCepClient that implements BaseAddressLookup trait
pub struct ViaCepAdapter(pub Arc<ViaCepClient>);

impl ViaCepAdapter {
    pub fn new(client: Arc<ViaCepClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseAddressLookup for ViaCepAdapter {
    async fn lookup(&self, postal_code: &PostalCode) -> Result<AddressLookupResult, LookupError> {
        let result = self
            .0
            .lookup(&postal_code.digits())
            .await
            .map_err(into_lookup_error)?;

        debug!(postal_code = %postal_code, found = result.is_some(), "ViaCEP answered");

        Ok(match result {
            Some(address) => AddressLookupResult::Found(AddressFields {
                street: address.street,
                neighborhood: address.neighborhood,
                city: address.city,
                state: address.state,
            }),
            None => AddressLookupResult::NotFound,
        })
    }
}

fn into_lookup_error(err: ViaCepError) -> LookupError {
    match err {
        ViaCepError::Timeout(_) => LookupError::Timeout,
        ViaCepError::Api { .. } | ViaCepError::Parse(_) => {
            LookupError::InvalidResponse(err.to_string())
        }
        ViaCepError::Network(_) => LookupError::Network(err.to_string()),
        // The request never left this process.
        ViaCepError::InvalidCep(_) | ViaCepError::Config(_) => {
            LookupError::Internal(err.to_string())
        }
    }
}

// =============================================================================
// BoardDeps
// =============================================================================

/// Board dependencies accessible to effects
#[derive(Clone)]
pub struct BoardDeps {
    pub address_lookup: Arc<dyn BaseAddressLookup>,
}

impl BoardDeps {
    pub fn new(address_lookup: Arc<dyn BaseAddressLookup>) -> Self {
        Self { address_lookup }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viacep_errors_map_to_transport_classes() {
        assert_eq!(
            into_lookup_error(ViaCepError::Timeout(std::time::Duration::from_secs(5))),
            LookupError::Timeout
        );
        assert!(matches!(
            into_lookup_error(ViaCepError::Parse("bad".into())),
            LookupError::InvalidResponse(_)
        ));
        assert!(matches!(
            into_lookup_error(ViaCepError::Api {
                status: 400,
                body: String::new()
            }),
            LookupError::InvalidResponse(_)
        ));
        assert!(matches!(
            into_lookup_error(ViaCepError::Network("refused".into())),
            LookupError::Network(_)
        ));
    }

    #[test]
    fn local_faults_are_not_reported_as_network() {
        assert!(matches!(
            into_lookup_error(ViaCepError::InvalidCep("123".into())),
            LookupError::Internal(_)
        ));
        assert!(matches!(
            into_lookup_error(ViaCepError::Config("no tls backend".into())),
            LookupError::Internal(_)
        ));
    }
}
