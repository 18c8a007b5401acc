// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseAddressLookup)

use async_trait::async_trait;

use crate::domains::locations::{AddressLookupResult, LookupError, PostalCode};

// =============================================================================
// Address Lookup Trait (Infrastructure - postal code to address)
// =============================================================================

#[async_trait]
pub trait BaseAddressLookup: Send + Sync {
    /// Resolve a well-formed postal code.
    ///
    /// `Ok(NotFound)` means the service answered and does not know the code;
    /// `Err` means no usable answer came back at all.
    async fn lookup(&self, postal_code: &PostalCode) -> Result<AddressLookupResult, LookupError>;
}
