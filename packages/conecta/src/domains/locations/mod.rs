pub mod lookup;
pub mod postal_code;

pub use lookup::{AddressFields, AddressLookupResult, LookupError, LookupTicket, LookupTracker};
pub use postal_code::{
    completed_postal_code, is_masked_postal_code, mask_postal_input, MalformedPostalCode,
    PostalCode,
};
