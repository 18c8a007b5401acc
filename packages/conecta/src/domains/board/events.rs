use crate::domains::locations::{AddressLookupResult, LookupError, LookupTicket};
use crate::domains::needs::{FormField, HelpCategory};

/// Board events. Immutable facts: what the visitor did, or what came back
/// from the postal lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    // =========================================================================
    // Browsing
    // =========================================================================
    /// Search box changed (every keystroke)
    SearchChanged(String),

    /// Category filter changed; `None` means "all categories"
    CategoryChanged(Option<HelpCategory>),

    // =========================================================================
    // Registration form
    // =========================================================================
    /// Any form field other than the postal code was edited
    FieldEdited { field: FormField, value: String },

    /// Raw keystrokes in the postal code field, before masking
    PostalCodeEdited(String),

    /// Visitor pressed "Cadastrar"
    SubmitRequested,

    // =========================================================================
    // Lookup completions
    // =========================================================================
    AddressResolved {
        ticket: LookupTicket,
        outcome: Result<AddressLookupResult, LookupError>,
    },
}
