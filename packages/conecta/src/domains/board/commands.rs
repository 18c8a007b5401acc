use crate::domains::locations::LookupTicket;

/// Board commands - intent for IO decided by the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Resolve the ticket's postal code with the address lookup service
    LookupAddress(LookupTicket),
}
