// ConectaVoluntários - core
//
// In-memory registry of volunteer needs, search/filter, registration
// validation and postal code (CEP) address autofill. Presentation is left to
// the embedding application, which drives a `BoardRuntime` with events.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
