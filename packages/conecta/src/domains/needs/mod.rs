pub mod data;
pub mod models;
pub mod registry;
pub mod search;
pub mod validation;
pub mod views;

pub use models::{BadgeTone, HelpCategory, NeedRecord};
pub use registry::{NeedRegistry, RegistryError};
pub use search::{filter, NeedQuery};
pub use validation::{
    validate, validate_at, FieldIssue, FormField, IssueKind, NeedForm, ValidationError,
};
pub use views::{NeedCard, NeedListing};
