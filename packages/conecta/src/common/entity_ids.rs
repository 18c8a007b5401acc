//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for registered needs (volunteer opportunities).
pub struct Need;

/// Typed ID for Need entities.
pub type NeedId = Id<Need>;
