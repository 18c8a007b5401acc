pub mod category;
pub mod need;

pub use category::{BadgeTone, HelpCategory, UnknownCategory, CATEGORY_BADGES};
pub use need::{NeedRecord, DISPLAY_DATE_FORMAT};
