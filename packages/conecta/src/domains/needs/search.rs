use serde::{Deserialize, Serialize};

use super::models::{HelpCategory, NeedRecord};

/// Live search box and category filter state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedQuery {
    pub text: String,
    pub category: Option<HelpCategory>,
}

impl NeedQuery {
    pub fn apply<'a>(&self, records: &'a [NeedRecord]) -> Vec<&'a NeedRecord> {
        filter(records, &self.text, self.category)
    }
}

/// Records whose title, description or institution contains `query`
/// (case-insensitive), restricted to `category` when given. Input order is kept.
pub fn filter<'a>(
    records: &'a [NeedRecord],
    query: &str,
    category: Option<HelpCategory>,
) -> Vec<&'a NeedRecord> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| category.map_or(true, |wanted| record.category == wanted))
        .filter(|record| needle.is_empty() || matches_text(record, &needle))
        .collect()
}

fn matches_text(record: &NeedRecord, needle: &str) -> bool {
    [&record.title, &record.description, &record.institution]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
