//! View models handed to the presentation layer.

use serde::Serialize;

use super::models::{BadgeTone, NeedRecord};
use crate::common::NeedId;

/// One need as rendered on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeedCard {
    pub id: NeedId,
    pub title: String,
    pub institution: String,
    pub category_label: &'static str,
    pub badge: BadgeTone,
    pub description: String,
    pub address: String,
    pub contact: String,
    pub created_on: String,
}

impl From<&NeedRecord> for NeedCard {
    fn from(record: &NeedRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            institution: record.institution.clone(),
            category_label: record.category.label(),
            badge: record.category.badge_tone(),
            description: record.description.clone(),
            address: record.address_line(),
            contact: record.contact.clone(),
            created_on: record.created_on_display(),
        }
    }
}

/// What the needs section shows. An empty filter result is its own state so
/// the page can say "no opportunities found" instead of rendering nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum NeedListing {
    Cards(Vec<NeedCard>),
    NoResults,
}

impl NeedListing {
    pub fn from_matches(matches: &[&NeedRecord]) -> Self {
        if matches.is_empty() {
            NeedListing::NoResults
        } else {
            NeedListing::Cards(matches.iter().map(|record| NeedCard::from(*record)).collect())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NeedListing::Cards(cards) => cards.len(),
            NeedListing::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NeedListing::NoResults)
    }
}
