use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HelpCategory;
use crate::common::NeedId;
use crate::domains::locations::PostalCode;

/// pt-BR calendar date, e.g. `07/03/2025`.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// A registered volunteer opportunity.
///
/// Only built by the registration validator; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedRecord {
    pub id: NeedId,
    pub institution: String,
    pub category: HelpCategory,
    pub title: String,
    pub description: String,
    pub postal_code: PostalCode,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub created_on: NaiveDate,
}

impl NeedRecord {
    pub fn created_on_display(&self) -> String {
        self.created_on.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// `Street, Neighborhood - City/ST`
    pub fn address_line(&self) -> String {
        format!(
            "{}, {} - {}/{}",
            self.street, self.neighborhood, self.city, self.state
        )
    }
}
