use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of help a need asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpCategory {
    #[serde(rename = "educacao")]
    Education,
    #[serde(rename = "saude")]
    Health,
    #[serde(rename = "meio-ambiente")]
    Environment,
    #[serde(rename = "doacao-alimentos")]
    FoodDonation,
    #[serde(rename = "doacao-roupas")]
    ClothingDonation,
    #[serde(rename = "outros")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown help category: {0:?}")]
pub struct UnknownCategory(pub String);

impl HelpCategory {
    pub const ALL: [HelpCategory; 6] = [
        HelpCategory::Education,
        HelpCategory::Health,
        HelpCategory::Environment,
        HelpCategory::FoodDonation,
        HelpCategory::ClothingDonation,
        HelpCategory::Other,
    ];

    /// Label shown to visitors (pt-BR).
    pub fn label(self) -> &'static str {
        match self {
            HelpCategory::Education => "Educação",
            HelpCategory::Health => "Saúde",
            HelpCategory::Environment => "Meio Ambiente",
            HelpCategory::FoodDonation => "Doação de Alimentos",
            HelpCategory::ClothingDonation => "Doação de Roupas",
            HelpCategory::Other => "Outros",
        }
    }

    /// Value carried by the category `<select>`.
    pub fn form_value(self) -> &'static str {
        match self {
            HelpCategory::Education => "educacao",
            HelpCategory::Health => "saude",
            HelpCategory::Environment => "meio-ambiente",
            HelpCategory::FoodDonation => "doacao-alimentos",
            HelpCategory::ClothingDonation => "doacao-roupas",
            HelpCategory::Other => "outros",
        }
    }

    pub fn badge_tone(self) -> BadgeTone {
        CATEGORY_BADGES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, tone)| *tone)
            .unwrap_or(BadgeTone::Slate)
    }
}

impl fmt::Display for HelpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HelpCategory {
    type Err = UnknownCategory;

    /// Accepts either the label or the form value, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HelpCategory::ALL
            .into_iter()
            .find(|category| {
                category.form_value() == wanted || category.label().to_lowercase() == wanted
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Color family of the category badge on a need card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Sky,
    Rose,
    Emerald,
    Amber,
    Violet,
    Slate,
}

pub const CATEGORY_BADGES: [(HelpCategory, BadgeTone); 6] = [
    (HelpCategory::Education, BadgeTone::Sky),
    (HelpCategory::Health, BadgeTone::Rose),
    (HelpCategory::Environment, BadgeTone::Emerald),
    (HelpCategory::FoodDonation, BadgeTone::Amber),
    (HelpCategory::ClothingDonation, BadgeTone::Violet),
    (HelpCategory::Other, BadgeTone::Slate),
];
