//! Registration validator.
//!
//! Turns raw form values into a [`NeedRecord`]. Every failing field is
//! reported so the presentation layer can flag all of them at once.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{HelpCategory, NeedRecord};
use crate::common::NeedId;
use crate::domains::locations::PostalCode;

/// Fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Institution,
    Category,
    Title,
    Description,
    PostalCode,
    Street,
    Neighborhood,
    City,
    State,
    Contact,
}

impl FormField {
    /// Fields that must be non-blank, in form order.
    pub const REQUIRED: [FormField; 10] = [
        FormField::Institution,
        FormField::Category,
        FormField::Title,
        FormField::Description,
        FormField::PostalCode,
        FormField::Street,
        FormField::Neighborhood,
        FormField::City,
        FormField::State,
        FormField::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Institution => "institution",
            FormField::Category => "category",
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::PostalCode => "postal_code",
            FormField::Street => "street",
            FormField::Neighborhood => "neighborhood",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Contact => "contact",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of the registration form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedForm {
    pub institution: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub contact: String,
}

impl NeedForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Institution => &self.institution,
            FormField::Category => &self.category,
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::PostalCode => &self.postal_code,
            FormField::Street => &self.street,
            FormField::Neighborhood => &self.neighborhood,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::Contact => &self.contact,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Institution => &mut self.institution,
            FormField::Category => &mut self.category,
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::PostalCode => &mut self.postal_code,
            FormField::Street => &mut self.street,
            FormField::Neighborhood => &mut self.neighborhood,
            FormField::City => &mut self.city,
            FormField::State => &mut self.state,
            FormField::Contact => &mut self.contact,
        };
        *slot = value.into();
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    MalformedPostalCode,
    UnknownCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

/// The submission was rejected; nothing was registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

fn describe(issues: &[FieldIssue]) -> String {
    let mut parts = Vec::new();

    let missing: Vec<&str> = issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::Missing)
        .map(|issue| issue.field.as_str())
        .collect();
    if !missing.is_empty() {
        parts.push(format!("missing required field: {}", missing.join(", ")));
    }
    if issues
        .iter()
        .any(|issue| issue.kind == IssueKind::MalformedPostalCode)
    {
        parts.push("postal code must look like 12345-678".to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.kind == IssueKind::UnknownCategory)
    {
        parts.push("unknown help category".to_string());
    }

    parts.join("; ")
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn failed_fields(&self) -> BTreeSet<FormField> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    pub fn has_missing(&self) -> bool {
        self.has(IssueKind::Missing)
    }

    pub fn has_malformed_postal_code(&self) -> bool {
        self.has(IssueKind::MalformedPostalCode)
    }

    pub fn has_unknown_category(&self) -> bool {
        self.has(IssueKind::UnknownCategory)
    }

    fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

/// Validate against today's local date.
pub fn validate(form: &NeedForm) -> Result<NeedRecord, ValidationError> {
    validate_at(form, Local::now().date_naive())
}

pub fn validate_at(form: &NeedForm, today: NaiveDate) -> Result<NeedRecord, ValidationError> {
    let mut issues = Vec::new();

    for field in FormField::REQUIRED {
        if form.get(field).trim().is_empty() {
            issues.push(FieldIssue {
                field,
                kind: IssueKind::Missing,
            });
        }
    }

    let category = match form.category.trim() {
        "" => None,
        raw => match raw.parse::<HelpCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                issues.push(FieldIssue {
                    field: FormField::Category,
                    kind: IssueKind::UnknownCategory,
                });
                None
            }
        },
    };

    let postal_code = match form.postal_code.trim() {
        "" => None,
        raw => match PostalCode::parse(raw) {
            Ok(code) => Some(code),
            Err(_) => {
                issues.push(FieldIssue {
                    field: FormField::PostalCode,
                    kind: IssueKind::MalformedPostalCode,
                });
                None
            }
        },
    };

    let (Some(category), Some(postal_code), true) = (category, postal_code, issues.is_empty())
    else {
        return Err(ValidationError { issues });
    };

    Ok(NeedRecord {
        id: NeedId::new(),
        institution: form.institution.trim().to_string(),
        category,
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        postal_code,
        street: form.street.trim().to_string(),
        neighborhood: form.neighborhood.trim().to_string(),
        city: form.city.trim().to_string(),
        state: form.state.trim().to_string(),
        contact: form.contact.trim().to_string(),
        created_on: today,
    })
}
