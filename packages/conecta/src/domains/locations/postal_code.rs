use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `NNNNN-NNN`, ASCII digits only.
static POSTAL_CODE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("postal code pattern is valid")
});

/// Length of a fully typed postal code, hyphen included.
pub const MASKED_LEN: usize = 9;

const DIGITS: usize = 8;
const PREFIX_DIGITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("postal code must look like 12345-678, got {0:?}")]
pub struct MalformedPostalCode(pub String);

/// A Brazilian postal code (CEP) in its masked `NNNNN-NNN` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(value: &str) -> Result<Self, MalformedPostalCode> {
        if POSTAL_CODE_FORMAT.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(MalformedPostalCode(value.to_string()))
        }
    }

    /// For literals already checked with [`is_masked_postal_code`] at compile time.
    pub(crate) fn from_checked(value: &'static str) -> Self {
        debug_assert!(is_masked_postal_code(value));
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight digits without the hyphen, as sent to the lookup service.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostalCode {
    type Err = MalformedPostalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = MalformedPostalCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

/// Same rule as [`PostalCode::parse`], usable in const context.
pub const fn is_masked_postal_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != MASKED_LEN {
        return false;
    }
    let mut i = 0;
    while i < MASKED_LEN {
        let ok = if i == PREFIX_DIGITS {
            bytes[i] == b'-'
        } else {
            bytes[i].is_ascii_digit()
        };
        if !ok {
            return false;
        }
        i += 1;
    }
    true
}

/// Normalize raw keystrokes in the postal code field.
///
/// Drops anything that is not an ASCII digit, keeps at most eight digits and
/// inserts the hyphen once a sixth digit exists.
pub fn mask_postal_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(DIGITS)
        .collect();

    if digits.len() > PREFIX_DIGITS {
        format!("{}-{}", &digits[..PREFIX_DIGITS], &digits[PREFIX_DIGITS..])
    } else {
        digits
    }
}

/// Returns the postal code once the masked input is complete.
pub fn completed_postal_code(masked: &str) -> Option<PostalCode> {
    if masked.len() != MASKED_LEN {
        return None;
    }
    PostalCode::parse(masked).ok()
}
