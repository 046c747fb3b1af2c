// ── CNPJ validation ──
//
// Punctuation is free-form: "11.222.333/0001-81", "11222333000181" and
// "11 222 333 0001 81" all reduce to the same digits. Only the count is
// checked; check digits are not verified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Number of digits in a CNPJ.
pub const TAX_ID_LEN: usize = 14;

/// Drop every character that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A CNPJ reduced to exactly 14 ASCII digits.
///
/// Only [`TaxId::parse`] builds one, so holding a `TaxId` means the
/// 14-digit rule has already been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl TaxId {
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let digits = strip_non_digits(input);
        if digits.len() == TAX_ID_LEN {
            Ok(Self(digits))
        } else {
            Err(SearchError::InvalidTaxId {
                digits: digits.len(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TaxId {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = SearchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.0
    }
}

impl AsRef<str> for TaxId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
