use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Search category chosen with the filter toggles.
///
/// String forms match the form values of the landing page (`todos`,
/// `cnpj`, `razao`); English aliases are accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum FilterKind {
    #[default]
    #[serde(rename = "todos")]
    #[strum(to_string = "todos", serialize = "all")]
    All,
    #[serde(rename = "cnpj")]
    #[strum(to_string = "cnpj", serialize = "tax-id", serialize = "tax_id")]
    TaxId,
    #[serde(rename = "razao")]
    #[strum(to_string = "razao", serialize = "legal-name", serialize = "legal_name")]
    LegalName,
}

impl FilterKind {
    /// Label shown on the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::TaxId => "CNPJ",
            Self::LegalName => "Razão Social",
        }
    }

    /// Toggle order, left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Next toggle to the right, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::TaxId,
            Self::TaxId => Self::LegalName,
            Self::LegalName => Self::All,
        }
    }

    /// Next toggle to the left, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::LegalName,
            Self::TaxId => Self::All,
            Self::LegalName => Self::TaxId,
        }
    }
}

/// What the user typed plus the selected filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub filter: FilterKind,
}

impl Query {
    pub fn new(text: impl Into<String>, filter: FilterKind) -> Self {
        Self {
            text: text.into(),
            filter,
        }
    }

    pub fn tax_id(text: impl Into<String>) -> Self {
        Self::new(text, FilterKind::TaxId)
    }
}
