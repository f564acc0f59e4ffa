use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User attribute a candidate search can match against.
///
/// Closed set: the storage layer turns this into a column name, so adding a
/// variant means adding a column mapping there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    FirstName,
    LastName,
    Email,
}

impl SearchField {
    /// Column in the user catalog this field reads from.
    pub fn column(self) -> &'static str {
        match self {
            SearchField::FirstName => "first_name",
            SearchField::LastName => "last_name",
            SearchField::Email => "email",
        }
    }
}

impl FromStr for SearchField {
    type Err = UnknownSearchField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(SearchField::FirstName),
            "last_name" => Ok(SearchField::LastName),
            "email" => Ok(SearchField::Email),
            other => Err(UnknownSearchField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSearchField(pub String);

impl fmt::Display for UnknownSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search field: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSearchField {}

/// A single-field candidate query: which attribute to look at and the
/// substring to look for. An empty `param` matches everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub field: SearchField,
    pub param: String,
}

impl SearchFilter {
    pub fn new(field: SearchField, param: impl Into<String>) -> Self {
        Self {
            field,
            param: param.into(),
        }
    }
}
