//! Sort direction types and conversions

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sort direction for ORDER BY clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Get the SQL keyword for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parsing, for callers that want unknown tokens rejected
///
/// # Examples
/// ```
/// use quill_core::SortDirection;
///
/// let dir: SortDirection = "desc".parse().unwrap();
/// assert_eq!(dir, SortDirection::Desc);
/// assert!("sideways".parse::<SortDirection>().is_err());
/// ```
impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ASC" | "asc" | "Asc" => Ok(SortDirection::Asc),
            "DESC" | "desc" | "Desc" => Ok(SortDirection::Desc),
            other => Err(Error::invalid_argument(format!(
                "unknown sort direction '{}', expected ASC or DESC",
                other
            ))),
        }
    }
}

/// Trait for types that can be used as an ORDER BY direction token
///
/// String tokens are kept verbatim and never validated; use
/// [`SortDirection`] or its `FromStr` impl for checked directions.
pub trait IntoDirection {
    fn into_direction(self) -> String;
}

impl IntoDirection for SortDirection {
    fn into_direction(self) -> String {
        self.as_str().to_string()
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> String {
        self.to_string()
    }
}

impl IntoDirection for String {
    fn into_direction(self) -> String {
        self
    }
}

impl IntoDirection for &String {
    fn into_direction(self) -> String {
        self.clone()
    }
}
