use std::fmt;
use std::str::FromStr;

use crate::record::BookRecord;

const ALL: &str = "All";

/// The active category constraint for the visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn category(category: impl Into<String>) -> Self {
        Self::Category(category.into())
    }

    #[must_use]
    pub fn matches(&self, record: &BookRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == *category,
        }
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Self::All);
        }
        Ok(Self::Category(s.to_owned()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Category(category) => f.write_str(category),
        }
    }
}
