use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A fortune topic. The set is closed: every reading belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Romance and relationships.
    Love,
    /// Work and vocation.
    Career,
    /// Money and prosperity.
    Wealth,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Love, Category::Career, Category::Wealth];

    /// The lowercase tag used on the wire and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Wealth => "wealth",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Love => "Love",
            Self::Career => "Career",
            Self::Wealth => "Wealth",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "love" => Ok(Self::Love),
            "career" => Ok(Self::Career),
            "wealth" => Ok(Self::Wealth),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}
