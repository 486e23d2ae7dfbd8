use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Template;
use crate::category::Category;
use crate::error::CoreError;

/// A star rating in the inclusive range 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: u8 = 1;
    /// Highest possible rating.
    pub const MAX: u8 = 5;

    /// Build a rating, rejecting values outside 1-5.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::RatingOutOfRange(value))
        }
    }

    /// Catalog-only constructor; values are checked by the catalog tests.
    pub(crate) const fn from_catalog(value: u8) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Filled and empty stars, always five glyphs wide.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Identifier of a reading: `{category}-{YYYY-MM-DD}-{millis}`.
///
/// The millisecond stamp is supplied by the ledger, which keeps it strictly
/// increasing so two readings created in the same instant still differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingId(String);

impl ReadingId {
    /// Compose an id from its parts.
    pub fn new(category: Category, date: NaiveDate, stamp_millis: i64) -> Self {
        Self(format!(
            "{category}-{}-{stamp_millis}",
            date.format("%Y-%m-%d")
        ))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The millisecond stamp at the end of the id, if it has one.
    pub fn stamp_millis(&self) -> Option<i64> {
        self.0.rsplit('-').next()?.parse().ok()
    }
}

impl From<&str> for ReadingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ReadingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable fortune result for a category on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Unique identifier.
    pub id: ReadingId,
    /// The category this reading answers.
    pub category: Category,
    /// Main fortune text.
    pub message: String,
    /// Suggested action.
    pub advice: String,
    /// Lucky color for the day.
    pub lucky_color: String,
    /// Overall rating.
    pub rating: Rating,
    /// Local calendar day the reading was generated on.
    pub date: NaiveDate,
}

impl Reading {
    /// Stamp a catalog template into a reading.
    pub fn from_template(
        category: Category,
        template: &Template,
        date: NaiveDate,
        stamp_millis: i64,
    ) -> Self {
        Self {
            id: ReadingId::new(category, date, stamp_millis),
            category,
            message: template.message.to_string(),
            advice: template.advice.to_string(),
            lucky_color: template.lucky_color.to_string(),
            rating: template.rating,
            date,
        }
    }

    /// Whether the content of this reading equals `template` field for field.
    pub fn matches(&self, template: &Template) -> bool {
        self.message == template.message
            && self.advice == template.advice
            && self.lucky_color == template.lucky_color
            && self.rating == template.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        for v in 1..=5 {
            assert_eq!(Rating::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rating_stars() {
        assert_eq!(Rating::new(4).unwrap().stars(), "★★★★☆");
        assert_eq!(Rating::new(1).unwrap().stars(), "★☆☆☆☆");
    }

    #[test]
    fn rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("3").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn id_format() {
        let id = ReadingId::new(Category::Love, day(), 1_709_251_200_000);
        assert_eq!(id.as_str(), "love-2024-03-01-1709251200000");
        assert_eq!(id.stamp_millis(), Some(1_709_251_200_000));
    }

    #[test]
    fn from_template_copies_fields() {
        let template = &catalog::templates(Category::Wealth)[0];
        let reading = Reading::from_template(Category::Wealth, template, day(), 7);
        assert_eq!(reading.category, Category::Wealth);
        assert_eq!(reading.date, day());
        assert!(reading.matches(template));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let template = &catalog::templates(Category::Career)[0];
        let reading = Reading::from_template(Category::Career, template, day(), 1);
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["luckyColor"], template.lucky_color);
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["category"], "career");
        assert_eq!(json["id"], "career-2024-03-01-1");
    }
}
