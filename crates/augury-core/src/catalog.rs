//! Reading templates per category.
//!
//! Each category has a fixed, non-empty list of templates compiled into the
//! binary. The ledger picks one uniformly at random the first time a
//! category is read on a given day and copies its fields verbatim.

use crate::category::Category;
use crate::reading::{Rating, Reading};

/// Static content of a reading before it is stamped with an id and a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Main fortune text.
    pub message: &'static str,
    /// Suggested action.
    pub advice: &'static str,
    /// Lucky color.
    pub lucky_color: &'static str,
    /// Overall rating.
    pub rating: Rating,
}

const fn t(
    message: &'static str,
    advice: &'static str,
    lucky_color: &'static str,
    rating: u8,
) -> Template {
    Template {
        message,
        advice,
        lucky_color,
        rating: Rating::from_catalog(rating),
    }
}

/// Love templates (10 entries).
pub const LOVE: &[Template] = &[
    t(
        "Love surrounds you today. Open your heart and let it in.",
        "Tell someone important how you feel.",
        "Rose Gold",
        5,
    ),
    t(
        "A meaningful encounter waits somewhere you least expect.",
        "Say yes to new social invitations.",
        "Lavender",
        4,
    ),
    t(
        "Lessons from past relationships will serve the ones ahead.",
        "Reflect on what you truly want from a partner.",
        "Pearl White",
        3,
    ),
    t(
        "Your heart is seeking balance between giving and receiving.",
        "Set healthy boundaries in your relationships.",
        "Soft Pink",
        4,
    ),
    t(
        "A season of self-discovery strengthens your bonds.",
        "Make time to honor your own needs.",
        "Coral",
        3,
    ),
    t(
        "True love asks for patience. Trust the timing.",
        "Focus on your own growth while love finds its way.",
        "Blush",
        2,
    ),
    t(
        "Your radiant energy draws people in today.",
        "Stay true to yourself in every exchange.",
        "Champagne",
        5,
    ),
    t(
        "A relationship is about to reach an important turning point.",
        "Trust your intuition when the moment to decide comes.",
        "Mauve",
        3,
    ),
    t(
        "Healing old wounds makes room for new love.",
        "Practice forgiveness, especially toward yourself.",
        "Mint",
        4,
    ),
    t(
        "Your soulmate may be closer than you think.",
        "Notice who has been supporting you all along.",
        "Sky Blue",
        5,
    ),
];

/// Career templates (10 entries).
pub const CAREER: &[Template] = &[
    t(
        "Your creative talent will catch the eye of someone influential.",
        "Share your ideas with confidence in meetings.",
        "Royal Blue",
        5,
    ),
    t(
        "A difficult project will bring out your unique strengths.",
        "Treat obstacles as chances to grow.",
        "Silver",
        4,
    ),
    t(
        "Your networking efforts will soon yield valuable connections.",
        "Follow up quickly with new contacts.",
        "Navy",
        4,
    ),
    t(
        "Balance ambition and health for lasting success.",
        "Take regular breaks during focused work.",
        "Emerald",
        3,
    ),
    t(
        "A mentor will offer guidance at a crucial moment.",
        "Stay open to constructive feedback.",
        "Charcoal",
        4,
    ),
    t(
        "Your diligence is laying the foundation for future rewards.",
        "Keep your daily habits consistent.",
        "Burgundy",
        3,
    ),
    t(
        "An unexpected opportunity aligns with your true purpose.",
        "Stay open to paths you had not considered.",
        "Teal",
        5,
    ),
    t(
        "A period of learning comes before your next achievement.",
        "Invest time in developing a new skill.",
        "Slate Gray",
        3,
    ),
    t(
        "Your leadership qualities will soon be called upon.",
        "Step forward with confidence when needed.",
        "Deep Purple",
        4,
    ),
    t(
        "Financial rewards arrive through an unexpected channel.",
        "Explore alternative sources of income.",
        "Forest Green",
        5,
    ),
];

/// Wealth templates (10 entries).
pub const WEALTH: &[Template] = &[
    t(
        "Abundance flows to you when you act in line with your values.",
        "Make financial decisions that honor your principles.",
        "Gold",
        5,
    ),
    t(
        "Careful investment now brings prosperity later.",
        "Research thoroughly before committing resources.",
        "Emerald Green",
        4,
    ),
    t(
        "An unexpected financial gain is on the horizon.",
        "Watch for opportunities others might miss.",
        "Amber",
        5,
    ),
    t(
        "Your ingenuity creates wealth in surprising ways.",
        "Look for creative solutions to money problems.",
        "Copper",
        3,
    ),
    t(
        "Generosity brings prosperity into your life.",
        "Share your abundance, even in small ways.",
        "Jade",
        4,
    ),
    t(
        "Simplifying your approach brings financial clarity.",
        "Organize your finances for better control.",
        "Sapphire",
        3,
    ),
    t(
        "Patience with long-term investments will pay off.",
        "Resist the urge for instant financial gratification.",
        "Bronze",
        3,
    ),
    t(
        "A financial burden will soon be lifted from your shoulders.",
        "Trust that resources will arrive when needed.",
        "Turquoise",
        4,
    ),
    t(
        "Your practical wisdom attracts prosperity.",
        "Trust your instincts in money matters.",
        "Platinum",
        5,
    ),
    t(
        "Multiple streams of income are taking shape in your life.",
        "Diversify your financial interests.",
        "Olive Green",
        4,
    ),
];

/// The templates for a category, in catalog order. Never empty.
pub fn templates(category: Category) -> &'static [Template] {
    match category {
        Category::Love => LOVE,
        Category::Career => CAREER,
        Category::Wealth => WEALTH,
    }
}

/// Whether a reading's content is one of its category's templates.
pub fn contains(reading: &Reading) -> bool {
    templates(reading.category)
        .iter()
        .any(|template| reading.matches(template))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_templates() {
        for category in Category::ALL {
            assert_eq!(templates(category).len(), 10, "{category}");
        }
    }

    #[test]
    fn ratings_in_range() {
        for category in Category::ALL {
            for template in templates(category) {
                let value = template.rating.value();
                assert!((Rating::MIN..=Rating::MAX).contains(&value));
                assert_eq!(Rating::new(value).unwrap(), template.rating);
            }
        }
    }

    #[test]
    fn fields_are_non_empty() {
        for category in Category::ALL {
            for template in templates(category) {
                assert!(!template.message.is_empty());
                assert!(!template.advice.is_empty());
                assert!(!template.lucky_color.is_empty());
            }
        }
    }

    #[test]
    fn contains_detects_foreign_content() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut reading = Reading::from_template(Category::Love, &LOVE[2], day, 1);
        assert!(contains(&reading));

        reading.category = Category::Wealth;
        assert!(!contains(&reading));

        reading.category = Category::Love;
        reading.lucky_color = "Plaid".to_string();
        assert!(!contains(&reading));
    }
}
