use crate::reading::Reading;

/// Render a reading as a plain-text message suitable for a share sheet or
/// the clipboard.
pub fn share_message(reading: &Reading) -> String {
    let mut out = format!(
        "🌟 Today's {} Fortune 🌟\n\n",
        reading.category.title()
    );
    out.push_str(&format!("{}\n\n", reading.message));
    out.push_str(&format!("✨ Advice: {}\n", reading.advice));
    out.push_str(&format!("🎨 Lucky color: {}\n", reading.lucky_color));
    out.push_str(&format!("⭐ Fortune: {}\n\n", reading.rating.stars()));
    out.push_str("#CelestialFortune #DailyFortune\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::category::Category;
    use chrono::NaiveDate;

    #[test]
    fn share_message_contents() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let template = &catalog::templates(Category::Love)[5];
        let reading = Reading::from_template(Category::Love, template, day, 1);

        let msg = share_message(&reading);
        assert!(msg.starts_with("🌟 Today's Love Fortune 🌟"));
        assert!(msg.contains(template.message));
        assert!(msg.contains(&format!("✨ Advice: {}", template.advice)));
        assert!(msg.contains("🎨 Lucky color: Blush"));
        assert!(msg.contains("⭐ Fortune: ★★☆☆☆"));
    }
}
