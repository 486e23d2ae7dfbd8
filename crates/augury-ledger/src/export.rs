//! History export as markdown or plain text.

use crate::ledger::Ledger;

/// Export the full history as markdown, newest day first.
pub fn export_markdown(ledger: &Ledger) -> String {
    let mut out = String::from("# Fortune History\n\n");
    if ledger.is_empty() {
        out.push_str("*No readings yet.*\n");
        return out;
    }

    for (date, readings) in ledger.history().iter().rev() {
        if readings.is_empty() {
            continue;
        }
        out.push_str(&format!("## {}\n\n", date.format("%Y-%m-%d")));
        for reading in readings.values() {
            out.push_str(&format!(
                "### {} {}\n\n",
                reading.category.title(),
                reading.rating.stars()
            ));
            out.push_str(&format!("{}\n\n", reading.message));
            out.push_str(&format!("**Advice**: {}\n", reading.advice));
            out.push_str(&format!("**Lucky color**: {}\n", reading.lucky_color));
            out.push_str(&format!("*id: {}*\n\n", reading.id));
        }
    }
    out
}

/// Export the full history as plain text, newest day first.
pub fn export_text(ledger: &Ledger) -> String {
    let mut out = String::from("Fortune History\n===============\n\n");
    if ledger.is_empty() {
        out.push_str("No readings yet.\n");
        return out;
    }

    for (date, readings) in ledger.history().iter().rev() {
        if readings.is_empty() {
            continue;
        }
        out.push_str(&format!("--- {} ---\n", date.format("%Y-%m-%d")));
        for reading in readings.values() {
            out.push_str(&format!(
                "{} ({}): {}\n",
                reading.category.title(),
                reading.rating,
                reading.message
            ));
            out.push_str(&format!("  Advice: {}\n", reading.advice));
            out.push_str(&format!("  Lucky color: {}\n", reading.lucky_color));
        }
        out.push('\n');
    }
    out
}
