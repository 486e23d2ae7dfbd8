use std::path::Path;

use augury_ledger::FortuneBook;
use augury_ledger::export::{export_markdown, export_text};

pub fn run(book: &FortuneBook, format: &str, output: Option<&Path>) -> Result<(), String> {
    let content = match format {
        "markdown" | "md" => export_markdown(book.ledger()),
        "text" | "txt" => export_text(book.ledger()),
        "json" => export_json(book)?,
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(book: &FortuneBook) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(book.history())
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    json.push('\n');
    Ok(json)
}
