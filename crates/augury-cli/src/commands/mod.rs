pub mod clear;
pub mod export;
pub mod history;
pub mod read;
pub mod share;
pub mod show;
pub mod stats;
pub mod status;

use augury_core::{Category, Reading, ReadingId};
use augury_ledger::FortuneBook;
use colored::Colorize;

/// Parse a category tag, reporting the allowed set on failure.
fn parse_category(tag: &str) -> Result<Category, String> {
    tag.parse::<Category>().map_err(|e| e.to_string())
}

/// Resolve a reading id against the book's history.
fn find_reading<'a>(book: &'a FortuneBook, id: &str) -> Result<&'a Reading, String> {
    book.find(&ReadingId::from(id))
        .ok_or_else(|| format!("no reading with id \"{id}\""))
}

/// Print a reading as a card.
fn print_reading(reading: &Reading) {
    println!(
        "  {} {} [{}]",
        format!("{} Fortune", reading.category.title()).bold(),
        reading.rating.stars().yellow(),
        reading.date.format("%Y-%m-%d").to_string().dimmed()
    );
    println!();
    println!("  {}", reading.message);
    println!();
    println!("  advice:       {}", reading.advice);
    println!("  lucky color:  {}", reading.lucky_color);
    println!("  id:           {}", reading.id.to_string().dimmed());
}
