use augury_ledger::FortuneBook;
use colored::Colorize;

pub fn run(book: &mut FortuneBook, category: &str) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let already = book.has_read_today(category);
    let reading = book.read_fortune(category);

    if already {
        println!(
            "  {}",
            format!("Already read {category} today. Here is today's reading again.").dimmed()
        );
        println!();
    }
    super::print_reading(&reading);

    if book.last_persist_failed() {
        eprintln!(
            "  {}",
            "warning: reading could not be saved; it will be retried on the next change".yellow()
        );
    }
    Ok(())
}
