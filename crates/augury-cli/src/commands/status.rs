use augury_core::Category;
use augury_ledger::FortuneBook;
use colored::Colorize;

pub fn run(book: &FortuneBook) -> Result<(), String> {
    let today = book.today();
    println!("  {} {}", "Today".bold(), today.format("%A, %B %-d, %Y"));
    println!();

    for category in Category::ALL {
        let state = if book.has_read_today(category) {
            "read".dimmed()
        } else {
            "available".green()
        };
        println!("  {:<8} {state}", category.title());
    }

    if let Some(current) = book.current_fortune() {
        println!();
        println!(
            "  current: {} ({})",
            current.id,
            current.category.title()
        );
    }
    Ok(())
}
