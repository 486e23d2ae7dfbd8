use augury_core::Category;
use augury_ledger::{FortuneBook, Stats};
use colored::Colorize;

pub fn run(book: &FortuneBook) -> Result<(), String> {
    let stats = Stats::collect(book.ledger());

    println!("  {}", "Fortune statistics".bold());
    println!();
    println!("  readings:   {}", stats.total);
    println!("  days:       {}", stats.days);
    for category in Category::ALL {
        println!("  {:<10}  {}", category.tag(), stats.count(category));
    }
    match stats.average_rating {
        Some(avg) => println!("  average:    {avg:.1}/5"),
        None => println!("  average:    -"),
    }
    Ok(())
}
