use augury_core::Reading;
use augury_ledger::FortuneBook;
use augury_ledger::history::group_by_period;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(book: &FortuneBook, category: Option<&str>) -> Result<(), String> {
    let filter = category.map(super::parse_category).transpose()?;
    let today = book.today();

    let sections: Vec<(_, Vec<&Reading>)> = group_by_period(book.ledger(), today)
        .into_iter()
        .map(|(period, readings)| {
            let kept = readings
                .into_iter()
                .filter(|r| filter.is_none_or(|c| r.category == c))
                .collect::<Vec<_>>();
            (period, kept)
        })
        .filter(|(_, readings)| !readings.is_empty())
        .collect();

    if sections.is_empty() {
        println!("  No readings yet.");
        return Ok(());
    }

    let mut total = 0;
    for (period, readings) in &sections {
        println!("  {}", period.title().bold());

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Date", "Category", "Rating", "Message", "Id"]);

        for reading in readings {
            let message = if reading.message.chars().count() > 48 {
                let cut: String = reading.message.chars().take(45).collect();
                format!("{cut}...")
            } else {
                reading.message.clone()
            };
            table.add_row(vec![
                reading.date.format("%Y-%m-%d").to_string(),
                reading.category.title().to_string(),
                reading.rating.stars(),
                message,
                reading.id.to_string(),
            ]);
        }

        println!("{table}");
        println!();
        total += readings.len();
    }

    println!("  {total} readings");
    Ok(())
}
