use augury_ledger::FortuneBook;

pub fn run(book: &FortuneBook, id: &str) -> Result<(), String> {
    let reading = super::find_reading(book, id)?;
    super::print_reading(reading);
    Ok(())
}
