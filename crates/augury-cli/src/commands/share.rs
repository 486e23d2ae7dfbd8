use augury_core::share_message;
use augury_ledger::FortuneBook;

pub fn run(book: &FortuneBook, id: Option<&str>) -> Result<(), String> {
    let reading = match id {
        Some(id) => super::find_reading(book, id)?,
        None => book
            .current_fortune()
            .ok_or("no current fortune; run `augury read <category>` first")?,
    };
    print!("{}", share_message(reading));
    Ok(())
}
