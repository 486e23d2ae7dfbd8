use augury_ledger::FortuneBook;

pub fn run(book: &mut FortuneBook, yes: bool, current_only: bool) -> Result<(), String> {
    if current_only {
        book.clear_current_fortune();
        println!("  Current fortune cleared.");
        return Ok(());
    }

    if !yes {
        return Err("clearing history cannot be undone; pass --yes to confirm".to_string());
    }

    let removed = book.ledger().len();
    book.clear_history();
    println!("  History cleared ({removed} readings removed).");
    Ok(())
}
