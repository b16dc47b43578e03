use super::ui;
use crate::core::config::DisplayConfig;
use crate::core::format::{format_amount, format_date};
use crate::core::transaction::Transaction;
use crate::search_form::{SearchForm, form_data};
use crate::store::TransactionStore;
use anyhow::{Context, Result};
use comfy_table::Cell;

pub fn display_as_table(transactions: &[Transaction], display: &DisplayConfig) -> String {
    if transactions.is_empty() {
        return ui::style_text("No transactions found.", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Description"),
        ui::header_cell("Amount"),
        ui::header_cell("Category"),
        ui::header_cell("Date"),
    ]);

    for tx in transactions {
        table.add_row(vec![
            Cell::new(&tx.description),
            ui::amount_cell(tx.amount, format_amount(tx.amount, display)),
            Cell::new(&tx.category),
            Cell::new(format_date(&tx.created_at, display)),
        ]);
    }

    table.to_string()
}

pub async fn list(store: &TransactionStore, display: &DisplayConfig) -> Result<()> {
    let pb = ui::new_spinner("Loading transactions...");
    let result = store.load_all().await;
    pb.finish_and_clear();

    let transactions = result.context("Failed to load transactions")?;
    println!("{}", display_as_table(&transactions, display));
    Ok(())
}

pub async fn search(form: &SearchForm, query: &str, display: &DisplayConfig) -> Result<()> {
    let pb = ui::new_spinner("Searching transactions...");
    let result = form.handle_submit(&form_data(query)).await;
    pb.finish_and_clear();

    let transactions = result.with_context(|| format!("Search for '{query}' failed"))?;
    println!("{}", display_as_table(&transactions, display));
    Ok(())
}
