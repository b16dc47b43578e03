use super::ui;
use crate::core::config::DisplayConfig;
use crate::core::format::format_amount;
use crate::core::summary::Summary;
use crate::store::TransactionStore;
use anyhow::{Context, Result};
use comfy_table::Cell;

impl Summary {
    /// Renders the income, outcome and total cards side by side.
    pub fn display_as_table(&self, display: &DisplayConfig) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Entradas"),
            ui::header_cell("Saídas"),
            ui::header_cell("Total"),
        ]);
        table.add_row(vec![
            ui::amount_cell(self.income, format_amount(self.income, display)),
            ui::amount_cell(-self.outcome, format_amount(self.outcome, display)),
            Cell::new(ui::style_text(
                &format_amount(self.total, display),
                if self.total >= 0 {
                    ui::StyleType::TotalValue
                } else {
                    ui::StyleType::Error
                },
            )),
        ]);

        format!(
            "{}\n\n{}",
            ui::style_text("Summary", ui::StyleType::Title),
            table
        )
    }
}

pub async fn run(store: &TransactionStore, display: &DisplayConfig) -> Result<()> {
    let pb = ui::new_spinner("Loading transactions...");
    let result = store.load_all().await;
    pb.finish_and_clear();

    let transactions = result.context("Failed to load transactions")?;
    let summary = Summary::from_transactions(&transactions);
    println!("{}", summary.display_as_table(display));
    Ok(())
}
