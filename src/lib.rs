pub mod cli;
pub mod core;
pub mod providers;
pub mod search_form;
pub mod store;

use crate::core::config::AppConfig;
use crate::providers::HttpTransactionSource;
use crate::search_form::SearchForm;
use crate::store::TransactionStore;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    List,
    Search { query: String },
    Summary,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("dtmoney starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let source = HttpTransactionSource::new(&config.source)
        .context("Failed to create transaction source")?;
    let store = Arc::new(TransactionStore::new(Arc::new(source)));

    match command {
        AppCommand::List => cli::transactions::list(&store, &config.display).await,
        AppCommand::Search { query } => {
            let form = SearchForm::new(Arc::clone(&store));
            cli::transactions::search(&form, &query, &config.display).await
        }
        AppCommand::Summary => cli::summary::run(&store, &config.display).await,
    }
}
