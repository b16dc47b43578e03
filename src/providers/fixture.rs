use crate::core::error::FetchError;
use crate::core::source::TransactionSource;
use crate::core::transaction::{Transaction, TransactionKind};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::RwLock;
use tracing::debug;

/// In-memory data source that filters locally with the same rules the
/// server applies.
#[derive(Default)]
pub struct FixtureTransactionSource {
    transactions: RwLock<Vec<Transaction>>,
}

impl FixtureTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }

    /// The two records shown on the transactions page before any search.
    pub fn seeded() -> Result<Self, FetchError> {
        Ok(Self::new(seed_transactions()?))
    }

    /// Replaces the served records, simulating a change on the remote side.
    #[cfg(test)]
    pub fn replace(&self, transactions: Vec<Transaction>) {
        let mut guard = self
            .transactions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = transactions;
    }
}

#[async_trait]
impl TransactionSource for FixtureTransactionSource {
    async fn fetch_transactions(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<Transaction>, FetchError> {
        let transactions = self
            .transactions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let result: Vec<Transaction> = match query {
            Some(q) => transactions.iter().filter(|tx| tx.matches(q)).cloned().collect(),
            None => transactions.clone(),
        };
        debug!(?query, count = result.len(), "Served fixture transactions");
        Ok(result)
    }
}

pub fn seed_transactions() -> Result<Vec<Transaction>, FetchError> {
    Ok(vec![
        Transaction::new(
            "1",
            "Desenvolvimento de site",
            TransactionKind::Income,
            1_200_000,
            "Venda",
            seed_date(2024, 3, 27)?,
        )?,
        Transaction::new(
            "2",
            "Hambúrguer",
            TransactionKind::Outcome,
            5_900,
            "Alimentação",
            seed_date(2024, 3, 10)?,
        )?,
    ])
}

fn seed_date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, FetchError> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .ok_or_else(|| FetchError::Invalid(format!("bad seed date {year}-{month}-{day}")))
}
