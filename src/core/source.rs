//! Data source abstraction for transaction records

use crate::core::error::FetchError;
use crate::core::transaction::Transaction;
use async_trait::async_trait;

/// Fetch capability injected into the store.
///
/// `query` of `None` asks for the unfiltered set. A query filters by
/// case-insensitive substring match on the description; implementations
/// decide where the filtering happens.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(&self, query: Option<&str>)
    -> Result<Vec<Transaction>, FetchError>;
}
