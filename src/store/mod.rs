use crate::core::error::FetchError;
use crate::core::source::TransactionSource;
use crate::core::transaction::Transaction;
use std::sync::{
    Arc, Mutex, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};
use tracing::debug;

pub type Listener = Arc<dyn Fn(&[Transaction]) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the latest known transaction list and the operations that replace it.
///
/// Every fetch takes a request token. A response whose token is no longer
/// the latest is discarded, so the most recently *issued* request wins even
/// when responses arrive out of order.
pub struct TransactionStore {
    source: Arc<dyn TransactionSource>,
    transactions: RwLock<Vec<Transaction>>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    // Serializes the token check, the write and the notification
    commit: Mutex<()>,
    latest_request: AtomicU64,
    next_subscription: AtomicU64,
}

impl TransactionStore {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self {
            source,
            transactions: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
            commit: Mutex::new(()),
            latest_request: AtomicU64::new(0),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Fetches the unfiltered set and replaces the stored list with it.
    pub async fn load_all(&self) -> Result<Vec<Transaction>, FetchError> {
        self.fetch(None).await
    }

    /// Fetches the transactions whose description contains `query`,
    /// ignoring case. An empty query is the same as [`Self::load_all`].
    pub async fn search(&self, query: &str) -> Result<Vec<Transaction>, FetchError> {
        if query.is_empty() {
            return self.load_all().await;
        }
        self.fetch(Some(query)).await
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers a listener called after every successful replacement of the
    /// stored list. Listeners run synchronously in registration order.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Transaction]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    async fn fetch(&self, query: Option<&str>) -> Result<Vec<Transaction>, FetchError> {
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, ?query, "Fetching transactions");

        let result = self.source.fetch_transactions(query).await;

        let _commit = self.commit.lock().unwrap_or_else(PoisonError::into_inner);
        let latest = self.latest_request.load(Ordering::SeqCst);
        if token != latest {
            debug!(token, latest, "Discarding stale response");
            return Err(FetchError::Superseded);
        }

        let transactions = result?;
        *self
            .transactions
            .write()
            .unwrap_or_else(PoisonError::into_inner) = transactions.clone();

        self.notify(&transactions);
        Ok(transactions)
    }

    fn notify(&self, transactions: &[Transaction]) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        debug!(count = listeners.len(), "Notifying listeners");
        for listener in listeners {
            listener(transactions);
        }
    }
}
