//! Search form handling: validates the submitted fields and forwards the
//! query to the transaction store.
use crate::core::error::{FieldErrors, SubmitError};
use crate::core::transaction::Transaction;
use crate::store::TransactionStore;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub const QUERY_FIELD: &str = "query";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormInputs {
    pub query: String,
}

/// Checks that `raw` is an object with a string `query` member.
pub fn validate(raw: &Value) -> Result<SearchFormInputs, FieldErrors> {
    let mut errors = FieldErrors::new();

    let Some(fields) = raw.as_object() else {
        errors.add(
            QUERY_FIELD,
            format!("Expected object, received {}", type_name(raw)),
        );
        return Err(errors);
    };

    match fields.get(QUERY_FIELD) {
        Some(Value::String(query)) => Ok(SearchFormInputs {
            query: query.clone(),
        }),
        None => {
            errors.add(QUERY_FIELD, "Required");
            Err(errors)
        }
        Some(other) => {
            errors.add(
                QUERY_FIELD,
                format!("Expected string, received {}", type_name(other)),
            );
            Err(errors)
        }
    }
}

/// Builds the submitted form data for a query typed by the user.
pub fn form_data(query: &str) -> Value {
    let mut fields = serde_json::Map::new();
    fields.insert(QUERY_FIELD.to_string(), Value::String(query.to_string()));
    Value::Object(fields)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Clears the submitting flag however the submission ends.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct SearchForm {
    store: Arc<TransactionStore>,
    submitting: AtomicBool,
}

impl SearchForm {
    pub fn new(store: Arc<TransactionStore>) -> Self {
        Self {
            store,
            submitting: AtomicBool::new(false),
        }
    }

    /// True while a submitted search is waiting on the store.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub async fn handle_submit(&self, raw: &Value) -> Result<Vec<Transaction>, SubmitError> {
        let inputs = validate(raw).map_err(SubmitError::Validation)?;

        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Ignoring submission while a search is in flight");
            return Err(SubmitError::InFlight);
        }
        let _guard = SubmittingGuard(&self.submitting);

        self.handle_search_transactions(inputs).await
    }

    async fn handle_search_transactions(
        &self,
        inputs: SearchFormInputs,
    ) -> Result<Vec<Transaction>, SubmitError> {
        debug!(query = %inputs.query, "Submitting search");
        self.store
            .search(&inputs.query)
            .await
            .map_err(SubmitError::Fetch)
    }
}
