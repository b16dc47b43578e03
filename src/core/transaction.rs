//! Transaction records and their wire representation

use crate::core::error::FetchError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outcome,
}

/// A single income or outcome record.
///
/// `amount` is a signed value in minor units (cents). Income is always
/// positive and outcome always negative; [`Transaction::new`] and the wire
/// conversion both enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a transaction from an unsigned or signed amount, applying the
    /// sign implied by `kind`.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        kind: TransactionKind,
        amount: i64,
        category: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, FetchError> {
        let id = id.into();
        let amount = signed_amount(&id, kind, amount)?;
        Ok(Self {
            id,
            description: description.into(),
            kind,
            amount,
            category: category.into(),
            created_at,
        })
    }

    pub fn magnitude(&self) -> u64 {
        self.amount.unsigned_abs()
    }

    pub fn matches(&self, query: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

fn signed_amount(id: &str, kind: TransactionKind, amount: i64) -> Result<i64, FetchError> {
    // i64::MIN has no positive counterpart
    if amount.checked_abs().is_none() {
        return Err(FetchError::Invalid(format!(
            "transaction {id} amount {amount} is out of range"
        )));
    }
    match (kind, amount.signum()) {
        (_, 0) => Err(FetchError::Invalid(format!(
            "transaction {id} has a zero amount"
        ))),
        (TransactionKind::Income, 1) => Ok(amount),
        (TransactionKind::Income, _) => Err(FetchError::Invalid(format!(
            "income transaction {id} has a negative amount ({amount})"
        ))),
        (TransactionKind::Outcome, 1) => Ok(-amount),
        (TransactionKind::Outcome, _) => Ok(amount),
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(u64),
    Text(String),
}

/// Shape of one element of the data source's JSON array.
///
/// `amount` is an integer count of minor units (cents); a fractional JSON
/// number such as `59.9` does not deserialize and the body is reported as
/// [`FetchError::Malformed`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    id: RecordId,
    description: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: i64,
    category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = FetchError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let id = match record.id {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        };
        Transaction::new(
            id,
            record.description,
            record.kind,
            record.amount,
            record.category,
            record.created_at,
        )
    }
}

/// Parses a data source response body into transactions.
pub fn parse_transactions(body: &str) -> Result<Vec<Transaction>, FetchError> {
    let records: Vec<TransactionRecord> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    records.into_iter().map(Transaction::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SEED_JSON: &str = r#"[
        {
            "id": 1,
            "description": "Desenvolvimento de site",
            "type": "income",
            "amount": 1200000,
            "category": "Venda",
            "createdAt": "2024-03-27T12:00:00.000Z"
        },
        {
            "id": "2",
            "description": "Hambúrguer",
            "type": "outcome",
            "amount": 5900,
            "category": "Alimentação",
            "createdAt": "2024-03-10T18:30:00Z"
        }
    ]"#;

    #[test]
    fn test_parse_seed_records() {
        let transactions = parse_transactions(SEED_JSON).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "1");
        assert_eq!(transactions[0].kind, TransactionKind::Income);
        assert_eq!(transactions[0].amount, 1_200_000);
        assert_eq!(
            transactions[0].created_at,
            Utc.with_ymd_and_hms(2024, 3, 27, 12, 0, 0).unwrap()
        );
        assert_eq!(transactions[1].id, "2");
        assert_eq!(transactions[1].description, "Hambúrguer");
        assert_eq!(transactions[1].amount, -5900);
        assert_eq!(transactions[1].magnitude(), 5900);
    }

    #[test]
    fn test_signed_outcome_is_kept() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let tx = Transaction::new(
            "3",
            "Aluguel",
            TransactionKind::Outcome,
            -150_000,
            "Casa",
            created_at,
        )
        .unwrap();
        assert_eq!(tx.amount, -150_000);
    }

    #[test]
    fn test_negative_income_is_rejected() {
        let body = r#"[{"id": 1, "description": "Salário", "type": "income", "amount": -10,
            "category": "Trabalho", "createdAt": "2024-03-01T00:00:00Z"}]"#;
        let err = parse_transactions(body).unwrap_err();
        assert!(matches!(err, FetchError::Invalid(_)));
    }

    #[test]
    fn test_most_negative_amount_is_rejected() {
        let body = r#"[{"id": 1, "description": "Overflow", "type": "outcome",
            "amount": -9223372036854775808,
            "category": "c", "createdAt": "2024-03-01T00:00:00Z"}]"#;
        let err = parse_transactions(body).unwrap_err();
        assert!(matches!(err, FetchError::Invalid(_)));

        let tx = Transaction::new(
            "2",
            "Max",
            TransactionKind::Outcome,
            i64::MAX,
            "c",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(tx.amount, -i64::MAX);
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let created_at = Utc::now();
        let result =
            Transaction::new("4", "Nada", TransactionKind::Income, 0, "Outros", created_at);
        assert!(matches!(result, Err(FetchError::Invalid(_))));
    }

    #[test]
    fn test_malformed_payloads() {
        for body in [
            "",
            "{}",
            r#"[{"id": 1}]"#,
            r#"[{"id": 1, "description": "x", "type": "transfer", "amount": 1,
                "category": "c", "createdAt": "2024-03-01T00:00:00Z"}]"#,
            r#"[{"id": 1, "description": "x", "type": "income", "amount": 1,
                "category": "c", "createdAt": "yesterday"}]"#,
            r#"[{"id": 1, "description": "x", "type": "outcome", "amount": 59.9,
                "category": "c", "createdAt": "2024-03-01T00:00:00Z"}]"#,
        ] {
            let err = parse_transactions(body).unwrap_err();
            assert!(matches!(err, FetchError::Malformed(_)), "body: {body}");
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let tx = Transaction::new(
            "2",
            "Hambúrguer",
            TransactionKind::Outcome,
            5900,
            "Alimentação",
            Utc::now(),
        )
        .unwrap();
        assert!(tx.matches("hambúr"));
        assert!(tx.matches("HAMBÚRGUER"));
        assert!(tx.matches(""));
        assert!(!tx.matches("pizza"));
    }
}
