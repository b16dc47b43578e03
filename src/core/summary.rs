//! Income, outcome and balance totals over a transaction list.
use crate::core::transaction::Transaction;

/// Totals in minor units. `outcome` is a magnitude, so `total = income - outcome`.
/// Accumulated as `i128` so no sum of `i64` amounts can overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: i128,
    pub outcome: i128,
    pub total: i128,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (income, outcome) =
            transactions
                .iter()
                .fold((0i128, 0i128), |(income, outcome), tx| {
                    let amount = i128::from(tx.amount);
                    if amount > 0 {
                        (income + amount, outcome)
                    } else {
                        (income, outcome - amount)
                    }
                });

        Self {
            income,
            outcome,
            total: income - outcome,
        }
    }
}
