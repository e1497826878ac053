use crate::log_channel::LogChannel;
use crate::transaction::Transaction;
use rust_decimal::Decimal;

/// Decimal places used when logging amounts.
const LOGGED_DP: u32 = 2;

/// Sum of all amounts, `0` for no transactions. `None` when the sum leaves the `Decimal` range.
pub fn total_value(transactions: &[Transaction]) -> Option<Decimal> {
    transactions
        .iter()
        .map(Transaction::amount)
        .try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Largest amount, floored at `0`.
pub fn max_value(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .map(Transaction::amount)
        .fold(Decimal::ZERO, Decimal::max)
}

/// Aggregate statistics over every imported transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub total: Option<Decimal>,
    pub max: Decimal,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        Summary {
            count: transactions.len(),
            total: total_value(transactions),
            max: max_value(transactions),
        }
    }

    pub fn log(&self, log: &LogChannel<'_>) {
        log.info(format_args!("{} transactions imported", self.count));
        match self.total {
            Some(total) => log.info(format_args!("total value: {:.2}", total.round_dp(LOGGED_DP))),
            None => log.warn(
                format_args!("total value: overflow, sum exceeds {}", Decimal::MAX),
                None,
            ),
        }
        log.info(format_args!("max value: {:.2}", self.max.round_dp(LOGGED_DP)));
    }
}
