use crate::error::LineError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// `dd-mm-yyyy`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One line of a transactions file, before any field is converted.
#[derive(Debug, Deserialize)]
pub struct TransactionRaw {
    pub id: String,
    pub amount: String,
    pub date: String,
}

/// A successfully parsed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: String,
    amount: Decimal,
    date: NaiveDate,
}

impl Transaction {
    pub fn new(id: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Transaction { id: id.into(), amount, date }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<TransactionRaw> for Transaction {
    type Error = LineError;

    fn try_from(raw: TransactionRaw) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&raw.amount).map_err(|source| LineError::Amount {
            text: raw.amount.clone(),
            source,
        })?;
        let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|source| LineError::Date {
            text: raw.date.clone(),
            source,
        })?;
        Ok(Transaction::new(raw.id, amount, date))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.id(), self.amount(), self.date().format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(id: &str, amount: &str, date: &str) -> TransactionRaw {
        TransactionRaw {
            id: id.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_parse_valid() {
        let transaction = Transaction::try_from(raw("A", "100.00", "01-02-2020")).unwrap();
        assert_eq!(transaction.id(), "A");
        assert_eq!(transaction.amount(), dec!(100.00));
        assert_eq!(transaction.date(), NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_negative_amount() {
        let transaction = Transaction::try_from(raw("R", "-5.25", "31-12-2019")).unwrap();
        assert_eq!(transaction.amount(), dec!(-5.25));
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = Transaction::try_from(raw("B", "bad", "02-01-2020")).unwrap_err();
        assert!(matches!(err, LineError::Amount { ref text, .. } if text == "bad"));
    }

    #[test]
    fn test_parse_invalid_date() {
        for date in ["2020-01-02", "32-01-2020", "01/02/2020", ""] {
            let err = Transaction::try_from(raw("D", "1.00", date)).unwrap_err();
            assert!(matches!(err, LineError::Date { .. }), "accepted date {date:?}");
        }
    }

    #[test]
    fn test_display_uses_input_date_format() {
        let transaction = Transaction::new("A", dec!(100.00), NaiveDate::from_ymd_opt(2020, 1, 3).unwrap());
        assert_eq!(transaction.to_string(), "A, 100.00, 03-01-2020");
    }
}
