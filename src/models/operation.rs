use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::ledger::WeekKey;
use crate::models::errors::OperationError;
use crate::models::{OperationType, UserType};
use crate::types::UserId;

const FIELD_COUNT: usize = 6;

/// Represents a single row from the input CSV file.
///
/// Rows carry no header, so fields are matched by position:
/// `date,user_id,user_type,operation_type,amount,currency`.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// The calendar day of the operation (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// The client performing the operation.
    pub user_id: UserId,
    /// Private or business client.
    pub user_type: UserType,
    /// Deposit or withdrawal.
    pub operation_type: OperationType,
    /// The amount in the operation's own currency, never negative.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO currency code of `amount`.
    pub currency: String
}

impl Operation {
    /// Builds an operation from a raw CSV record, enforcing the non-negative amount invariant.
    ///
    /// # Errors
    /// Returns `OperationError::Malformed` if a field is missing, cannot be parsed,
    /// or the amount is negative.
    pub fn from_record(record: &StringRecord) -> Result<Self, OperationError> {
        let line = record.position().map(|position| position.line()).unwrap_or_default();

        if record.len() != FIELD_COUNT {
            return Err(OperationError::malformed(line, format!("expected {FIELD_COUNT} fields, found {}", record.len())));
        }

        let operation: Operation = record.deserialize(None)
            .map_err(|error| OperationError::malformed(line, error))?;

        if operation.amount < Decimal::ZERO {
            return Err(OperationError::malformed(line, format!("negative amount {}", operation.amount)));
        }

        if operation.currency.is_empty() {
            return Err(OperationError::malformed(line, "currency is required"));
        }

        Ok(operation)
    }

    /// The ISO year and week this operation falls into.
    pub fn week(&self) -> WeekKey {
        WeekKey::from_date(self.date)
    }
}
