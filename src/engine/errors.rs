use thiserror::Error;

use crate::models::{Operation, OperationType, UserType};
use crate::types::UserId;

#[derive(Debug, Error)]
pub enum CommissionError {
    #[error("Numeric overflow computing the fee of a {user_type:?} {operation_type:?} of {amount} {currency} for client [{user_id}]")]
    Overflow {
        user_id: UserId,
        user_type: UserType,
        operation_type: OperationType,
        amount: String,
        currency: String
    }
}

impl CommissionError {
    pub fn overflow(operation: &Operation) -> Self {
        Self::Overflow {
            user_id: operation.user_id,
            user_type: operation.user_type,
            operation_type: operation.operation_type,
            amount: operation.amount.to_string(),
            currency: operation.currency.clone()
        }
    }
}
