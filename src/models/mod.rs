mod errors;
mod operation;
#[cfg(test)]
mod tests;

use serde::Deserialize;

pub use errors::OperationError;
pub use operation::Operation;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Private,
    Business
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdraw
}
