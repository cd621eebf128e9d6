use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::engine::CommissionError;
use crate::ledger::Ledger;
use crate::models::{Operation, OperationType, UserType};
use crate::rates::CurrencyConverter;
use crate::types::Fee;

const DEPOSIT_RATE: Decimal = dec!(0.0003);
const BUSINESS_WITHDRAW_RATE: Decimal = dec!(0.005);
const PRIVATE_WITHDRAW_RATE: Decimal = dec!(0.003);
const FREE_ALLOWANCE_EUR: Decimal = dec!(1000);
const FREE_WITHDRAWALS_PER_WEEK: u32 = 3;

/// Maps each operation to its commission fee.
///
/// Deposits and business withdrawals are flat percentages. Private withdrawals
/// draw on a weekly free allowance tracked in the ledger, so operations must be
/// fed in input order.
pub struct CommissionEngine<L: Ledger> {
    converter: CurrencyConverter,
    ledger: L
}

impl<L: Ledger> CommissionEngine<L> {
    pub fn new(converter: CurrencyConverter, ledger: L) -> Self {
        Self {
            converter,
            ledger
        }
    }

    /// Computes the fee for one operation, updating the ledger for private withdrawals.
    ///
    /// # Errors
    /// Returns `CommissionError::Overflow` if the amount is too large to convert or charge.
    /// The ledger is left untouched in that case.
    pub fn calculate(&mut self, operation: &Operation) -> Result<Fee, CommissionError> {
        let raw = match (operation.operation_type, operation.user_type) {
            (OperationType::Deposit, _) => operation.amount.checked_mul(DEPOSIT_RATE),
            (OperationType::Withdraw, UserType::Business) => operation.amount.checked_mul(BUSINESS_WITHDRAW_RATE),
            (OperationType::Withdraw, UserType::Private) => self.private_withdraw(operation)
        };

        let fee = Fee::round_up(raw.ok_or_else(|| CommissionError::overflow(operation))?);

        debug!(
            "Client [{}] {:?} {:?} {} {} charged [{fee}]",
            operation.user_id, operation.user_type, operation.operation_type, operation.amount, operation.currency
        );

        Ok(fee)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    fn private_withdraw(&mut self, operation: &Operation) -> Option<Decimal> {
        let week = operation.week();
        let usage = self.ledger.get(operation.user_id, week);

        if usage.count >= FREE_WITHDRAWALS_PER_WEEK {
            return operation.amount.checked_mul(PRIVATE_WITHDRAW_RATE);
        }

        let amount_eur = self.converter.convert_to_eur(operation.amount, &operation.currency)?;
        let week_total_eur = usage.total_eur.checked_add(amount_eur)?;

        if week_total_eur <= FREE_ALLOWANCE_EUR {
            self.ledger.update(operation.user_id, week, amount_eur, 1);
            return Some(Decimal::ZERO);
        }

        //NOTE: Exceeding portion in the operation's currency: the amount less what is left of the allowance
        let remaining_eur = FREE_ALLOWANCE_EUR - usage.total_eur;
        let remaining = self.converter.convert_from_eur(remaining_eur, &operation.currency)?;
        let exceeded = operation.amount.checked_sub(remaining)?.max(Decimal::ZERO);
        let raw = exceeded.checked_mul(PRIVATE_WITHDRAW_RATE)?;

        //NOTE: Only fully free withdrawals advance the count, an overflowing one just caps the total
        self.ledger.set_total(operation.user_id, week, FREE_ALLOWANCE_EUR);

        Some(raw)
    }
}
