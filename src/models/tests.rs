use super::{Operation, OperationError, OperationType, UserType};

use anyhow::Result;
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal_macros::dec;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_operation_parses_a_well_formed_record() -> Result<()> {
    let operation = Operation::from_record(&record(&["2016-01-05", "4", "private", "withdraw", "1000.00", "EUR"]))?;

    assert_eq!(operation.date, NaiveDate::from_ymd_opt(2016, 1, 5).unwrap());
    assert_eq!(operation.user_id, 4);
    assert_eq!(operation.user_type, UserType::Private);
    assert_eq!(operation.operation_type, OperationType::Withdraw);
    assert_eq!(operation.amount, dec!(1000.00));
    assert_eq!(operation.currency, "EUR");

    Ok(())
}

#[test]
fn test_operation_keeps_exact_decimal_amounts() -> Result<()> {
    let operation = Operation::from_record(&record(&["2016-01-06", "1", "business", "deposit", "30000", "JPY"]))?;

    assert_eq!(operation.amount, dec!(30000));
    assert_eq!(operation.user_type, UserType::Business);
    assert_eq!(operation.operation_type, OperationType::Deposit);

    Ok(())
}

#[test]
fn test_operation_rejects_malformed_records() {
    let test_cases = vec![
        vec!["2016-13-05", "4", "private", "withdraw", "1000.00", "EUR"],
        vec!["2016-01-05", "-4", "private", "withdraw", "1000.00", "EUR"],
        vec!["2016-01-05", "4", "corporate", "withdraw", "1000.00", "EUR"],
        vec!["2016-01-05", "4", "private", "transfer", "1000.00", "EUR"],
        vec!["2016-01-05", "4", "private", "withdraw", "ten", "EUR"],
        vec!["2016-01-05", "4", "private", "withdraw", "-1.00", "EUR"],
        vec!["2016-01-05", "4", "private", "withdraw", "1000.00", ""],
        vec!["2016-01-05", "4", "private", "withdraw", "1000.00"],
        vec!["2016-01-05", "4", "private", "withdraw", "1000.00", "EUR", "extra"],
    ];

    for fields in test_cases {
        let result = Operation::from_record(&record(&fields));

        assert!(matches!(result, Err(OperationError::Malformed { .. })), "accepted {fields:?}");
    }
}

#[test]
fn test_operation_week_follows_iso_year_boundaries() -> Result<()> {
    let new_years_eve = Operation::from_record(&record(&["2014-12-31", "4", "private", "withdraw", "1200.00", "EUR"]))?;
    let new_years_day = Operation::from_record(&record(&["2015-01-01", "4", "private", "withdraw", "1000.00", "EUR"]))?;

    assert_eq!(new_years_eve.week(), new_years_day.week());
    assert_eq!(new_years_eve.week().year, 2015);
    assert_eq!(new_years_eve.week().week, 1);

    Ok(())
}
