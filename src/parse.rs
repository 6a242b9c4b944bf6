//! Token parsing shared by the CSV store and the console
//!
//! Both the backing files and the interactive prompts use the same
//! primitive formats: integer ids, integer quantities, decimal prices,
//! `yyyy-MM-dd` dates and delimiter-separated lists.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{QuickBiteError, QuickBiteResult};

/// Date format used in files and prompts (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between fields of a record and between ids typed at a prompt
pub const FIELD_SEPARATOR: char = ',';

/// Separator between list entries inside a single order field
pub const LIST_SEPARATOR: char = ';';

/// Split a delimited list into trimmed tokens.
///
/// Trailing empty tokens are dropped, so `"1,2,"` yields `["1", "2"]`.
pub fn split_list(input: &str, separator: char) -> Vec<&str> {
    let mut tokens: Vec<&str> = input.split(separator).map(str::trim).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Parse a positive integer identifier.
pub fn parse_id(token: &str, field: &'static str) -> QuickBiteResult<u32> {
    let token = token.trim();
    token.parse::<u32>().map_err(|_| QuickBiteError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

/// Parse every token as an identifier; the first bad token fails the list.
pub fn parse_ids<S: AsRef<str>>(tokens: &[S], field: &'static str) -> QuickBiteResult<Vec<u32>> {
    tokens.iter().map(|t| parse_id(t.as_ref(), field)).collect()
}

/// Parse every token as a quantity; the first non-numeric token fails the list.
pub fn parse_quantities<S: AsRef<str>>(tokens: &[S]) -> QuickBiteResult<Vec<i32>> {
    tokens
        .iter()
        .map(|t| {
            let token = t.as_ref().trim();
            token.parse::<i32>().map_err(|_| QuickBiteError::InvalidNumber {
                field: "quantity",
                value: token.to_string(),
            })
        })
        .collect()
}

/// Parse a decimal amount (`10`, `10.50`, `1.5e1`).
pub fn parse_amount(token: &str, field: &'static str) -> QuickBiteResult<Decimal> {
    let token = token.trim();
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|_| QuickBiteError::InvalidDecimal {
            field,
            value: token.to_string(),
        })
}

/// Parse a `yyyy-MM-dd` calendar date.
pub fn parse_date(input: &str) -> QuickBiteResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| QuickBiteError::InvalidDate {
        value: input.to_string(),
    })
}
