//! Money Conversion Module
//!
//! Conversion between the internal minor-unit representation (`i64` cents)
//! and the client-facing decimal string. The wallet core only ever sees
//! minor units; every decimal string crosses this module at the HTTP edge.
//!
//! ## Usage
//! ```rust
//! use wallet_service::money::{format_minor, parse_amount};
//!
//! // Client sends "12.34"
//! let cents = parse_amount("12.34").unwrap();
//! assert_eq!(cents, 1234);
//!
//! // Display balance to client
//! assert_eq!(format_minor(1234), "12.34");
//! ```

use rust_decimal::prelude::*;
use thiserror::Error;

/// Decimal places of the wallet currency (cents).
pub const MINOR_UNIT_DECIMALS: u32 = 2;

/// Money conversion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Parse: Client → Internal (String → i64 minor units)
// ============================================================================

/// Convert a client decimal string to minor units.
///
/// Strict format: digits, optionally one dot with digits on both sides, at
/// most [`MINOR_UNIT_DECIMALS`] fractional digits. Extra precision is
/// rejected, never truncated.
///
/// # Errors
/// * `PrecisionOverflow` - more than two fractional digits
/// * `InvalidAmount` - zero amount
/// * `Overflow` - result does not fit `i64`
/// * `InvalidFormat` - anything else
pub fn parse_amount(amount_str: &str) -> Result<i64, MoneyError> {
    parse_scaled(amount_str, MINOR_UNIT_DECIMALS)
}

fn parse_scaled(amount_str: &str, decimals: u32) -> Result<i64, MoneyError> {
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    if amount_str.starts_with('-') || amount_str.starts_with('+') {
        return Err(MoneyError::InvalidAmount);
    }

    let (whole, frac) = match amount_str.split_once('.') {
        None => (amount_str, ""),
        Some((whole, frac)) => {
            if whole.is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing leading zero (e.g., use 0.5 instead of .5)".into(),
                ));
            }
            if frac.is_empty() {
                return Err(MoneyError::InvalidFormat(
                    "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
                ));
            }
            if frac.contains('.') {
                return Err(MoneyError::InvalidFormat("multiple decimal points".into()));
            }
            (whole, frac)
        }
    };

    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(format!(
            "invalid character in whole part: {}",
            whole
        )));
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat(
            "invalid character in fractional part".into(),
        ));
    }

    if frac.len() > decimals as usize {
        return Err(MoneyError::PrecisionOverflow {
            provided: frac.len() as u32,
            max: decimals,
        });
    }

    let whole_num: i64 = whole.parse().map_err(|_| MoneyError::Overflow)?;
    let frac_num: i64 = if frac.is_empty() {
        0
    } else {
        let frac_padded = format!("{:0<width$}", frac, width = decimals as usize);
        frac_padded
            .parse()
            .map_err(|_| MoneyError::InvalidFormat("invalid fractional part".into()))?
    };

    let amount = whole_num
        .checked_mul(10i64.pow(decimals))
        .and_then(|v| v.checked_add(frac_num))
        .ok_or(MoneyError::Overflow)?;

    if amount == 0 {
        return Err(MoneyError::InvalidAmount);
    }

    Ok(amount)
}

// ============================================================================
// Format: Internal → Client (i64 minor units → String)
// ============================================================================

/// Render minor units as a fixed two-decimal string.
pub fn format_minor(value: i64) -> String {
    let decimal_value = Decimal::new(value, MINOR_UNIT_DECIMALS);
    format!(
        "{:.prec$}",
        decimal_value,
        prec = MINOR_UNIT_DECIMALS as usize
    )
}
