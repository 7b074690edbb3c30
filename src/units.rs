//! IOTX denomination scaling.
//!
//! All on-chain amounts are integers in Rau, the smallest denomination.
//! Other units are fixed powers of ten of it:
//!
//! | Unit  | Rau       |
//! |-------|-----------|
//! | Rau   | 10^0      |
//! | KRau  | 10^3      |
//! | MRau  | 10^6      |
//! | Qev   | 10^9      |
//! | Jing  | 10^12     |
//! | IOTX  | 10^18     |

use std::fmt;
use std::str::FromStr;

use alloy::primitives::utils::{format_units, parse_units};
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from amount parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Negative amount '{0}' is not allowed")]
    Negative(String),

    #[error("Amount '{amount}' has more than {max} fractional digits for {unit}")]
    TooPrecise {
        amount: String,
        unit: Unit,
        max: u8,
    },

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("Amount '{0}' overflows 256 bits")]
    Overflow(String),
}

/// IOTX denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Rau,
    KRau,
    MRau,
    Qev,
    Jing,
    Iotx,
}

impl Unit {
    /// Power of ten relative to Rau.
    pub fn decimals(self) -> u8 {
        match self {
            Unit::Rau => 0,
            Unit::KRau => 3,
            Unit::MRau => 6,
            Unit::Qev => 9,
            Unit::Jing => 12,
            Unit::Iotx => 18,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Rau => "Rau",
            Unit::KRau => "KRau",
            Unit::MRau => "MRau",
            Unit::Qev => "Qev",
            Unit::Jing => "Jing",
            Unit::Iotx => "IOTX",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rau" => Ok(Unit::Rau),
            "krau" => Ok(Unit::KRau),
            "mrau" => Ok(Unit::MRau),
            "qev" => Ok(Unit::Qev),
            "jing" => Ok(Unit::Jing),
            "iotx" => Ok(Unit::Iotx),
            _ => Err(UnitsError::UnknownUnit(s.to_string())),
        }
    }
}

/// Parse a decimal amount expressed in `unit` into Rau.
pub fn parse_amount(amount: &str, unit: Unit) -> Result<U256, UnitsError> {
    let trimmed = amount.trim();
    if trimmed.starts_with('-') {
        return Err(UnitsError::Negative(amount.to_string()));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    let digits_ok = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() || !digits_ok(int_part) || !digits_ok(frac_part) {
        return Err(UnitsError::InvalidAmount(amount.to_string()));
    }
    if trimmed.contains('.') && frac_part.is_empty() {
        return Err(UnitsError::InvalidAmount(amount.to_string()));
    }

    let max = unit.decimals();
    if frac_part.len() > usize::from(max) {
        return Err(UnitsError::TooPrecise {
            amount: amount.to_string(),
            unit,
            max,
        });
    }

    if max == 0 {
        return U256::from_str_radix(int_part, 10)
            .map_err(|_| UnitsError::Overflow(amount.to_string()));
    }

    parse_units(trimmed, max)
        .map(|parsed| parsed.get_absolute())
        .map_err(|_| UnitsError::Overflow(amount.to_string()))
}

/// Format a Rau amount in `unit`, without trailing fractional zeros.
pub fn format_amount(rau: U256, unit: Unit) -> String {
    if unit.decimals() == 0 {
        return rau.to_string();
    }
    match format_units(rau, unit.decimals()) {
        Ok(formatted) => trim_fraction(&formatted),
        // format_units only fails for more than 77 decimals
        Err(_) => rau.to_string(),
    }
}

fn trim_fraction(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Convert a decimal amount between two units.
pub fn convert(amount: &str, from: Unit, to: Unit) -> Result<String, UnitsError> {
    let rau = parse_amount(amount, from)?;
    Ok(format_amount(rau, to))
}
