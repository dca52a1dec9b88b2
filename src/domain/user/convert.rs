//! Conversions from wire types to domain types for users.

use super::wire::{EverybodyEntry, UserResponse};
use super::User;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Why a wire user could not become a `User`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserConversionError {
    MissingBalance { name: String },
    InvalidBalance { name: String, raw: String },
}

impl std::fmt::Display for UserConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserConversionError::MissingBalance { name } => {
                write!(f, "user {:?} has neither `sum` nor `balance`", name)
            }
            UserConversionError::InvalidBalance { name, raw } => {
                write!(f, "user {:?} has an unrepresentable balance {}", name, raw)
            }
        }
    }
}

fn parse_amount(name: &str, raw: &serde_json::Number) -> Result<Decimal, UserConversionError> {
    let text = raw.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| UserConversionError::InvalidBalance {
            name: name.to_string(),
            raw: text,
        })
}

impl TryFrom<UserResponse> for User {
    type Error = UserConversionError;

    fn try_from(resp: UserResponse) -> Result<Self, Self::Error> {
        let balance = parse_amount(&resp.name, &resp.balance)?;
        Ok(User::new(resp.name, balance))
    }
}

impl TryFrom<EverybodyEntry> for User {
    type Error = UserConversionError;

    fn try_from(entry: EverybodyEntry) -> Result<Self, Self::Error> {
        let raw = match (&entry.sum, &entry.balance) {
            (Some(sum), _) => sum,
            (None, Some(balance)) => {
                tracing::warn!(user = %entry.name, "List entry has no `sum`, using `balance`");
                balance
            }
            (None, None) => {
                return Err(UserConversionError::MissingBalance { name: entry.name });
            }
        };
        let balance = parse_amount(&entry.name, raw)?;
        Ok(User::new(entry.name, balance))
    }
}
