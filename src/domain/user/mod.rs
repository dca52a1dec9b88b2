//! User domain: profile, balance, and leaderboard ranking.

pub mod client;
mod convert;
pub mod ranking;
pub mod wire;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use convert::UserConversionError;
pub use ranking::{rank_users, RankedUser, RankingOrder};

/// A user and their current balance.
///
/// Built fresh from every response; nothing holds on to it past a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub balance: Decimal,
}

impl User {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// One-line `"<name> | <balance>"` representation.
    pub fn summary(&self) -> String {
        format!("{} | {}", self.name, self.balance)
    }

    /// Balance with two decimals and the currency sign, e.g. `"12.50 €"`.
    pub fn formatted_balance(&self) -> String {
        let rounded = self
            .balance
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2} €", rounded)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
