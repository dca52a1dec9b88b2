//! Leaderboard ranking.

use super::User;
use serde::{Deserialize, Serialize};

/// Sort direction for a ranking.
///
/// `Descending` (richest first) is the leaderboard order. `Ascending` is what
/// the old dashboard side panel produced and is only kept so a page can opt
/// into it explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingOrder {
    #[default]
    Descending,
    Ascending,
}

/// A user with its 1-based position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedUser {
    pub position: usize,
    pub user: User,
}

/// Sort users by balance and number them from 1.
///
/// The sort is stable: users with equal balances keep server order.
pub fn rank_users(mut users: Vec<User>, order: RankingOrder) -> Vec<RankedUser> {
    match order {
        RankingOrder::Descending => users.sort_by(|a, b| b.balance.cmp(&a.balance)),
        RankingOrder::Ascending => users.sort_by(|a, b| a.balance.cmp(&b.balance)),
    }

    users
        .into_iter()
        .enumerate()
        .map(|(i, user)| RankedUser {
            position: i + 1,
            user,
        })
        .collect()
}
