//! Wire types for user responses (REST).

use serde::{Deserialize, Serialize};

/// Response of `GET /api/user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub name: String,
    pub balance: serde_json::Number,
}

/// One element of `GET /api/user/everybody`.
///
/// The list endpoint names the amount `sum`; `balance` is accepted as a
/// fallback in case the backend aligns it with the single-user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EverybodyEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<serde_json::Number>,
}

/// Response of `GET /api/user/everybody`.
pub type EverybodyResponse = Vec<EverybodyEntry>;
