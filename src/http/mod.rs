//! HTTP client layer: `BoardHttp` and the outcome it produces.

pub mod client;
pub mod outcome;

pub use client::BoardHttp;
pub use outcome::{RequestOutcome, ResponsePayload};
