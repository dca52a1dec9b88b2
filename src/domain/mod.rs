//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with the accessor methods

pub mod user;
