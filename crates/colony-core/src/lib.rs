//! `colony-core` — foundational types for the colony analysis toolkit.
//!
//! This crate is a dependency of every other `colony-*` crate.  It
//! intentionally has no `colony-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `AgentId`                                     |
//! | [`time`]    | `SimTime`, `TimeWindow`                       |
//! | [`error`]   | `CoreError`, `CoreResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use time::{SimTime, TimeWindow};
