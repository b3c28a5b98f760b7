//! Domain model for tasks and goals.
//!
//! # Responsibility
//! - Define the canonical records persisted in the two-table store.
//! - Keep calendar-date parsing/formatting in one place (`date`).
//!
//! # Invariants
//! - Identifiers are assigned by the storage layer; `0` means "not yet
//!   persisted".
//! - Task/goal cross-links are plain optional ids; no referential integrity
//!   is enforced anywhere.

pub mod date;
pub mod goal;
pub mod task;

/// Sentinel id for records not yet persisted.
pub const UNASSIGNED_ID: i64 = 0;
