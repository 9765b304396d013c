//! Audit logging for contact changes
//!
//! Records every contact create, update and delete with before/after
//! snapshots in an append-only audit log.
//!
//! - `AuditEntry`: one entry with timestamp, operation, contact name and
//!   optional before/after values.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL).
//! - `generate_diff`: human-readable summary of what changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
