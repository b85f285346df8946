//! Audit logging system for Campus Planner
//!
//! Records create, update, and delete operations — and weekly reset
//! crossings — with before/after snapshots in an append-only JSONL log.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
