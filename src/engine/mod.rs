//! Allowance cycle engine
//!
//! Owns the weekly budget/expense arithmetic and the reset transition. Every
//! surface (CLI commands, reports, exports) goes through these operations so
//! they all compute identical results. The engine is pure in-memory state
//! transition: no I/O, and the clock is always an explicit argument.

mod cycle;

pub use cycle::{CycleState, ResetOutcome};
