//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditReport, Violation, check_pair, run_audit};
pub use check::{CheckResult, check_guess};
pub use simple::{SimpleOptions, run_simple};
