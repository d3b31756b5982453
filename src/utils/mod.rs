//! Utility modules
//!
//! - Error types and result types
//! - Loss auditing for degraded output

pub mod error;
pub mod loss;

pub use error::{Result, VfmtError};
pub use loss::{audit, LossKind, LossRecord, LossReport};
