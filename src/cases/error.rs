//! Construction-time error type for test cases.
//!
//! Evaluation (`initial*`, `describe`) is total and never fails; the only
//! error class in this crate is caller misconfiguration at construction
//! or registry lookup time.

use thiserror::Error;

/// Error raised when a test case cannot be constructed as requested.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidParameter {
    /// Override refers to a parameter the case does not have.
    #[error("unknown parameter `{name}` for test case {case}")]
    UnknownName { case: &'static str, name: String },

    /// Override value violates the case's physical range.
    #[error("parameter `{name}` = {value} out of range for test case {case}: {constraint}")]
    OutOfRange {
        case: &'static str,
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Override value is NaN or infinite.
    #[error("parameter `{name}` = {value} for test case {case} is not finite")]
    NotFinite {
        case: &'static str,
        name: String,
        value: f64,
    },

    /// Registry lookup with a name no case registers under.
    #[error("unknown test case `{0}`")]
    UnknownCase(String),
}
