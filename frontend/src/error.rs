use thiserror::Error;

/// Failures of the host capabilities the view state leans on.
///
/// None of these reach the user. Every caller degrades to a fixed, fully
/// visible presentation instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("viewport observation unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("scroll signal unavailable: {0}")]
    ScrollUnavailable(String),
    #[error("visibility threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
}
