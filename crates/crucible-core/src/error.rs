//! Framework misuse errors.

use thiserror::Error;

/// Errors raised by suite registration.
///
/// Assertion failures are never errors at this level; they are captured per
/// case. Only misuse of the registration API is surfaced here, and callers
/// must not ignore it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    #[error("suite capacity exceeded: limit is {limit} cases")]
    CapacityExceeded { limit: usize },
}
