//! Errors raised by the pure algorithm

use core::fmt;

/// Failure of a cache, dataset or hashimoto computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size or index the algorithm cannot work with
    InvalidInput(&'static str),
    /// A dataset row could not be produced or was malformed
    DatasetCorruption { index: u64, reason: &'static str },
    /// A dataset build observed its cancellation flag
    Cancelled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            Error::DatasetCorruption { index, reason } => {
                write!(f, "dataset corruption at item {}: {}", index, reason)
            }
            Error::Cancelled => f.write_str("dataset build cancelled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
