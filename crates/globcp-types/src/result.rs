//! Result type alias for globcp operations

use crate::Error;

/// Result type alias for globcp operations
pub type Result<T> = std::result::Result<T, Error>;
