//! Errors raised while constructing primitive values.

use thiserror::Error;

/// Invalid primitive input. Always a caller or configuration defect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Unknown consultant rank '{0}'")]
    UnknownRank(String),

    #[error("Upline depth {depth} outside the supported range 1..={max}")]
    UplineDepthOutOfRange { depth: usize, max: usize },

    #[error("Upline depth {depth} appears more than once")]
    DuplicateUplineDepth { depth: u8 },
}

pub type TypesResult<T> = Result<T, TypesError>;
