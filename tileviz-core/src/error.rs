use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two or more of index, shape and tiling passed to one operation disagree in length.
    #[error("{op}: rank mismatch, expected {expected} but found {found}")]
    RankMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{op}: extent along axis {axis} must be positive")]
    InvalidDimension { op: &'static str, axis: usize },
    #[error("{op}: padded extents overflow at axis {axis}")]
    SizeOverflow { op: &'static str, axis: usize },
    #[error("unsupported number of {what} dimensions: {rank}")]
    UnsupportedRank { what: &'static str, rank: usize },
    #[error("invalid shape descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("unknown element type `{0}`")]
    UnknownElementType(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::RankMismatch`] unless `found == expected`.
pub(crate) fn check_rank(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::RankMismatch {
            op,
            expected,
            found,
        });
    }
    Ok(())
}

/// Fails with [`Error::InvalidDimension`] on the first zero extent.
pub(crate) fn check_positive(op: &'static str, dims: &[usize]) -> Result<()> {
    match dims.iter().position(|&d| d == 0) {
        Some(axis) => Err(Error::InvalidDimension { op, axis }),
        None => Ok(()),
    }
}
