//! Crate-wide error type. The five structural variants correspond to the
//! numbered invalid-input codes in the file-format contract; `code()` is the
//! only place those numbers appear - the library itself never prints them.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("edge permutation is not a valid permutation of the twelve edges")]
    InvalidEdgePerm,
    #[error("sum of edge orientations is not divisible by 2")]
    BadFlipParity,
    #[error("corner permutation is not a valid permutation of the eight corners")]
    InvalidCornerPerm,
    #[error("sum of corner orientations is not divisible by 3")]
    BadTwistParity,
    #[error("corner permutation parity does not match edge permutation parity")]
    ParityMismatch,
    #[error("no solution found within the maximum search depth")]
    DepthExhausted,
    #[error("search exceeded the time budget")]
    Timeout,

    #[error("malformed cube definition: {0}")]
    InvalidFaceletString(String),
    #[error("invalid move string: {0}")]
    InvalidScramble(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TableEncode(#[from] bincode::error::EncodeError),
    #[error(transparent)]
    TableDecode(#[from] bincode::error::DecodeError),
}

impl Error {
    /// Numeric code for the CLI's "Error N" message. Only defined for the
    /// five structural variants plus the two search-exhaustion variants;
    /// ambient I/O/parsing errors are reported by their own message instead.
    pub fn code(&self) -> Option<u8> {
        match self {
            Error::InvalidEdgePerm => Some(2),
            Error::BadFlipParity => Some(3),
            Error::InvalidCornerPerm => Some(4),
            Error::BadTwistParity => Some(5),
            Error::ParityMismatch => Some(6),
            Error::DepthExhausted => Some(7),
            Error::Timeout => Some(8),
            Error::InvalidFaceletString(_)
            | Error::InvalidScramble(_)
            | Error::Io(_)
            | Error::TableEncode(_)
            | Error::TableDecode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_codes_match_the_file_format_contract() {
        assert_eq!(Error::InvalidEdgePerm.code(), Some(2));
        assert_eq!(Error::BadFlipParity.code(), Some(3));
        assert_eq!(Error::InvalidCornerPerm.code(), Some(4));
        assert_eq!(Error::BadTwistParity.code(), Some(5));
        assert_eq!(Error::ParityMismatch.code(), Some(6));
        assert_eq!(Error::DepthExhausted.code(), Some(7));
        assert_eq!(Error::Timeout.code(), Some(8));
    }
}
