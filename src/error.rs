use thiserror::Error;

/// Every way a call into this crate can fail.
///
/// `solve` never panics and never throws; every branch below is surfaced
/// as a `"Error: ..."`-prefixed string per the public API contract.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid cubestring length")]
    InvalidLength,

    #[error("bad character")]
    BadCharacter,

    #[error("bad color count")]
    BadColorCount,

    #[error("bad center")]
    BadCenter,

    #[error("bad edge")]
    BadEdge,

    #[error("bad corner")]
    BadCorner,

    #[error("bad flip")]
    BadFlip,

    #[error("bad twist")]
    BadTwist,

    #[error("bad parity")]
    BadParity,

    #[error("no solution in limit")]
    NoSolutionInLimit,

    #[error("timeout")]
    Timeout,

    #[error("invalid move string: {0}")]
    InvalidScramble(String),

    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("cache decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl Error {
    /// Render as the `"Error: <reason>"` string the public `solve` API returns.
    pub fn to_solve_string(&self) -> String {
        let reason = match self {
            Error::InvalidLength => "invalid cubestring length",
            Error::BadCharacter => "bad character",
            Error::BadColorCount => "bad color count",
            Error::BadCenter => "bad color count",
            Error::BadEdge => "bad edge",
            Error::BadCorner => "bad corner",
            Error::BadFlip => "bad flip",
            Error::BadTwist => "bad twist",
            Error::BadParity => "bad parity",
            Error::NoSolutionInLimit => "no solution in limit",
            Error::Timeout => "timeout",
            Error::InvalidScramble(_) => "bad character",
            // Cache corruption/I-O never reaches a caller of `solve`: the cache layer
            // treats these as a cache miss and regenerates the tables instead (spec §7).
            Error::Io(_) | Error::Encode(_) | Error::Decode(_) => "internal table error",
        };
        format!("Error: {reason}")
    }
}
