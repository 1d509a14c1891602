use std::io;
use thiserror::Error;

/// Errors surfaced by the codec and its stream drivers.
///
/// Every variant aborts only the current encode/decode operation.  Nothing
/// in this crate terminates the process on bad input; the caller decides
/// whether to abort the whole stream or report and move on.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("cannot read input: {0}")]
    SourceUnavailable(io::Error),
    #[error("cannot write output: {0}")]
    SinkUnavailable(io::Error),
    /// The 16-character length header is missing or not valid hexadecimal.
    #[error("length header missing or not valid hex")]
    MalformedHeader,
    /// The header promised more payload bytes than the blocks present can
    /// supply.  `emitted` counts the raw bytes recovered before EOF.
    #[error("encoded stream truncated: expected {expected} bytes, recovered {emitted}")]
    TruncatedStream { expected: u64, emitted: u64 },
    /// A character outside the active alphabet where a symbol was expected.
    /// `position` is the byte offset within the encoded stream.
    #[error("invalid symbol {symbol:?} at stream position {position}")]
    InvalidSymbol { symbol: char, position: u64 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
