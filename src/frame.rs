//! Length-header framing.
//!
//! Every encoded stream starts with the original payload's byte count as
//! exactly 16 lowercase hexadecimal characters, zero-padded, no newline.
//! The header is what lets the decoder stop at the right byte despite the
//! fixed-width block padding; nothing else in the stream marks the end.

use std::io::{Read, Write};

use crate::error::CodecError;

/// Header width in bytes.  A 64-bit length in hex text.
pub const HEADER_LEN: usize = 16;

/// Write `total` as the 16-character header.
pub fn write_header<W: Write>(mut writer: W, total: u64) -> Result<(), CodecError> {
    let hex = hex::encode(total.to_be_bytes());
    debug_assert_eq!(hex.len(), HEADER_LEN);
    writer.write_all(hex.as_bytes())?;
    Ok(())
}

/// Read the 16-character header and return the declared payload length.
///
/// Fails with [`CodecError::MalformedHeader`] if fewer than 16 characters
/// are available or the text is not valid hexadecimal.  Uppercase digits
/// are accepted on read; only lowercase is ever written.
pub fn read_header<R: Read>(mut reader: R) -> Result<u64, CodecError> {
    let mut text = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut text)
        .map_err(|_| CodecError::MalformedHeader)?;

    let mut bytes = [0u8; 8];
    hex::decode_to_slice(text, &mut bytes).map_err(|_| CodecError::MalformedHeader)?;
    Ok(u64::from_be_bytes(bytes))
}
