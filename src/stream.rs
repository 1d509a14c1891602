//! Stream drivers — the read/write loop between a byte source or sink and
//! the block codec.
//!
//! # Encode
//! [`encode_stream`] writes the length header once, then one fixed-width
//! encoded block per `RAW_SIZE`-sized read, including a final zero-padded
//! block when the payload length is not a block multiple.  An empty input
//! still gets a header of `0000000000000000` and zero blocks.
//!
//! # Decode
//! [`decode_stream`] reads the header, then consumes `SYM_SIZE`-sized
//! symbol chunks until exactly the declared number of raw bytes has been
//! written.  The final block's trailing padding bytes are discarded here,
//! never validated — their value is undefined by the format.  EOF before
//! the declared length is a hard [`CodecError::TruncatedStream`].

use std::io::{self, Read, Write};

use crate::block::Scheme;
use crate::error::CodecError;
use crate::frame::{self, HEADER_LEN};

/// Read until `buf` is full or EOF.  Returns the number of bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Encode everything `src` yields into `dst`, prefixed by a header
/// declaring `total` bytes.  `total` is obtained independently by the
/// caller (file size, buffer length) and is what the decoder will trust.
pub fn encode_stream<S, R, W>(mut src: R, mut dst: W, total: u64) -> Result<(), CodecError>
where
    S: Scheme,
    R: Read,
    W: Write,
{
    frame::write_header(&mut dst, total)?;

    let mut raw = vec![0u8; S::RAW_SIZE];
    loop {
        let n = read_full(&mut src, &mut raw)?;
        if n == 0 {
            break;
        }
        dst.write_all(&S::encode_block(&raw[..n]))?;
    }
    Ok(())
}

/// Decode an encoded stream from `src` into `dst`.  Returns the number of
/// raw bytes written, which on success always equals the header's declared
/// length.
pub fn decode_stream<S, R, W>(mut src: R, mut dst: W) -> Result<u64, CodecError>
where
    S: Scheme,
    R: Read,
    W: Write,
{
    let total = frame::read_header(&mut src)?;

    let mut symbols = vec![0u8; S::SYM_SIZE];
    let mut emitted: u64 = 0;
    let mut stream_pos = HEADER_LEN as u64;

    while emitted < total {
        let n = read_full(&mut src, &mut symbols)?;
        if n < S::SYM_SIZE {
            return Err(CodecError::TruncatedStream {
                expected: total,
                emitted,
            });
        }
        let raw = S::decode_block(&symbols, stream_pos)?;

        // Only the bytes the header accounts for; the rest is padding.
        let take = (total - emitted).min(S::RAW_SIZE as u64) as usize;
        dst.write_all(&raw[..take])?;
        emitted += take as u64;
        stream_pos += S::SYM_SIZE as u64;
    }
    Ok(emitted)
}

/// In-memory encode.  Output capacity is exact: header plus one symbol
/// block per started raw block.
pub fn encode_to_vec<S: Scheme>(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    let blocks = payload.len().div_ceil(S::RAW_SIZE);
    let mut out = Vec::with_capacity(HEADER_LEN + blocks * S::SYM_SIZE);
    encode_stream::<S, _, _>(payload, &mut out, payload.len() as u64)?;
    Ok(out)
}

/// In-memory decode.
pub fn decode_to_vec<S: Scheme>(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    decode_stream::<S, _, _>(encoded, &mut out)?;
    Ok(out)
}
