//! Block codecs: fixed-size raw chunk ↔ fixed-size symbol chunk via
//! positional base conversion.
//!
//! Both schemes treat the raw chunk as one big-endian unsigned integer and
//! emit its base-N digits most-significant first.  A short final chunk is
//! zero-padded on the least-significant side before conversion, so the
//! padding occupies the tail of the integer; the length header (see
//! `frame`) tells the decoder how many of the recovered bytes are real.

use crate::alphabet::{ALPHABET64, ALPHABET92};
use crate::error::CodecError;

/// One of the two fixed-block encodings.  Implementations are stateless;
/// a `Scheme` is only a compile-time selector for block geometry and
/// alphabet.
pub trait Scheme {
    /// Raw bytes consumed per block.
    const RAW_SIZE: usize;
    /// Symbols produced per block.
    const SYM_SIZE: usize;
    /// Program/diagnostic name.
    const NAME: &'static str;

    /// Encode up to `RAW_SIZE` bytes into exactly `SYM_SIZE` symbols.
    /// Total over its input domain: a short slice (the final block of a
    /// stream) is zero-padded before conversion and never fails.
    fn encode_block(raw: &[u8]) -> Vec<u8>;

    /// Decode exactly `SYM_SIZE` symbols into exactly `RAW_SIZE` bytes.
    ///
    /// `stream_pos` is the offset of `symbols[0]` within the encoded
    /// stream; it is carried into [`CodecError::InvalidSymbol`] so the
    /// caller can point at the offending character.  The block codec
    /// cannot know how many of the returned bytes are real for a final
    /// block — truncation against the length header is the caller's job.
    fn decode_block(symbols: &[u8], stream_pos: u64) -> Result<Vec<u8>, CodecError>;
}

/// 64-symbol scheme: 4 raw bytes ↔ 6 symbols.
///
/// The 32-bit block value occupies the high bits of a 36-bit field (the
/// low 4 bits are reserved and always zero on encode), and each symbol is
/// one 6-bit digit of that field, most-significant first.
pub struct Base64z;

impl Scheme for Base64z {
    const RAW_SIZE: usize = 4;
    const SYM_SIZE: usize = 6;
    const NAME: &'static str = "base64z";

    fn encode_block(raw: &[u8]) -> Vec<u8> {
        debug_assert!(raw.len() <= Self::RAW_SIZE);
        let mut value: u32 = 0;
        for (i, &b) in raw.iter().enumerate() {
            value |= (b as u32) << (8 * (3 - i));
        }
        let padded = (value as u64) << 4;
        (0..Self::SYM_SIZE)
            .map(|i| {
                let digit = ((padded >> (36 - 6 * (i + 1))) & 0x3F) as u8;
                ALPHABET64.symbol(digit)
            })
            .collect()
    }

    fn decode_block(symbols: &[u8], stream_pos: u64) -> Result<Vec<u8>, CodecError> {
        debug_assert_eq!(symbols.len(), Self::SYM_SIZE);
        let mut combined: u64 = 0;
        for (i, &s) in symbols.iter().enumerate() {
            let digit = ALPHABET64.index_of(s, stream_pos + i as u64)?;
            combined |= (digit as u64) << (36 - 6 * (i + 1));
        }
        // Drop the 4 reserved low bits to recover the 32-bit value.
        let value = (combined >> 4) as u32;
        Ok(value.to_be_bytes().to_vec())
    }
}

/// 92-symbol scheme: 5 raw bytes ↔ 7 symbols.
///
/// Plain base-92 positional conversion of a 40-bit value.  92^7 exceeds
/// 2^40, so some 7-symbol combinations are unreachable by any encode;
/// they still decode consistently by taking the low 40 bits of the
/// accumulated value.
pub struct Base92z;

impl Scheme for Base92z {
    const RAW_SIZE: usize = 5;
    const SYM_SIZE: usize = 7;
    const NAME: &'static str = "base92z";

    fn encode_block(raw: &[u8]) -> Vec<u8> {
        debug_assert!(raw.len() <= Self::RAW_SIZE);
        let mut value: u64 = 0;
        for &b in raw {
            value = (value << 8) | b as u64;
        }
        // Zero-pad the missing low-order bytes of a short final block.
        value <<= 8 * (Self::RAW_SIZE - raw.len()) as u32;

        let mut out = vec![0u8; Self::SYM_SIZE];
        for slot in out.iter_mut().rev() {
            *slot = ALPHABET92.symbol((value % 92) as u8);
            value /= 92;
        }
        out
    }

    fn decode_block(symbols: &[u8], stream_pos: u64) -> Result<Vec<u8>, CodecError> {
        debug_assert_eq!(symbols.len(), Self::SYM_SIZE);
        let mut value: u64 = 0;
        for (i, &s) in symbols.iter().enumerate() {
            let digit = ALPHABET92.index_of(s, stream_pos + i as u64)?;
            value = value * 92 + digit as u64;
        }
        // Low 40 bits, big-endian.
        Ok(value.to_be_bytes()[3..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64z_known_block() {
        // (0x00010203 << 4) split into six 6-bit digits: 0,0,4,2,0,48.
        let encoded = Base64z::encode_block(&[0x00, 0x01, 0x02, 0x03]);
        assert_eq!(encoded, b"aaecaW");
        let decoded = Base64z::decode_block(&encoded, 16).unwrap();
        assert_eq!(decoded, [0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn base92z_known_block() {
        // 0x41 padded to 5 bytes: digits 0,42,32,84,90,59,44.
        let encoded = Base92z::encode_block(&[0x41]);
        assert_eq!(encoded, b"aQG?;7S");
        let decoded = Base92z::decode_block(&encoded, 16).unwrap();
        assert_eq!(decoded, [0x41, 0, 0, 0, 0]);
    }

    #[test]
    fn encode_width_is_fixed() {
        for len in 1..=Base64z::RAW_SIZE {
            assert_eq!(Base64z::encode_block(&vec![0xFF; len]).len(), 6);
        }
        for len in 1..=Base92z::RAW_SIZE {
            assert_eq!(Base92z::encode_block(&vec![0xFF; len]).len(), 7);
        }
    }

    #[test]
    fn short_block_pads_low_order_side() {
        // [0xAB] and [0xAB, 0, 0, 0] are the same 32-bit value.
        assert_eq!(
            Base64z::encode_block(&[0xAB]),
            Base64z::encode_block(&[0xAB, 0, 0, 0]),
        );
        assert_eq!(
            Base92z::encode_block(&[0xAB, 0xCD]),
            Base92z::encode_block(&[0xAB, 0xCD, 0, 0, 0]),
        );
    }

    #[test]
    fn full_range_blocks_round_trip() {
        for block in [[0u8; 4], [0xFF; 4], [0x12, 0x34, 0x56, 0x78]] {
            let enc = Base64z::encode_block(&block);
            assert_eq!(Base64z::decode_block(&enc, 0).unwrap(), block);
        }
        for block in [[0u8; 5], [0xFF; 5], [0xDE, 0xAD, 0xBE, 0xEF, 0x01]] {
            let enc = Base92z::encode_block(&block);
            assert_eq!(Base92z::decode_block(&enc, 0).unwrap(), block);
        }
    }

    #[test]
    fn invalid_symbol_reports_stream_position() {
        let mut encoded = Base64z::encode_block(&[1, 2, 3, 4]);
        encoded[2] = b'!';
        match Base64z::decode_block(&encoded, 100) {
            Err(CodecError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, '!');
                assert_eq!(position, 102);
            }
            other => panic!("expected InvalidSymbol, got {other:?}"),
        }
    }

    #[test]
    fn base92z_over_range_block_decodes() {
        // Seven copies of the highest symbol exceed 2^40 but must still
        // decode to some 5-byte value rather than fail.
        let top = vec![b':'; 7];
        assert_eq!(Base92z::decode_block(&top, 0).unwrap().len(), 5);
    }
}
