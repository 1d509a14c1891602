//! Symbol tables for the two schemes.
//!
//! Each alphabet is an ordered set of N distinct ASCII characters with a
//! direct reverse-lookup table indexed by character code.  Tables are built
//! in const context, so a duplicate or non-ASCII entry fails the build
//! rather than surfacing at runtime.

use crate::error::CodecError;

pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    index: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(symbols: &[u8; N]) -> Self {
        assert!(N <= 128);
        let mut index: [Option<u8>; 128] = [None; 128];
        let mut i = 0;
        while i < N {
            let c = symbols[i];
            assert!(c < 128, "alphabet symbols must be ASCII");
            assert!(index[c as usize].is_none(), "duplicate symbol in alphabet");
            index[c as usize] = Some(i as u8);
            i += 1;
        }
        Self { symbols: *symbols, index }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Digit → symbol.  Total: callers produce digits via masking or
    /// modular reduction, so `digit < N` holds by construction.
    #[inline]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Symbol → digit.  Exact-match and case-sensitive; `position` is the
    /// byte offset within the encoded stream, carried into the error.
    #[inline]
    pub fn index_of(&self, symbol: u8, position: u64) -> Result<u8, CodecError> {
        let digit = if symbol < 128 {
            self.index[symbol as usize]
        } else {
            None
        };
        digit.ok_or(CodecError::InvalidSymbol {
            symbol: symbol as char,
            position,
        })
    }
}

/// The 64-symbol alphabet: letters, digits, then `-` and `+`.
pub static ALPHABET64: Alphabet<64> = Alphabet::new(
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-+",
);

/// The 92-symbol alphabet: the 64-symbol set's characters in the same
/// order, followed by 28 more printables.  Independent of [`ALPHABET64`];
/// the two schemes share no wire compatibility.
pub static ALPHABET92: Alphabet<92> = Alphabet::new(
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
      -+!@#$^&*()_=<>,/'{}[]?`~|.\\;:",
);
