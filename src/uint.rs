use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::size;

mod arith;

/// An unsigned arbitrary-precision integer stored least-significant word
/// first.
///
/// The representation is canonical at all times: the word vector is never
/// empty, and its top word is non-zero unless the value is zero, which is
/// exactly `[0]`. All mutating operations work in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeUint {
    words: Vec<u64>,
}

/// Failure to load a value from an input byte sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadError {
    EmptyBytes,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for LoadError {}

impl LeUint {
    /// The value zero, as its canonical single-word representation.
    pub fn zero() -> Self {
        Self { words: vec![0] }
    }

    /// Build a value from a non-empty little-endian byte sequence.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut out = Self::zero();
        out.set_le_bytes(bytes)?;
        Ok(out)
    }

    /// Build a value from a big-endian byte sequence, reversing it into the
    /// native little-endian order first.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut le = bytes.to_vec();
        le.reverse();
        Self::from_le_bytes(&le)
    }

    /// Reload this value from a non-empty little-endian byte sequence.
    ///
    /// High zero bytes are trimmed before packing, so the result is canonical
    /// immediately; an all-zero input loads as zero.
    pub fn set_le_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        if bytes.is_empty() {
            return Err(LoadError::EmptyBytes);
        }

        let bytes = size::trim_high_zero_bytes(bytes);
        self.words.clear();
        self.words.resize(size::words_for_bytes(bytes.len()), 0);
        for (word, chunk) in self.words.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }

        Ok(())
    }

    /// Reload this value from a single machine word.
    pub fn set_u64(&mut self, word: u64) {
        self.words.clear();
        self.words.push(word);
    }

    /// Serialize to canonical little-endian bytes, minimum length one.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.words.len() * 8);
        for word in &self.words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.truncate(size::byte_length_of(&self.words));
        let len = size::trim_high_zero_bytes(&out).len();
        out.truncate(len);
        out
    }

    /// Serialize to canonical big-endian bytes, minimum length one.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = self.to_le_bytes();
        out.reverse();
        out
    }

    /// The least-significant 64 bits of the value.
    pub fn as_u64(&self) -> u64 {
        self.words.first().copied().unwrap_or(0)
    }

    /// Read-only view of the words, least significant first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// The number of significant bits.
    ///
    /// Zero reports a bit length of 1, matching its one-word canonical form;
    /// there is no zero-bit value.
    pub fn bit_length(&self) -> u64 {
        match self.words.last() {
            Some(&top) if top != 0 => {
                64 * self.words.len() as u64 - u64::from(top.leading_zeros())
            }
            _ => 1,
        }
    }

    /// The number of significant bytes.
    pub fn byte_length(&self) -> usize {
        size::bytes_for_bits(self.bit_length())
    }

    /// The number of words in the representation.
    pub fn word_length(&self) -> usize {
        self.words.len()
    }

    /// Restore the canonical form: no high zero words, at least one word.
    fn canonicalize(&mut self) {
        size::trim_high_zero_words(&mut self.words);
        if self.words.is_empty() {
            self.words.push(0);
        }
    }

    fn set_zero(&mut self) {
        self.words.clear();
        self.words.push(0);
    }
}

impl Default for LeUint {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_from_for_le_uint {
    ($uX:ty) => {
        impl From<$uX> for LeUint {
            fn from(value: $uX) -> Self {
                Self {
                    words: vec![value.into()],
                }
            }
        }
    };
}

impl_from_for_le_uint!(u64);
impl_from_for_le_uint!(u32);
impl_from_for_le_uint!(u16);
impl_from_for_le_uint!(u8);

impl fmt::Display for LeUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0x0");
        }

        let mut first = true;
        for word in self.words.iter().rev() {
            if first {
                write!(f, "0x{word:x}")?;
                first = false;
            } else {
                write!(f, "{word:016x}")?;
            }
        }

        Ok(())
    }
}

impl FromStr for LeUint {
    type Err = ParseIntError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        s = s.strip_prefix("0x").unwrap_or(s);
        if s.is_empty() || !s.is_ascii() {
            return Err(u64::from_str("").unwrap_err());
        }

        let mut out = Self::zero();
        out.words.clear();
        for chunk in s.as_bytes().rchunks(16) {
            let digits = std::str::from_utf8(chunk).expect("chunked an ascii str");
            out.words.push(u64::from_str_radix(digits, 16)?);
        }
        out.canonicalize();

        Ok(out)
    }
}
