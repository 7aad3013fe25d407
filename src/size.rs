//! Size bookkeeping for the little-endian word representation.
//!
//! Pure conversions between bit, byte and word lengths, plus the trimming
//! that keeps every magnitude in its one canonical form. "High" always means
//! highest index, i.e. most significant.

/// Number of 64-bit words needed to hold `bits` bits.
pub fn words_for_bits(bits: u64) -> usize {
    bits.div_ceil(64) as usize
}

/// Number of 64-bit words needed to hold `bytes` bytes.
pub fn words_for_bytes(bytes: usize) -> usize {
    bytes.div_ceil(8)
}

/// Number of bytes needed to hold `bits` bits.
pub fn bytes_for_bits(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

/// Exact significant byte count of a word slice.
///
/// Counts full words below the top plus however many bytes the top word
/// actually occupies. A zero top word still counts as a full word so that a
/// single-word zero serializes to something trimmable rather than nothing.
pub fn byte_length_of(words: &[u64]) -> usize {
    match words.split_last() {
        None => 0,
        Some((&top, rest)) => {
            let top_bits = 64 - u64::from(top.leading_zeros());
            if top_bits == 0 {
                (rest.len() + 1) * 8
            } else {
                rest.len() * 8 + bytes_for_bits(top_bits)
            }
        }
    }
}

/// Strip high zero bytes, keeping at least one byte.
///
/// An all-zero input trims to a single zero byte; `bytes` must be non-empty.
pub fn trim_high_zero_bytes(bytes: &[u8]) -> &[u8] {
    debug_assert!(!bytes.is_empty());
    let len = bytes.len() - bytes.iter().rev().take_while(|&&b| b == 0).count();
    &bytes[..len.max(1)]
}

/// Strip high zero words. Unlike the byte variant this may leave the vector
/// empty; callers re-establish the one-word minimum where they need it.
pub fn trim_high_zero_words(words: &mut Vec<u64>) {
    while words.last() == Some(&0) {
        words.pop();
    }
}
