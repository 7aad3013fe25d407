use std::ops::{BitAndAssign, BitOrAssign, ShlAssign, ShrAssign};

use crate::size;
use crate::uint::LeUint;

impl LeUint {
    /// Left shift by a single step of at most one word width.
    ///
    /// A step of exactly 64 is a word move, not a native shift; shifting by
    /// the full word width overflows in fixed-width arithmetic.
    pub fn small_shl(&mut self, n: u32) {
        debug_assert!(n <= 64, "single-step shift amount must be at most 64");

        if n == 0 || self.is_zero() {
            return;
        }

        if n == 64 {
            self.words.insert(0, 0);
            return;
        }

        // grow to the exact new word count, then walk high to low so a
        // word's outgoing bits are captured before it is overwritten
        let new_len = size::words_for_bits(self.bit_length() + u64::from(n));
        self.words.resize(new_len, 0);
        for i in (1..self.words.len()).rev() {
            self.words[i] = (self.words[i] << n) | (self.words[i - 1] >> (64 - n));
        }
        self.words[0] <<= n;
    }

    /// Right shift by a single step of at most one word width.
    ///
    /// Shifting out every significant bit collapses the value to zero.
    pub fn small_shr(&mut self, n: u32) {
        debug_assert!(n <= 64, "single-step shift amount must be at most 64");

        if n == 0 || self.is_zero() {
            return;
        }

        if u64::from(n) >= self.bit_length() {
            self.set_zero();
            return;
        }

        if n == 64 {
            self.words.remove(0);
        } else {
            // walk low to high so a word's outgoing bits are captured
            // before it is overwritten
            for i in 0..self.words.len() - 1 {
                self.words[i] = (self.words[i] >> n) | (self.words[i + 1] << (64 - n));
            }
            let top = self.words.len() - 1;
            self.words[top] >>= n;
        }
        self.canonicalize();
    }

    /// Left shift by an arbitrary amount, chunked into single steps.
    pub fn shl(&mut self, n: u64) {
        if self.is_zero() {
            return;
        }

        let mut left = n;
        while left > 64 {
            self.small_shl(64);
            left -= 64;
        }
        self.small_shl(left as u32);
    }

    /// Right shift by an arbitrary amount, chunked into single steps.
    pub fn shr(&mut self, n: u64) {
        if n >= self.bit_length() {
            self.set_zero();
            return;
        }

        let mut left = n;
        while left > 64 {
            self.small_shr(64);
            left -= 64;
        }
        self.small_shr(left as u32);
    }

    /// AND against a single word.
    ///
    /// The operand is zero past its low 64 bits, so every word above word 0
    /// is dropped.
    pub fn and_u64(&mut self, word: u64) {
        self.words.truncate(1);
        self.words[0] &= word;
    }

    /// OR a single word into word 0.
    pub fn or_u64(&mut self, word: u64) {
        self.words[0] |= word;
    }

    /// AND against a little-endian byte operand.
    ///
    /// Words past the shorter operand are zero in the result and are
    /// dropped. An empty operand is all zeroes, which clears the value.
    pub fn and_bytes(&mut self, bytes: &[u8]) {
        let Ok(rhs) = LeUint::from_le_bytes(bytes) else {
            self.set_zero();
            return;
        };

        for (word, r) in self.words.iter_mut().zip(rhs.words.iter()) {
            *word &= *r;
        }
        self.words.truncate(rhs.words.len());
        self.canonicalize();
    }

    /// OR against a little-endian byte operand.
    ///
    /// The longer operand's excess words carry into the result unchanged.
    /// An empty operand is all zeroes, a no-op.
    pub fn or_bytes(&mut self, bytes: &[u8]) {
        let Ok(mut rhs) = LeUint::from_le_bytes(bytes) else {
            return;
        };

        if self.words.len() < rhs.words.len() {
            for (r, word) in rhs.words.iter_mut().zip(self.words.iter()) {
                *r |= *word;
            }
            self.words = rhs.words;
        } else {
            for (word, r) in self.words.iter_mut().zip(rhs.words.iter()) {
                *word |= *r;
            }
        }
        self.canonicalize();
    }
}

impl ShlAssign<u64> for LeUint {
    fn shl_assign(&mut self, rhs: u64) {
        self.shl(rhs);
    }
}

impl ShrAssign<u64> for LeUint {
    fn shr_assign(&mut self, rhs: u64) {
        self.shr(rhs);
    }
}

impl BitAndAssign<u64> for LeUint {
    fn bitand_assign(&mut self, rhs: u64) {
        self.and_u64(rhs);
    }
}

impl BitOrAssign<u64> for LeUint {
    fn bitor_assign(&mut self, rhs: u64) {
        self.or_u64(rhs);
    }
}
