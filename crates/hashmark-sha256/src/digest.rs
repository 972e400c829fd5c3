// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use core::fmt;

use crate::consts::{DIGEST_LEN, HEX_DIGEST_LEN};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Final SHA-256 hash state H(N).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u32; 8]);

impl Digest {
    /// Wrap the eight final hash-state words
    pub const fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// The eight hash-state words, h0 first
    pub const fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// The 32 digest bytes (each word big-endian)
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// 64-character lowercase hex rendering
    pub fn to_hex(&self) -> String {
        format_words(&self.0)
    }
}

/// Render hash-state words as lowercase hex, 8 zero-padded digits per word.
pub fn format_words(words: &[u32; 8]) -> String {
    let mut out = String::with_capacity(HEX_DIGEST_LEN);
    for word in words {
        for shift in (0..8).rev() {
            let nibble = (word >> (shift * 4)) & 0xF;
            out.push(char::from(HEX_DIGITS[nibble as usize]));
        }
    }
    out
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
