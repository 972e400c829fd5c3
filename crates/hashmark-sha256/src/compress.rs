// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression per RFC 6234 Section 6.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, H0, K256, ROUNDS};
use crate::digest::Digest;
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

// Working variable indices
const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;
const H: usize = 7;

/// Block-by-block SHA-256 compression state.
///
/// All message-derived words live in the struct so they are wiped on drop.
/// Schedule and working variables are also wiped after every block; only the
/// hash state carries over from one block to the next.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Compressor {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; ROUNDS],

    // Working variables a..h per RFC 6234 Section 6.2.2
    wv: [u32; 8],

    // Temporaries
    t1: u32,
    t2: u32,

    blocks: u64,
}

impl Compressor {
    /// Create new state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            w: [0; ROUNDS],
            wv: [0; 8],
            t1: 0,
            t2: 0,
            blocks: 0,
        }
    }

    /// Number of blocks folded into the state so far
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Current hash state H(i)
    pub fn state(&self) -> [u32; 8] {
        self.h
    }

    /// Fold one 512-bit block into the hash state
    pub fn compress_block(&mut self, block: &[u8; BLOCK_LEN]) {
        self.expand_schedule(block);

        // Step 2: a..h = H(i-1)
        self.wv = self.h;

        // Step 3: 64 rounds
        for t in 0..ROUNDS {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1 = self.wv[H]
                .wrapping_add(bsig1(self.wv[E]))
                .wrapping_add(ch(self.wv[E], self.wv[F], self.wv[G]))
                .wrapping_add(K256[t])
                .wrapping_add(self.w[t]);

            // T2 = Σ0(a) + Maj(a,b,c)
            self.t2 = bsig0(self.wv[A]).wrapping_add(maj(self.wv[A], self.wv[B], self.wv[C]));

            // h=g, g=f, f=e, e=d, d=c, c=b, b=a
            self.wv.copy_within(A..H, B);

            // e = d + T1, a = T1 + T2
            self.wv[E] = self.wv[E].wrapping_add(self.t1);
            self.wv[A] = self.t1.wrapping_add(self.t2);
        }

        // Step 4: H(i) = H(i-1) + a..h
        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.zeroize();
        self.wv.zeroize();
        self.t1.zeroize();
        self.t2.zeroize();

        self.blocks += 1;
        tracing::trace!(block = self.blocks, "compressed block");
    }

    /// Fold every block of an already padded message, in order.
    ///
    /// # Panics
    /// If `padded.len()` is not a multiple of 64.
    pub fn compress_blocks(&mut self, padded: &[u8]) {
        assert!(
            padded.len() % BLOCK_LEN == 0,
            "padded message length {} is not a multiple of {BLOCK_LEN}",
            padded.len()
        );

        for chunk in padded.chunks_exact(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.compress_block(&block);
            block.zeroize();
        }
    }

    /// Consume the state and return the digest H(N)
    pub fn finish(self) -> Digest {
        Digest::from_words(self.h)
    }

    /// Step 1: W[0..15] from block (big-endian), W[16..63] derived
    fn expand_schedule(&mut self, block: &[u8; BLOCK_LEN]) {
        for (word, bytes) in self.w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..ROUNDS {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }
    }

    #[cfg(test)]
    pub(crate) fn schedule_for(block: &[u8; BLOCK_LEN]) -> [u32; ROUNDS] {
        let mut state = Self::new();
        state.expand_schedule(block);
        state.w
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress a padded message from H(0) and return its digest.
///
/// # Panics
/// If `padded.len()` is not a multiple of 64.
pub fn compress(padded: &[u8]) -> Digest {
    let mut state = Compressor::new();
    state.compress_blocks(padded);
    state.finish()
}
