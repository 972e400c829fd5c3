// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per RFC 6234 Section 4.1

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::DigestError;

/// Length in bytes of the padded message for an `len`-byte input.
///
/// Smallest multiple of 64 holding the message, the `0x80` marker and the
/// 64-bit length field: `ceil((8 * len + 1 + 64) / 512) * 64`. `None` if
/// that does not fit in `usize`.
pub const fn padded_len(len: usize) -> Option<usize> {
    match len.checked_add(1 + LENGTH_FIELD_LEN) {
        Some(min) => min.div_ceil(BLOCK_LEN).checked_mul(BLOCK_LEN),
        None => None,
    }
}

/// Message length in bits, as written into the length field.
///
/// # Errors
/// [`DigestError::MessageTooLong`] if `8 * len` overflows `u64`.
pub(crate) fn bit_len(len: usize) -> Result<u64, DigestError> {
    u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(DigestError::MessageTooLong { bytes: len })
}

/// Big-endian 64-bit length field for a message of `bit_len` bits.
///
/// High word is `bit_len >> 32`, low word is `bit_len mod 2^32`; each is
/// written as 4 big-endian bytes.
pub fn length_field(bit_len: u64) -> [u8; LENGTH_FIELD_LEN] {
    let high = (bit_len >> 32) as u32;
    let low = (bit_len & 0xFFFF_FFFF) as u32;

    let mut field = [0u8; LENGTH_FIELD_LEN];
    field[..4].copy_from_slice(&high.to_be_bytes());
    field[4..].copy_from_slice(&low.to_be_bytes());
    field
}

/// Pad `message` to a whole number of blocks.
///
/// Layout: message, `0x80`, zero fill, 64-bit big-endian bit length.
///
/// # Errors
/// [`DigestError::MessageTooLong`] if `8 * message.len()` overflows `u64`
/// or the padded length overflows `usize`.
pub fn pad(message: &[u8]) -> Result<Zeroizing<Vec<u8>>, DigestError> {
    let bits = bit_len(message.len())?;
    let total = padded_len(message.len()).ok_or(DigestError::MessageTooLong {
        bytes: message.len(),
    })?;

    let mut padded = Zeroizing::new(Vec::with_capacity(total));

    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - LENGTH_FIELD_LEN, 0);
    padded.extend_from_slice(&length_field(bits));

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    Ok(padded)
}
