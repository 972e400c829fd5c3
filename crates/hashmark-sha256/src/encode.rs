// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! UTF-16 code units to UTF-8 bytes, per RFC 3629 Section 3.
//!
//! The encoder works on UTF-16 code units rather than on `char`s so that text
//! coming from UTF-16 hosts is digested exactly as received, surrogate pairs
//! included. Malformed surrogate sequences are rejected, never guessed at.

use alloc::{string::String, vec::Vec};

use zeroize::Zeroizing;

use crate::error::DigestError;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Text that can be presented as a sequence of UTF-16 code units.
pub trait CodeUnits {
    /// Iterate the UTF-16 code units in order.
    fn code_units(&self) -> impl Iterator<Item = u16> + '_;

    /// Upper bound on the UTF-8 encoded length.
    ///
    /// The encoder reserves this much up front; its buffer must never
    /// reallocate, or an unwiped copy of the message is left behind.
    fn max_utf8_len(&self) -> usize;
}

impl CodeUnits for str {
    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.encode_utf16()
    }

    fn max_utf8_len(&self) -> usize {
        self.len()
    }
}

impl CodeUnits for String {
    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.as_str().code_units()
    }

    fn max_utf8_len(&self) -> usize {
        self.len()
    }
}

impl CodeUnits for [u16] {
    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.iter().copied()
    }

    fn max_utf8_len(&self) -> usize {
        // BMP units take at most 3 bytes; a pair takes 4 bytes for 2 units.
        self.len().saturating_mul(3)
    }
}

impl CodeUnits for Vec<u16> {
    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.as_slice().code_units()
    }

    fn max_utf8_len(&self) -> usize {
        self.as_slice().max_utf8_len()
    }
}

impl<const N: usize> CodeUnits for [u16; N] {
    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.as_slice().code_units()
    }

    fn max_utf8_len(&self) -> usize {
        self.as_slice().max_utf8_len()
    }
}

/// Encode UTF-16 code units as UTF-8.
///
/// # Errors
/// [`DigestError::UnpairedSurrogate`] for a high surrogate that is not
/// immediately followed by a low surrogate (including one at the end of
/// input), and for a low surrogate with no preceding high surrogate.
pub fn encode_utf8<T: CodeUnits + ?Sized>(text: &T) -> Result<Zeroizing<Vec<u8>>, DigestError> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(text.max_utf8_len()));
    let mut units = text.code_units().enumerate().peekable();

    while let Some((index, unit)) = units.next() {
        let cp = u32::from(unit);

        if cp < 0x80 {
            bytes.push(cp as u8);
        } else if cp < 0x800 {
            bytes.push(0xC0 | (cp >> 6) as u8);
            bytes.push(0x80 | (cp & 0x3F) as u8);
        } else if HIGH_SURROGATES.contains(&unit) {
            let low = match units.peek() {
                Some(&(_, low)) if LOW_SURROGATES.contains(&low) => low,
                _ => return Err(reject(index, unit)),
            };
            units.next();

            let cp = 0x10000 + (((cp & 0x3FF) << 10) | (u32::from(low) & 0x3FF));
            bytes.push(0xF0 | (cp >> 18) as u8);
            bytes.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            bytes.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            bytes.push(0x80 | (cp & 0x3F) as u8);
        } else if LOW_SURROGATES.contains(&unit) {
            return Err(reject(index, unit));
        } else {
            bytes.push(0xE0 | (cp >> 12) as u8);
            bytes.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            bytes.push(0x80 | (cp & 0x3F) as u8);
        }
    }

    Ok(bytes)
}

fn reject(index: usize, unit: u16) -> DigestError {
    tracing::warn!(index, unit, "rejecting unpaired surrogate");
    DigestError::UnpairedSurrogate { index, unit }
}
