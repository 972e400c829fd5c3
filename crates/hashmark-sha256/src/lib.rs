// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 of UTF-16 text, rendered as a lowercase hex digest
//!
//! Implementation per FIPS 180-4 / RFC 6234 (SHA-256) and RFC 3629 (UTF-8).
//! No external hash or encoding crates. Message-derived buffers are zeroized.
//!
//! Pipeline: [`encode_utf8`] -> [`pad`] -> [`compress`] -> [`format_words`].
//! [`hash`] runs all four stages.
//!
//! ```
//! let hex = hashmark_sha256::hash("abc").unwrap();
//! assert_eq!(hex, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - RFC 3629: UTF-8, a transformation format of ISO 10646
//!   <https://datatracker.ietf.org/doc/html/rfc3629>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod encode;
mod error;
mod pad;
mod selftest;
mod word;

use alloc::string::String;

pub use compress::{Compressor, compress};
pub use consts::{BLOCK_LEN, DIGEST_LEN, H0, HEX_DIGEST_LEN, K256};
pub use digest::{Digest, format_words};
pub use encode::{CodeUnits, encode_utf8};
pub use error::DigestError;
pub use pad::{length_field, pad, padded_len};
pub use selftest::{KNOWN_ANSWERS, KnownAnswer, SelfTestReport, VectorOutcome, self_test};

/// SHA-256 digest of `text`.
///
/// # Errors
/// [`DigestError::UnpairedSurrogate`] for malformed UTF-16 input,
/// [`DigestError::MessageTooLong`] if the bit length overflows 64 bits.
pub fn digest<T: CodeUnits + ?Sized>(text: &T) -> Result<Digest, DigestError> {
    let message = encode_utf8(text)?;
    let padded = pad(&message)?;

    tracing::debug!(
        bytes = message.len(),
        blocks = padded.len() / BLOCK_LEN,
        "hashing message"
    );

    Ok(compress(&padded))
}

/// SHA-256 of `text` as 64 lowercase hex characters.
///
/// # Errors
/// Same as [`digest`].
pub fn hash<T: CodeUnits + ?Sized>(text: &T) -> Result<String, DigestError> {
    digest(text).map(|digest| digest.to_hex())
}
