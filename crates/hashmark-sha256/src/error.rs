// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// A surrogate code unit has no valid partner at `index`
    #[error("unpaired surrogate {unit:#06x} at code unit index {index}")]
    UnpairedSurrogate {
        /// Position of the offending code unit in the input
        index: usize,
        /// The offending code unit
        unit: u16,
    },

    /// Message bit length does not fit the 64-bit length field
    #[error("message of {bytes} bytes exceeds the 2^64 - 1 bit length limit")]
    MessageTooLong {
        /// Encoded message length in bytes
        bytes: usize,
    },
}
