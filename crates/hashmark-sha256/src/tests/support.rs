// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Independent reference hashing for cross-checks

use sha2::{Digest as _, Sha256};

/// Lowercase hex SHA-256 of `bytes` computed by the `sha2` crate
pub(crate) fn reference_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
