// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Built-in known-answer tests.
//!
//! References:
//! - FIPS 180-4 examples ("abc", 56-byte message)
//!   <https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf>
//! - RFC 6234 Section 8.5 (112-byte message)

use alloc::{string::String, vec::Vec};

use crate::error::DigestError;

/// A named input with its expected digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Short label used in reports
    pub name: &'static str,
    /// Input text
    pub input: &'static str,
    /// Expected lowercase hex digest
    pub expected: &'static str,
}

/// Known-answer vectors run by [`self_test`].
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        input: "",
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        input: "abc",
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "hello world",
        input: "Hello World",
        expected: "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e",
    },
    KnownAnswer {
        name: "quick brown fox",
        input: "The quick brown fox jumps over the lazy dog",
        expected: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
    KnownAnswer {
        name: "56 bytes",
        input: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "112 bytes",
        input: "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        expected: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
];

/// Result of running one known-answer vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorOutcome {
    /// The vector that was run
    pub vector: KnownAnswer,
    /// What the hasher produced
    pub actual: Result<String, DigestError>,
}

impl VectorOutcome {
    /// Whether the produced digest equals the expected one
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(actual) if actual == self.vector.expected)
    }
}

/// Outcomes of a [`self_test`] run, in vector order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestReport {
    /// One entry per vector
    pub outcomes: Vec<VectorOutcome>,
}

impl SelfTestReport {
    /// True when every vector passed
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(VectorOutcome::passed)
    }

    /// Outcomes that did not match
    pub fn failures(&self) -> impl Iterator<Item = &VectorOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }
}

/// Run every vector in [`KNOWN_ANSWERS`] through [`crate::hash`].
pub fn self_test() -> SelfTestReport {
    let outcomes: Vec<VectorOutcome> = KNOWN_ANSWERS
        .iter()
        .map(|vector| VectorOutcome {
            vector: *vector,
            actual: crate::hash(vector.input),
        })
        .collect();

    let report = SelfTestReport { outcomes };
    tracing::debug!(
        vectors = report.outcomes.len(),
        failures = report.failures().count(),
        "self-test finished"
    );
    report
}
