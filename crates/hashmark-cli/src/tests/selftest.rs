// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hashmark_sha256::{KNOWN_ANSWERS, KnownAnswer, SelfTestReport, VectorOutcome};

use crate::selftest::{run, write_report};

#[test]
fn test_run_reports_every_vector() {
    let mut out = Vec::new();
    let ok = run(&mut out).expect("Failed to run(..)");

    let text = String::from_utf8(out).expect("report should be UTF-8");
    assert!(ok);
    assert_eq!(text.lines().count(), KNOWN_ANSWERS.len());
    assert!(text.lines().all(|line| line.starts_with("PASS ")));
}

#[test]
fn test_failure_details_are_printed() {
    let report = SelfTestReport {
        outcomes: vec![VectorOutcome {
            vector: KnownAnswer {
                name: "broken",
                input: "abc",
                expected: "00",
            },
            actual: Ok(String::from("ff")),
        }],
    };

    let mut out = Vec::new();
    write_report(&report, &mut out).expect("Failed to write_report(..)");

    let text = String::from_utf8(out).expect("report should be UTF-8");
    assert_eq!(text, "FAIL broken\n  expected: 00\n  actual:   ff\n");
}
