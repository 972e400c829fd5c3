// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `hashmark self-test`

use std::io::Write;

use anyhow::Context;
use hashmark_sha256::{SelfTestReport, VectorOutcome};

fn write_outcome<W: Write>(out: &mut W, outcome: &VectorOutcome) -> std::io::Result<()> {
    let status = if outcome.passed() { "PASS" } else { "FAIL" };
    writeln!(out, "{status} {}", outcome.vector.name)?;

    if !outcome.passed() {
        writeln!(out, "  expected: {}", outcome.vector.expected)?;
        match &outcome.actual {
            Ok(actual) => writeln!(out, "  actual:   {actual}")?,
            Err(err) => writeln!(out, "  error:    {err}")?,
        }
    }
    Ok(())
}

/// Print a report, one line per vector plus details for failures.
pub fn write_report<W: Write>(report: &SelfTestReport, mut out: W) -> anyhow::Result<()> {
    for outcome in &report.outcomes {
        write_outcome(&mut out, outcome).context("failed to write self-test report")?;
    }
    Ok(())
}

/// Run `hashmark self-test`. Returns whether every vector passed.
pub fn run<W: Write>(out: W) -> anyhow::Result<bool> {
    let report = hashmark_sha256::self_test();
    write_report(&report, out)?;
    Ok(report.all_passed())
}
