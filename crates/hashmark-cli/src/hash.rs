// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `hashmark hash`

use std::io::{Read, Write};

use anyhow::{Context, bail, ensure};
use clap::Args;

/// Arguments for `hashmark hash`.
#[derive(Args, Debug, Default)]
pub struct HashArgs {
    /// Texts to hash, one digest per argument. Reads all of stdin when empty.
    pub text: Vec<String>,

    /// Hash raw UTF-16 code units, 4 hex digits per unit (e.g. d83dde00)
    #[arg(long, value_name = "HEX", conflicts_with = "text")]
    pub utf16: Option<String>,

    /// Fail unless the (single) digest equals this one
    #[arg(long, value_name = "DIGEST")]
    pub expect: Option<String>,
}

/// One thing to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text as given on the command line or stdin
    Text(String),
    /// Raw UTF-16 code units
    Units(Vec<u16>),
}

impl Input {
    fn digest(&self) -> anyhow::Result<String> {
        let hex = match self {
            Input::Text(text) => hashmark_sha256::hash(text),
            Input::Units(units) => hashmark_sha256::hash(units),
        };
        hex.context("failed to hash input")
    }
}

/// Parse UTF-16 code units written as hex, 4 digits per unit.
///
/// Whitespace between groups is ignored.
pub fn parse_utf16_hex(hex: &str) -> anyhow::Result<Vec<u16>> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    ensure!(
        digits.len() % 4 == 0,
        "UTF-16 hex must be a multiple of 4 digits, got {}",
        digits.len()
    );

    digits
        .as_bytes()
        .chunks(4)
        .enumerate()
        .map(|(i, group)| -> anyhow::Result<u16> {
            let group = std::str::from_utf8(group).context("UTF-16 hex is not ASCII")?;
            // from_str_radix alone would take a sign, e.g. "+061"
            ensure!(
                group.bytes().all(|b| b.is_ascii_hexdigit()),
                "invalid code unit {group:?} at position {i}"
            );
            u16::from_str_radix(group, 16)
                .with_context(|| format!("invalid code unit {group:?} at position {i}"))
        })
        .collect()
}

/// Collect the inputs named by `args`, falling back to `stdin`.
pub fn collect_inputs<R: Read>(args: &HashArgs, mut stdin: R) -> anyhow::Result<Vec<Input>> {
    if let Some(hex) = &args.utf16 {
        return Ok(vec![Input::Units(parse_utf16_hex(hex)?)]);
    }

    if !args.text.is_empty() {
        return Ok(args.text.iter().cloned().map(Input::Text).collect());
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    tracing::debug!(bytes = text.len(), "read stdin");
    Ok(vec![Input::Text(text)])
}

/// Run `hashmark hash`, printing one digest per line.
///
/// Returns `false` when `--expect` was given and did not match.
pub fn run<R: Read, W: Write>(args: &HashArgs, stdin: R, mut out: W) -> anyhow::Result<bool> {
    let inputs = collect_inputs(args, stdin)?;

    if args.expect.is_some() && inputs.len() != 1 {
        bail!("--expect needs exactly one input, got {}", inputs.len());
    }

    let mut matched = true;
    for input in &inputs {
        let digest = input.digest()?;
        writeln!(out, "{digest}").context("failed to write digest")?;

        if let Some(expected) = &args.expect {
            if !digest.eq_ignore_ascii_case(expected.trim()) {
                tracing::warn!(%expected, actual = %digest, "digest mismatch");
                matched = false;
            }
        }
    }

    Ok(matched)
}
