// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `hashmark` command-line front end for `hashmark-sha256`.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod hash;
pub mod logging;
pub mod selftest;

use clap::{Parser, Subcommand};

/// SHA-256 digests of text, computed from scratch.
#[derive(Parser, Debug)]
#[command(name = "hashmark", version, about)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash text arguments, stdin, or raw UTF-16 code units.
    Hash(hash::HashArgs),
    /// Run the built-in known-answer vectors.
    SelfTest,
}
