// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use hashmark_cli::{Cli, Commands, hash, logging, selftest};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ok = match &cli.command {
        Commands::Hash(args) => hash::run(args, io::stdin().lock(), io::stdout().lock())?,
        Commands::SelfTest => selftest::run(io::stdout().lock())?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
