// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! branchgrid CLI entrypoint.
//!
//! Logs go to stderr; set `BRANCHGRID_LOG` (e.g. `branchgrid=debug`) to change the filter.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BRANCHGRID_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    if let Err(error) = branchgrid::cli::run_from_env() {
        eprintln!("branchgrid: {error}");
        std::process::exit(error.exit_code());
    }
}
