// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `MIDINERO_LOG` takes an `EnvFilter`
/// directive such as `debug` or `midinero=trace`; warnings and errors are
/// shown by default.
pub fn init(verbose: bool) {
    let fallback = if verbose { "midinero=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
