// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log output setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    /// Plain command output: info by default, debug with `--verbose`.
    Cli { verbose: bool },
    /// Full-screen hosts: only warnings, so the screen is not overdrawn.
    Interactive { verbose: bool },
}

impl LogProfile {
    pub fn default_directive(&self) -> &'static str {
        match self {
            LogProfile::Cli { verbose: true } | LogProfile::Interactive { verbose: true } => {
                "cv_dashboard=debug,warn"
            }
            LogProfile::Cli { verbose: false } => "cv_dashboard=info,warn",
            LogProfile::Interactive { verbose: false } => "warn",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the profile.
pub fn init_logger(profile: LogProfile) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
