// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host surfaces that draw the dashboard: plain text, terminal UI, window,
//! and file export.

pub mod charts;
pub mod formatter;
pub mod gui;
pub mod output;
pub mod tui;

use std::path::PathBuf;

pub use formatter::{Page, PageFormatter};
pub use gui::DashboardGui;
pub use output::ExportFormat;
pub use tui::DashboardTui;

/// Settings every interactive host needs to carry out effects.
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// Directory downloads are written to.
    pub download_dir: PathBuf,
    /// Year shown in the footer.
    pub year: i32,
}
