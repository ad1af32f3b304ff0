// SPDX-License-Identifier: PMPL-1.0-or-later

//! The composed dashboard page: view state, actions and the resolved view.

pub mod download;
pub mod icons;
pub mod section;
pub mod state;
pub mod view;

pub use download::{cv_file_name, perform_download, PUBLIC_ROOT};
pub use icons::Icon;
pub use section::Section;
pub use state::{mailto, Action, DashboardState, Effect, ViewState};
pub use view::{ChartKind, ChartView, DashboardView};
