// SPDX-License-Identifier: PMPL-1.0-or-later

//! cv-dashboard: a bilingual (English/Spanish) résumé dashboard.
//!
//! The page is a pure function of three inputs:
//! 1. **Content**: the localized résumé data store, loaded once.
//! 2. **Language**: the active language and the chrome string catalog.
//! 3. **View state**: which experience card is open, and whether the
//!    first frame has been drawn.
//!
//! [`dashboard::DashboardState::dispatch`] is the only way state changes.
//! The hosts in [`render`] (coloured text, terminal UI, desktop window,
//! export) turn input into actions and carry out the returned effects.

pub mod config;
pub mod content;
pub mod dashboard;
pub mod i18n;
pub mod logging;
pub mod render;
