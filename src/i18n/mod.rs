// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the dashboard chrome.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | es   | Spanish  | Español     |
//!
//! ## Design
//!
//! Chrome keys use dotted namespaces: `"nav.about"`, `"skills.tools"`.
//! Lookups fall back to English when a key is missing in the requested
//! language. Résumé content is not translated here; it carries its own
//! per-language variants (see [`crate::content`]).
//!
//! The catalog is embedded at compile time as static data.

mod catalog;
mod context;

pub use catalog::{keys, missing_keys, t, t_or_key, Lang};
pub use context::{LanguageContext, Translations};
