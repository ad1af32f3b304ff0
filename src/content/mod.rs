// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized résumé data store

pub mod model;
pub mod resolve;
pub mod store;
pub mod validate;

pub use model::*;
pub use resolve::{resolve_text, resolve_text_list};
pub use store::{ContentError, DataSource};
pub use validate::{validate, validate_catalog, ValidationIssue};
