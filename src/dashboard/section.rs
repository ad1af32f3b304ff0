// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-page navigation targets.

use serde::Serialize;

/// Sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Experience,
    Skills,
    Education,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::About,
            Section::Experience,
            Section::Skills,
            Section::Education,
            Section::Contact,
        ]
    }

    /// Anchor name of the section on the page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Chrome key of the navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Section::About => "nav.about",
            Section::Experience => "nav.experience",
            Section::Skills => "nav.skills",
            Section::Education => "nav.education",
            Section::Contact => "nav.contact",
        }
    }

    /// Section for a 1-based navigation shortcut.
    pub fn from_shortcut(index: usize) -> Option<Section> {
        index
            .checked_sub(1)
            .and_then(|i| Section::all().get(i))
            .copied()
    }
}
