// SPDX-License-Identifier: PMPL-1.0-or-later

//! Icons shown on the hero stat cards.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Briefcase,
    Folder,
    Award,
    Code,
}

impl Icon {
    /// Map an icon name to an icon. Unknown names get [`Icon::Briefcase`].
    pub fn from_name(name: &str) -> Icon {
        match name {
            "briefcase" => Icon::Briefcase,
            "folder" => Icon::Folder,
            "award" => Icon::Award,
            "code" => Icon::Code,
            _ => Icon::Briefcase,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Briefcase => "briefcase",
            Icon::Folder => "folder",
            Icon::Award => "award",
            Icon::Code => "code",
        }
    }

    /// Single-cell glyph for text surfaces.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Briefcase => "💼",
            Icon::Folder => "📁",
            Icon::Award => "🏅",
            Icon::Code => "⌨",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
