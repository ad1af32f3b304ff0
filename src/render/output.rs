// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of the resolved page for export

use crate::dashboard::view::{ChartView, DashboardView};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json;
use serde_yaml;
use std::path::PathBuf;

const EXPORT_SCHEMA: &str = "cv-dashboard.page";
const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    #[value(alias = "yml")]
    Yaml,
    #[value(alias = "md")]
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Markdown => "md",
        }
    }

    /// `path` with this format's extension when it has none.
    pub fn output_path(&self, path: PathBuf) -> PathBuf {
        if path.extension().is_some() {
            path
        } else {
            path.with_extension(self.extension())
        }
    }

    pub fn serialize(&self, view: &DashboardView) -> Result<String> {
        match self {
            ExportFormat::Json => serde_json::to_string_pretty(&PageExport::new(view))
                .context("serializing page as json"),
            ExportFormat::Yaml => {
                serde_yaml::to_string(&PageExport::new(view)).context("serializing page as yaml")
            }
            ExportFormat::Markdown => Ok(format_page_as_markdown(view)),
        }
    }
}

/// Envelope written around the page for the structured formats.
#[derive(Debug, Serialize)]
pub struct PageExport<'a> {
    pub schema: &'static str,
    pub version: u32,
    pub exported_at: String,
    pub page: &'a DashboardView,
}

impl<'a> PageExport<'a> {
    pub fn new(page: &'a DashboardView) -> Self {
        Self {
            schema: EXPORT_SCHEMA,
            version: EXPORT_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            page,
        }
    }
}

fn format_page_as_markdown(view: &DashboardView) -> String {
    let mut lines = Vec::new();
    let hero = &view.hero;
    lines.push(format!("# {}", hero.name));
    lines.push(String::new());
    lines.push(format!("**{}**", hero.title));
    lines.push(String::new());
    lines.push(format!("_{}_", hero.tagline));
    lines.push(String::new());
    lines.push(format!("{} · {} · {}", hero.email, hero.phone, hero.location));
    lines.push(String::new());
    for stat in &hero.stats {
        lines.push(format!("- **{}** {}", stat.value, stat.label));
    }
    lines.push(String::new());

    lines.push(format!("## {}", view.about.title));
    lines.push(String::new());
    lines.push(view.about.summary.clone());
    lines.push(String::new());

    lines.push(format!("## {}", view.analytics.title));
    lines.push(String::new());
    for chart in &view.analytics.charts {
        push_chart(&mut lines, chart);
    }

    let experience = &view.experience;
    lines.push(format!("## {}", experience.title));
    lines.push(String::new());
    for card in &experience.entries {
        lines.push(format!("### {} · {}", card.position, card.company));
        lines.push(String::new());
        lines.push(format!("_{}_", card.period));
        lines.push(String::new());
        if let Some(details) = &card.details {
            lines.push(details.description.clone());
            lines.push(String::new());
            lines.push(format!(
                "**{}:** {}",
                experience.technologies_label,
                details.technologies.join(", ")
            ));
            lines.push(String::new());
            lines.push(format!("**{}:**", experience.achievements_label));
            lines.push(String::new());
            for achievement in &details.achievements {
                lines.push(format!("- {}", achievement));
            }
            lines.push(String::new());
        }
    }

    let skills = &view.skills;
    lines.push(format!("## {}", skills.title));
    lines.push(String::new());
    lines.push(format!("### {}", skills.technical_label));
    lines.push(String::new());
    for skill in &skills.technical {
        lines.push(format!("- {} ({}%)", skill.name, skill.level));
    }
    lines.push(String::new());
    lines.push(format!("### {}", skills.business_label));
    lines.push(String::new());
    lines.push(skills.business.join(", "));
    lines.push(String::new());
    lines.push(format!("### {}", skills.tools_label));
    lines.push(String::new());
    lines.push(skills.tools.join(", "));
    lines.push(String::new());

    let education = &view.education;
    lines.push(format!("## {}", education.title));
    lines.push(String::new());
    push_chart(&mut lines, &education.progress);
    for entry in &education.entries {
        let badge = if entry.certified {
            format!(" ({})", education.certified_label)
        } else {
            String::new()
        };
        lines.push(format!(
            "- {}: {}, {}{}",
            entry.year, entry.degree, entry.institution, badge
        ));
    }
    lines.push(String::new());

    lines.push(format!("## {}", view.languages.title));
    lines.push(String::new());
    for language in &view.languages.entries {
        lines.push(format!("- {}: {}", language.name, language.level));
    }
    lines.push(String::new());

    lines.push(format!("## {}", view.contact.title));
    lines.push(String::new());
    lines.push(view.contact.subtitle.clone());
    lines.push(String::new());
    lines.push(format!(
        "[{}](mailto:{})",
        view.contact.email_me, view.contact.email
    ));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(view.footer.copyright.clone());
    lines.join("\n")
}

fn push_chart(lines: &mut Vec<String>, chart: &ChartView) {
    lines.push(format!("### {}", chart.title));
    lines.push(String::new());
    lines.push(format!("_{}_", chart.description));
    lines.push(String::new());
    lines.push("| | |".to_string());
    lines.push("|---|---:|".to_string());
    for point in &chart.points {
        lines.push(format!("| {} | {} |", point.label, point.value));
    }
    lines.push(String::new());
}
