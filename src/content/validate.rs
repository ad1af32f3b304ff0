// SPDX-License-Identifier: PMPL-1.0-or-later

//! Consistency checks for a loaded data store.
//!
//! Resolution tolerates gaps, so none of these problems break rendering.
//! They show up as silently degraded text instead, which is why the CLI
//! offers a `validate` command.

use super::model::{CvData, LocalizedField};
use crate::i18n::{self, Lang};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

pub fn validate(data: &CvData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let personal = &data.personal;
    check_field(&mut issues, "personal.title", &personal.title);
    check_field(&mut issues, "personal.tagline", &personal.tagline);
    check_field(&mut issues, "personal.summary", &personal.summary);
    check_field(&mut issues, "personal.location", &personal.location);

    let mut seen = HashSet::new();
    for (i, entry) in data.experience.iter().enumerate() {
        let base = format!("experience[{}]", i);
        if !seen.insert(entry.id) {
            issues.push(ValidationIssue::new(
                format!("{}.id", base),
                format!("duplicate experience id {}", entry.id),
            ));
        }
        check_field(&mut issues, &format!("{}.period", base), &entry.period);
        check_field(&mut issues, &format!("{}.position", base), &entry.position);
        check_field(&mut issues, &format!("{}.company", base), &entry.company);
        check_field(&mut issues, &format!("{}.description", base), &entry.description);
        check_field(&mut issues, &format!("{}.technologies", base), &entry.technologies);
        for (j, achievement) in entry.achievements.iter().enumerate() {
            check_field(&mut issues, &format!("{}.achievements[{}]", base, j), achievement);
        }
    }

    for (i, skill) in data.skills.technical.iter().enumerate() {
        if skill.level > 100 {
            issues.push(ValidationIssue::new(
                format!("skills.technical[{}].level", i),
                format!("{} is above 100%", skill.level),
            ));
        }
    }

    for (i, language) in data.languages.iter().enumerate() {
        check_field(&mut issues, &format!("languages[{}].name", i), &language.name);
    }

    let series = [
        ("careerTimeline", &data.career_timeline),
        ("sectorDistribution", &data.sector_distribution),
        ("technologyUsage", &data.technology_usage),
        ("impactMetrics", &data.impact_metrics),
        ("certificationTimeline", &data.certification_timeline),
    ];
    for (name, points) in series {
        for (i, point) in points.iter().enumerate() {
            check_field(&mut issues, &format!("{}[{}].label", name, i), &point.label);
            if !point.value.is_finite() || point.value < 0.0 {
                issues.push(ValidationIssue::new(
                    format!("{}[{}].value", name, i),
                    format!("{} is not a non-negative number", point.value),
                ));
            }
        }
    }

    issues
}

/// Chrome keys the Spanish catalog lacks, reported like data issues.
pub fn validate_catalog() -> Vec<ValidationIssue> {
    Lang::all()
        .iter()
        .flat_map(|lang| {
            i18n::missing_keys(*lang).into_iter().map(move |key| {
                ValidationIssue::new(
                    format!("catalog.{}.{}", lang.code(), key),
                    "chrome key has no translation",
                )
            })
        })
        .collect()
}

fn check_field<T>(issues: &mut Vec<ValidationIssue>, path: &str, field: &LocalizedField<T>) {
    if let LocalizedField::Localized(map) = field {
        for lang in Lang::all() {
            if !map.contains_key(lang.code()) {
                issues.push(ValidationIssue::new(
                    path,
                    format!("missing '{}' variant", lang.code()),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store;

    #[test]
    fn embedded_data_is_clean() {
        let data = store::embedded().unwrap();
        let issues = validate(&data);
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn catalog_is_clean() {
        assert!(validate_catalog().is_empty());
    }

    #[test]
    fn detects_missing_variant_and_duplicate_id() {
        let mut data = store::embedded().unwrap();
        data.personal.title = LocalizedField::localized([("en", "Analyst".to_string())]);
        let dup = data.experience[0].clone();
        data.experience.push(dup);
        data.skills.technical[0].level = 140;

        let issues = validate(&data);
        assert!(issues
            .iter()
            .any(|i| i.path == "personal.title" && i.message.contains("'es'")));
        assert!(issues.iter().any(|i| i.message.contains("duplicate experience id")));
        assert!(issues.iter().any(|i| i.path == "skills.technical[0].level"));
    }
}
