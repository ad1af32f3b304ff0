// SPDX-License-Identifier: PMPL-1.0-or-later

//! Résumé content types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of an experience entry.
pub type ExperienceId = u32;

/// A value that is either language independent or given once per language.
///
/// The per-language form maps a two-letter code (`"en"`, `"es"`) to the
/// value. In data files the two forms are told apart by shape: a bare
/// value is [`LocalizedField::Plain`], an object keyed by code is
/// [`LocalizedField::Localized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedField<T> {
    Plain(T),
    Localized(BTreeMap<String, T>),
}

impl<T> LocalizedField<T> {
    pub fn plain(value: T) -> Self {
        LocalizedField::Plain(value)
    }

    /// Build a per-language field from `(code, value)` pairs.
    pub fn localized<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        LocalizedField::Localized(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&str> for LocalizedField<String> {
    fn from(value: &str) -> Self {
        LocalizedField::Plain(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: LocalizedField<String>,
    pub tagline: LocalizedField<String>,
    pub summary: LocalizedField<String>,
    pub location: LocalizedField<String>,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: ExperienceId,
    pub period: LocalizedField<String>,
    pub position: LocalizedField<String>,
    pub company: LocalizedField<String>,
    pub description: LocalizedField<String>,
    pub technologies: LocalizedField<Vec<String>>,
    #[serde(default)]
    pub achievements: Vec<LocalizedField<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Free text such as `"2019"` or `"2015 - 2017"`. Bare numbers are accepted.
    #[serde(deserialize_with = "year_text")]
    pub year: String,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub certified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<Skill>,
    #[serde(default)]
    pub business: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Professional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: LocalizedField<String>,
    pub level: Proficiency,
}

/// One data point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: LocalizedField<String>,
    pub value: f64,
}

/// The whole résumé, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub career_timeline: Vec<ChartPoint>,
    #[serde(default)]
    pub sector_distribution: Vec<ChartPoint>,
    #[serde(default)]
    pub technology_usage: Vec<ChartPoint>,
    #[serde(default)]
    pub impact_metrics: Vec<ChartPoint>,
    #[serde(default)]
    pub certification_timeline: Vec<ChartPoint>,
}

/// YAML reads an unquoted `2019` as a number; keep it as text.
fn year_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(text) => text,
        Year::Number(year) => year.to_string(),
    })
}

impl CvData {
    pub fn experience(&self, id: ExperienceId) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_localized_fields_deserialize_by_shape() {
        let plain: LocalizedField<String> = serde_json::from_str("\"Madrid\"").unwrap();
        assert_eq!(plain, LocalizedField::plain("Madrid".to_string()));

        let localized: LocalizedField<String> =
            serde_json::from_str(r#"{"en": "Developer", "es": "Desarrollador"}"#).unwrap();
        assert!(matches!(localized, LocalizedField::Localized(ref map) if map.len() == 2));

        let list: LocalizedField<Vec<String>> =
            serde_json::from_str(r#"["Rust", "SQL"]"#).unwrap();
        assert_eq!(
            list,
            LocalizedField::plain(vec!["Rust".to_string(), "SQL".to_string()])
        );
    }

    #[test]
    fn localized_list_field_deserializes() {
        let field: LocalizedField<Vec<String>> =
            serde_json::from_str(r#"{"en": ["Cloud"], "es": ["Nube"]}"#).unwrap();
        match field {
            LocalizedField::Localized(map) => assert_eq!(map["es"], vec!["Nube".to_string()]),
            LocalizedField::Plain(_) => panic!("expected localized list"),
        }
    }

    #[test]
    fn proficiency_reads_original_labels() {
        let level: Proficiency = serde_json::from_str("\"Native\"").unwrap();
        assert_eq!(level, Proficiency::Native);
    }

    #[test]
    fn education_year_accepts_numbers() {
        let entry: EducationEntry =
            serde_yaml::from_str("year: 2019\ndegree: MSc Data Science\ninstitution: UNED\n")
                .unwrap();
        assert_eq!(entry.year, "2019");

        let entry: EducationEntry = serde_json::from_str(
            r#"{"year": "2015 - 2017", "degree": "BSc", "institution": "UPM", "certified": true}"#,
        )
        .unwrap();
        assert_eq!(entry.year, "2015 - 2017");
        assert!(entry.certified);
    }
}
