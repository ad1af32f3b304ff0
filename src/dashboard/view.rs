// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resolved projection of the whole page.
//!
//! [`DashboardView::build`] runs on every frame. It resolves every
//! localized field and chrome string for the active language, so nothing
//! language-dependent is cached between frames.

use super::icons::Icon;
use super::section::Section;
use super::state::DashboardState;
use crate::content::{
    resolve_text, resolve_text_list, ChartPoint, CvData, ExperienceId, Proficiency, Skill,
};
use crate::i18n::{Lang, Translations};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub lang: Lang,
    pub header: HeaderView,
    pub hero: HeroView,
    pub about: AboutView,
    pub analytics: AnalyticsView,
    pub experience: ExperienceSection,
    pub skills: SkillsView,
    pub education: EducationView,
    pub languages: LanguagesView,
    pub contact: ContactView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub name: String,
    pub nav: Vec<NavItem>,
    /// Code of the language the toggle switches to.
    pub toggle_label: String,
    pub download_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub visible: bool,
    pub available: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub stats: Vec<StatCard>,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    CareerTimeline,
    SectorDistribution,
    TechnologyUsage,
    ImpactMetrics,
    CertificationProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub title: String,
    pub description: String,
    pub points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub title: String,
    pub charts: Vec<ChartView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceDetails {
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceCard {
    pub id: ExperienceId,
    pub period: String,
    pub position: String,
    pub company: String,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ExperienceDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceSection {
    pub title: String,
    pub technologies_label: String,
    pub achievements_label: String,
    pub entries: Vec<ExperienceCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsView {
    pub title: String,
    pub technical_label: String,
    pub technical: Vec<Skill>,
    pub business_label: String,
    pub business: Vec<String>,
    pub tools_label: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationCard {
    pub year: String,
    pub degree: String,
    pub institution: String,
    pub certified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub title: String,
    pub certified_label: String,
    pub progress: ChartView,
    pub entries: Vec<EducationCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCard {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguagesView {
    pub title: String,
    pub entries: Vec<LanguageCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub title: String,
    pub subtitle: String,
    pub email_me: String,
    pub download_cv: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub copyright: String,
    pub subtitle: String,
}

/// Hero stat cards, labelled for the given language.
pub fn stat_cards(tr: &Translations) -> Vec<StatCard> {
    [
        ("hero.stats.experience", "15+", "briefcase"),
        ("hero.stats.projects", "50+", "folder"),
        ("hero.stats.certifications", "5+", "award"),
        ("hero.stats.technologies", "20+", "code"),
    ]
    .into_iter()
    .map(|(key, value, icon)| StatCard {
        label: tr.get(key).to_string(),
        value,
        icon: Icon::from_name(icon),
    })
    .collect()
}

impl DashboardView {
    pub fn build(data: &CvData, state: &DashboardState, year: i32) -> Self {
        let lang = state.language();
        let tr = state.translations();
        let s = |key: &str| tr.get(key).to_string();
        let personal = &data.personal;

        let header = HeaderView {
            name: personal.name.clone(),
            nav: Section::all()
                .iter()
                .map(|section| NavItem {
                    section: *section,
                    label: s(section.nav_key()),
                })
                .collect(),
            toggle_label: lang.toggled().code().to_ascii_uppercase(),
            download_label: s("hero.download_cv"),
        };

        let hero = HeroView {
            visible: state.view().is_visible(),
            available: s("hero.available"),
            name: personal.name.clone(),
            title: resolve_text(&personal.title, lang),
            tagline: resolve_text(&personal.tagline, lang),
            stats: stat_cards(&tr),
            email: personal.email.clone(),
            phone: personal.phone.clone(),
            location: resolve_text(&personal.location, lang),
        };

        let chart = |kind, key: &str, points: &[ChartPoint]| ChartView {
            kind,
            title: s(key),
            description: s(&format!("{}_desc", key)),
            points: resolve_points(points, lang),
        };

        let analytics = AnalyticsView {
            title: s("analytics.title"),
            charts: vec![
                chart(
                    ChartKind::CareerTimeline,
                    "analytics.career_progression",
                    &data.career_timeline,
                ),
                chart(
                    ChartKind::SectorDistribution,
                    "analytics.sector_distribution",
                    &data.sector_distribution,
                ),
                chart(
                    ChartKind::TechnologyUsage,
                    "analytics.technology_experience",
                    &data.technology_usage,
                ),
                chart(
                    ChartKind::ImpactMetrics,
                    "analytics.impact_metrics",
                    &data.impact_metrics,
                ),
            ],
        };

        let experience = ExperienceSection {
            title: s("experience.title"),
            technologies_label: s("experience.technologies"),
            achievements_label: s("experience.achievements"),
            entries: data
                .experience
                .iter()
                .map(|entry| {
                    let expanded = state.view().is_expanded(entry.id);
                    ExperienceCard {
                        id: entry.id,
                        period: resolve_text(&entry.period, lang),
                        position: resolve_text(&entry.position, lang),
                        company: resolve_text(&entry.company, lang),
                        expanded,
                        details: expanded.then(|| ExperienceDetails {
                            description: resolve_text(&entry.description, lang),
                            technologies: resolve_text_list(&entry.technologies, lang),
                            achievements: entry
                                .achievements
                                .iter()
                                .map(|a| resolve_text(a, lang))
                                .collect(),
                        }),
                    }
                })
                .collect(),
        };

        let skills = SkillsView {
            title: s("skills.title"),
            technical_label: s("skills.technical"),
            technical: data.skills.technical.clone(),
            business_label: s("skills.business"),
            business: data.skills.business.clone(),
            tools_label: s("skills.tools"),
            tools: data.skills.tools.clone(),
        };

        let education = EducationView {
            title: s("education.title"),
            certified_label: s("education.certified"),
            progress: chart(
                ChartKind::CertificationProgress,
                "education.certification_progress",
                &data.certification_timeline,
            ),
            entries: data
                .education
                .iter()
                .map(|edu| EducationCard {
                    year: edu.year.clone(),
                    degree: edu.degree.clone(),
                    institution: edu.institution.clone(),
                    certified: edu.certified,
                })
                .collect(),
        };

        let languages = LanguagesView {
            title: s("languages.title"),
            entries: data
                .languages
                .iter()
                .map(|spoken| LanguageCard {
                    name: resolve_text(&spoken.name, lang),
                    level: match spoken.level {
                        Proficiency::Native => s("languages.native"),
                        Proficiency::Professional => s("languages.professional"),
                    },
                })
                .collect(),
        };

        let contact = ContactView {
            title: s("contact.title"),
            subtitle: s("contact.subtitle"),
            email_me: s("contact.email_me"),
            download_cv: s("contact.download_cv"),
            email: personal.email.clone(),
        };

        let footer = FooterView {
            copyright: format!("© {} {}. {}", year, personal.name, tr.get("footer.rights")),
            subtitle: s("footer.subtitle"),
        };

        Self {
            lang,
            header,
            hero,
            about: AboutView {
                title: s("about.title"),
                summary: resolve_text(&personal.summary, lang),
            },
            analytics,
            experience,
            skills,
            education,
            languages,
            contact,
            footer,
        }
    }

    pub fn expanded_card(&self) -> Option<&ExperienceCard> {
        self.experience.entries.iter().find(|card| card.expanded)
    }
}

fn resolve_points(points: &[ChartPoint], lang: Lang) -> Vec<DataPoint> {
    points
        .iter()
        .map(|point| DataPoint {
            label: resolve_text(&point.label, lang),
            value: point.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store;
    use crate::dashboard::state::Action;

    fn data() -> CvData {
        store::embedded().unwrap()
    }

    #[test]
    fn collapsed_cards_carry_no_details() {
        let view = DashboardView::build(&data(), &DashboardState::default(), 2026);
        assert!(view.experience.entries.iter().all(|c| c.details.is_none()));
        assert!(view.expanded_card().is_none());
    }

    #[test]
    fn expanded_card_resolves_details() {
        let mut state = DashboardState::new(Lang::Es);
        state.dispatch(Action::ToggleExperience(1));
        let view = DashboardView::build(&data(), &state, 2026);

        let card = view.expanded_card().expect("one card expanded");
        assert_eq!(card.id, 1);
        let details = card.details.as_ref().unwrap();
        assert!(details.technologies.contains(&"Gobierno del Dato".to_string()));
        assert_eq!(details.achievements.len(), 2);
    }

    #[test]
    fn stat_labels_follow_language() {
        let mut state = DashboardState::default();
        let en = DashboardView::build(&data(), &state, 2026);
        state.dispatch(Action::ToggleLanguage);
        let es = DashboardView::build(&data(), &state, 2026);

        assert_eq!(en.hero.stats[1].label, "Projects Delivered");
        assert_eq!(es.hero.stats[1].label, "Proyectos Entregados");
        assert_eq!(en.hero.stats[1].value, es.hero.stats[1].value);
        assert_eq!(es.hero.stats[3].icon, Icon::Code);
    }

    #[test]
    fn toggle_label_names_other_language() {
        let state = DashboardState::new(Lang::En);
        let view = DashboardView::build(&data(), &state, 2026);
        assert_eq!(view.header.toggle_label, "ES");
        let view = DashboardView::build(&data(), &DashboardState::new(Lang::Es), 2026);
        assert_eq!(view.header.toggle_label, "EN");
    }

    #[test]
    fn footer_and_languages() {
        let view = DashboardView::build(&data(), &DashboardState::new(Lang::Es), 2031);
        assert_eq!(
            view.footer.copyright,
            "© 2031 José Manuel Ortega. Todos los derechos reservados."
        );
        assert_eq!(view.languages.entries[0].name, "Español");
        assert_eq!(view.languages.entries[0].level, "Nativo");
    }

    #[test]
    fn hero_visibility_mirrors_state() {
        let mut state = DashboardState::default();
        assert!(!DashboardView::build(&data(), &state, 2026).hero.visible);
        state.dispatch(Action::Mounted);
        assert!(DashboardView::build(&data(), &state, 2026).hero.visible);
    }
}
