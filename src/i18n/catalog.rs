// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chrome string catalog for the dashboard.
//!
//! Navigation labels, section headings, badges and button captions live
//! here as compile-time static tables, separate from the résumé content.
//! Keys are dotted paths (`"nav.about"`, `"hero.stats.projects"`).
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Spanish entry to `ES` (the parity test fails otherwise)

use serde::{Deserialize, Serialize};

/// Languages the dashboard can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Surrounding whitespace and case
    /// are ignored.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// Parse a code, falling back to `default` for anything unsupported.
    pub fn from_code_or(code: &str, default: Lang) -> Lang {
        Lang::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code, fallback = default.code(), "unsupported language code");
            default
        })
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es]
    }

    /// The other language of the pair.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a chrome key in the specified language.
///
/// Falls back to English if the key is not found in the requested language
/// and returns `""` if English does not define it either.
///
/// # Examples
///
/// ```
/// use cv_dashboard::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "nav.about"), "About");
/// assert_eq!(t(Lang::Es, "nav.about"), "Sobre mí");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Like [`t`], but returns the key itself when nothing defines it.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

/// Keys defined in English but missing from `lang`.
pub fn missing_keys(lang: Lang) -> Vec<&'static str> {
    let catalog = catalog_for(lang);
    EN.iter()
        .map(|&(key, _)| key)
        .filter(|key| lookup(catalog, key).is_none())
        .collect()
}

/// Every chrome key, in catalog order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    EN.iter().map(|&(key, _)| key)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.about", "About"),
    ("nav.experience", "Experience"),
    ("nav.skills", "Skills"),
    ("nav.education", "Education"),
    ("nav.contact", "Contact"),
    // Hero
    ("hero.available", "Available for new opportunities"),
    ("hero.download_cv", "Download CV"),
    ("hero.stats.experience", "Years of Experience"),
    ("hero.stats.projects", "Projects Delivered"),
    ("hero.stats.certifications", "Certifications"),
    ("hero.stats.technologies", "Technologies"),
    // About
    ("about.title", "About Me"),
    // Analytics
    ("analytics.title", "Career Analytics"),
    ("analytics.career_progression", "Career Progression"),
    ("analytics.career_progression_desc", "Responsibility level over the years"),
    ("analytics.sector_distribution", "Sector Distribution"),
    ("analytics.sector_distribution_desc", "Share of experience by industry"),
    ("analytics.technology_experience", "Technology Experience"),
    ("analytics.technology_experience_desc", "Years working with each technology"),
    ("analytics.impact_metrics", "Impact Metrics"),
    ("analytics.impact_metrics_desc", "Measured results of delivered projects"),
    // Experience
    ("experience.title", "Professional Experience"),
    ("experience.technologies", "Technologies"),
    ("experience.achievements", "Key Achievements"),
    // Skills
    ("skills.title", "Skills & Expertise"),
    ("skills.technical", "Technical Skills"),
    ("skills.business", "Business Skills"),
    ("skills.tools", "Tools & Platforms"),
    // Education
    ("education.title", "Education & Certifications"),
    ("education.certification_progress", "Certification Progress"),
    ("education.certification_progress_desc", "Certifications earned over time"),
    ("education.certified", "Certified"),
    // Spoken languages
    ("languages.title", "Languages"),
    ("languages.native", "Native"),
    ("languages.professional", "Professional working proficiency"),
    // Contact
    ("contact.title", "Let's Work Together"),
    ("contact.subtitle", "Open to new challenges in data, analytics and digital transformation."),
    ("contact.email_me", "Email Me"),
    ("contact.download_cv", "Download CV"),
    // Footer
    ("footer.rights", "All rights reserved."),
    ("footer.subtitle", "Built with Rust."),
    // Terminal host
    ("tui.controls", "[l] Language  [j/k] Select  [Enter] Expand  [1-5] Jump  [PgUp/PgDn] Scroll  [d] CV  [m] Mail  [q] Quit"),
    ("tui.download", "Downloading"),
    ("tui.mail", "Write to"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    // Navigation
    ("nav.about", "Sobre mí"),
    ("nav.experience", "Experiencia"),
    ("nav.skills", "Habilidades"),
    ("nav.education", "Formación"),
    ("nav.contact", "Contacto"),
    // Hero
    ("hero.available", "Disponible para nuevas oportunidades"),
    ("hero.download_cv", "Descargar CV"),
    ("hero.stats.experience", "Años de Experiencia"),
    ("hero.stats.projects", "Proyectos Entregados"),
    ("hero.stats.certifications", "Certificaciones"),
    ("hero.stats.technologies", "Tecnologías"),
    // About
    ("about.title", "Sobre Mí"),
    // Analytics
    ("analytics.title", "Analítica de Carrera"),
    ("analytics.career_progression", "Progresión Profesional"),
    ("analytics.career_progression_desc", "Nivel de responsabilidad a lo largo de los años"),
    ("analytics.sector_distribution", "Distribución por Sector"),
    ("analytics.sector_distribution_desc", "Reparto de la experiencia por industria"),
    ("analytics.technology_experience", "Experiencia Tecnológica"),
    ("analytics.technology_experience_desc", "Años trabajando con cada tecnología"),
    ("analytics.impact_metrics", "Métricas de Impacto"),
    ("analytics.impact_metrics_desc", "Resultados medidos de los proyectos entregados"),
    // Experience
    ("experience.title", "Experiencia Profesional"),
    ("experience.technologies", "Tecnologías"),
    ("experience.achievements", "Logros Clave"),
    // Skills
    ("skills.title", "Habilidades y Conocimientos"),
    ("skills.technical", "Habilidades Técnicas"),
    ("skills.business", "Habilidades de Negocio"),
    ("skills.tools", "Herramientas y Plataformas"),
    // Education
    ("education.title", "Formación y Certificaciones"),
    ("education.certification_progress", "Progreso de Certificaciones"),
    ("education.certification_progress_desc", "Certificaciones obtenidas a lo largo del tiempo"),
    ("education.certified", "Certificado"),
    // Spoken languages
    ("languages.title", "Idiomas"),
    ("languages.native", "Nativo"),
    ("languages.professional", "Competencia profesional"),
    // Contact
    ("contact.title", "Trabajemos Juntos"),
    ("contact.subtitle", "Abierto a nuevos retos en datos, analítica y transformación digital."),
    ("contact.email_me", "Escríbeme"),
    ("contact.download_cv", "Descargar CV"),
    // Footer
    ("footer.rights", "Todos los derechos reservados."),
    ("footer.subtitle", "Hecho con Rust."),
    // Terminal host
    ("tui.controls", "[l] Idioma  [j/k] Elegir  [Enter] Expandir  [1-5] Ir a  [RePág/AvPág] Desplazar  [d] CV  [m] Correo  [q] Salir"),
    ("tui.download", "Descargando"),
    ("tui.mail", "Escribir a"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            let result = t(Lang::En, key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn spanish_catalog_is_complete() {
        assert!(
            missing_keys(Lang::Es).is_empty(),
            "ES is missing {:?}",
            missing_keys(Lang::Es)
        );
        assert_eq!(ES.len(), EN.len(), "ES catalog key count mismatch");
    }

    #[test]
    fn spanish_strings_differ_from_english() {
        assert_eq!(t(Lang::Es, "nav.experience"), "Experiencia");
        assert_eq!(t(Lang::En, "nav.experience"), "Experience");
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::Es, "nonexistent.key"), "");
    }

    #[test]
    fn t_or_key_returns_key_for_missing() {
        assert_eq!(t_or_key(Lang::En, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn unsupported_code_falls_back() {
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code_or("fr", Lang::Es), Lang::Es);
        assert_eq!(Lang::from_code_or(" ES ", Lang::En), Lang::Es);
    }

    #[test]
    fn toggled_is_an_involution() {
        for lang in Lang::all() {
            assert_ne!(lang.toggled(), *lang);
            assert_eq!(lang.toggled().toggled(), *lang);
        }
    }
}
