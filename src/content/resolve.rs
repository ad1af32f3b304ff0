// SPDX-License-Identifier: PMPL-1.0-or-later

//! Projection of localized fields onto one language.
//!
//! Resolution order: plain value as-is, then the entry for the requested
//! language, then the English entry, then an empty value. These functions
//! never fail.

use super::model::LocalizedField;
use crate::i18n::Lang;

impl<T> LocalizedField<T> {
    /// The value for `lang`, or `None` when neither `lang` nor English is present.
    pub fn resolve(&self, lang: Lang) -> Option<&T> {
        match self {
            LocalizedField::Plain(value) => Some(value),
            LocalizedField::Localized(map) => map
                .get(lang.code())
                .or_else(|| map.get(Lang::En.code())),
        }
    }
}

pub fn resolve_text(field: &LocalizedField<String>, lang: Lang) -> String {
    field.resolve(lang).cloned().unwrap_or_default()
}

pub fn resolve_text_list(field: &LocalizedField<Vec<String>>, lang: Lang) -> Vec<String> {
    field.resolve(lang).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer() -> LocalizedField<String> {
        LocalizedField::localized([
            ("en", "Developer".to_string()),
            ("es", "Desarrollador".to_string()),
        ])
    }

    #[test]
    fn picks_requested_language() {
        assert_eq!(resolve_text(&developer(), Lang::En), "Developer");
        assert_eq!(resolve_text(&developer(), Lang::Es), "Desarrollador");
    }

    #[test]
    fn plain_value_ignores_language() {
        let field = LocalizedField::plain("José Manuel Ortega".to_string());
        for lang in Lang::all() {
            assert_eq!(resolve_text(&field, *lang), "José Manuel Ortega");
        }
    }

    #[test]
    fn missing_language_falls_back_to_english() {
        let field = LocalizedField::localized([("en", "Madrid, Spain".to_string())]);
        assert_eq!(resolve_text(&field, Lang::Es), "Madrid, Spain");
    }

    #[test]
    fn missing_english_yields_empty() {
        let field = LocalizedField::localized([("fr", "Développeur".to_string())]);
        assert_eq!(resolve_text(&field, Lang::Es), "");
        assert_eq!(resolve_text(&field, Lang::En), "");
    }

    #[test]
    fn list_fields_resolve_the_same_way() {
        let field = LocalizedField::localized([
            ("en", vec!["Cloud".to_string(), "Data".to_string()]),
            ("es", vec!["Nube".to_string(), "Datos".to_string()]),
        ]);
        assert_eq!(resolve_text_list(&field, Lang::Es), vec!["Nube", "Datos"]);

        let partial = LocalizedField::localized([("es", vec!["Nube".to_string()])]);
        assert!(resolve_text_list(&partial, Lang::En).is_empty());

        let plain = LocalizedField::plain(vec!["Rust".to_string()]);
        assert_eq!(resolve_text_list(&plain, Lang::Es), vec!["Rust"]);
    }
}
