// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-language state shared by every view of the dashboard.

use super::catalog::{t_or_key, Lang};

/// Holds the single active language for a session.
///
/// Starts at the configured default and only changes through
/// [`LanguageContext::toggle_language`]. Nothing is persisted: a new
/// context always starts from its default again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageContext {
    active: Lang,
}

impl LanguageContext {
    pub fn new(default: Lang) -> Self {
        Self { active: default }
    }

    pub fn language(&self) -> Lang {
        self.active
    }

    /// Flip between the two supported languages.
    pub fn toggle_language(&mut self) -> Lang {
        self.active = self.active.toggled();
        tracing::debug!(lang = self.active.code(), "language toggled");
        self.active
    }

    /// Chrome strings projected for the active language.
    pub fn translations(&self) -> Translations {
        Translations { lang: self.active }
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

/// The chrome catalog seen through one language.
///
/// Every key resolves: a key missing from Spanish yields the English
/// string, and a key unknown to both yields the key path itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    lang: Lang,
}

impl Translations {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        t_or_key(self.lang, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default() {
        let ctx = LanguageContext::new(Lang::Es);
        assert_eq!(ctx.language(), Lang::Es);
    }

    #[test]
    fn toggle_twice_restores_language() {
        let mut ctx = LanguageContext::default();
        assert_eq!(ctx.toggle_language(), Lang::Es);
        assert_eq!(ctx.toggle_language(), Lang::En);
        assert_eq!(ctx.language(), Lang::En);
    }

    #[test]
    fn translations_follow_active_language() {
        let mut ctx = LanguageContext::default();
        assert_eq!(ctx.translations().get("nav.contact"), "Contact");
        ctx.toggle_language();
        assert_eq!(ctx.translations().get("nav.contact"), "Contacto");
    }

    #[test]
    fn translations_are_total() {
        for lang in Lang::all() {
            let tr = Translations::new(*lang);
            for key in super::super::catalog::keys() {
                assert!(!tr.get(key).is_empty());
            }
            assert_eq!(tr.get("no.such.key"), "no.such.key");
        }
    }
}
