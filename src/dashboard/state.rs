// SPDX-License-Identifier: PMPL-1.0-or-later

//! Session state of the dashboard and its transitions.
//!
//! Hosts (terminal, window) translate input into [`Action`]s and feed them
//! to [`DashboardState::dispatch`]. The returned [`Effect`] is for the host
//! to carry out; the state itself never touches the outside world.

use super::download::{cv_file_name, PUBLIC_ROOT};
use super::section::Section;
use crate::content::ExperienceId;
use crate::i18n::{Lang, LanguageContext, Translations};
use std::path::PathBuf;

/// View-only state. Resets with every new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    expanded_experience: Option<ExperienceId>,
    is_visible: bool,
}

impl ViewState {
    pub fn expanded_experience(&self) -> Option<ExperienceId> {
        self.expanded_experience
    }

    pub fn is_expanded(&self, id: ExperienceId) -> bool {
        self.expanded_experience == Some(id)
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Collapse `id` if it is open, otherwise open it in place of any other.
    pub fn toggle_experience(&mut self, id: ExperienceId) {
        self.expanded_experience = if self.expanded_experience == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Record that the first frame was drawn. Returns whether this call
    /// changed anything.
    pub fn mark_visible(&mut self) -> bool {
        let changed = !self.is_visible;
        self.is_visible = true;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLanguage,
    ToggleExperience(ExperienceId),
    /// The host finished drawing its first frame.
    Mounted,
    Navigate(Section),
    DownloadCv,
    EmailMe,
}

/// Work the host performs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollTo(Section),
    /// Save `source` (under the public asset root) as `file_name`.
    Download {
        file_name: &'static str,
        source: PathBuf,
    },
    /// Open a message to this address.
    Mail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    language: LanguageContext,
    view: ViewState,
    asset_root: PathBuf,
    contact: Option<String>,
}

impl DashboardState {
    pub fn new(default_lang: Lang) -> Self {
        Self {
            language: LanguageContext::new(default_lang),
            view: ViewState::default(),
            asset_root: PathBuf::from(PUBLIC_ROOT),
            contact: None,
        }
    }

    /// Serve CV downloads from `asset_root` instead of `public/`.
    pub fn with_assets(mut self, asset_root: impl Into<PathBuf>) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    /// Address behind the "email me" action.
    pub fn with_contact(mut self, email: impl Into<String>) -> Self {
        self.contact = Some(email.into());
        self
    }

    pub fn language(&self) -> Lang {
        self.language.language()
    }

    pub fn translations(&self) -> Translations {
        self.language.translations()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::ToggleLanguage => {
                self.language.toggle_language();
                None
            }
            Action::ToggleExperience(id) => {
                self.view.toggle_experience(id);
                tracing::debug!(id, expanded = ?self.view.expanded_experience, "experience toggled");
                None
            }
            Action::Mounted => {
                if self.view.mark_visible() {
                    tracing::debug!("dashboard visible");
                }
                None
            }
            Action::Navigate(section) => Some(Effect::ScrollTo(section)),
            Action::DownloadCv => {
                let file_name = cv_file_name(self.language());
                Some(Effect::Download {
                    file_name,
                    source: self.asset_root.join(file_name),
                })
            }
            Action::EmailMe => {
                if self.contact.is_none() {
                    tracing::debug!("no contact address");
                }
                self.contact.clone().map(Effect::Mail)
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

/// `mailto:` link for an address.
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_twice_collapses() {
        let mut state = DashboardState::default();
        state.dispatch(Action::ToggleExperience(3));
        assert_eq!(state.view().expanded_experience(), Some(3));
        state.dispatch(Action::ToggleExperience(3));
        assert_eq!(state.view().expanded_experience(), None);
        state.dispatch(Action::ToggleExperience(5));
        assert_eq!(state.view().expanded_experience(), Some(5));
    }

    #[test]
    fn other_id_replaces_expanded() {
        let mut view = ViewState::default();
        view.toggle_experience(1);
        view.toggle_experience(2);
        assert!(view.is_expanded(2));
        assert!(!view.is_expanded(1));
    }

    #[test]
    fn visibility_is_set_once() {
        let mut state = DashboardState::default();
        assert!(!state.view().is_visible());
        state.dispatch(Action::Mounted);
        assert!(state.view().is_visible());

        let mut view = state.view().clone();
        assert!(!view.mark_visible());
        for action in [
            Action::ToggleLanguage,
            Action::ToggleExperience(1),
            Action::Navigate(Section::Skills),
            Action::DownloadCv,
            Action::Mounted,
        ] {
            state.dispatch(action);
            assert!(state.view().is_visible());
        }
    }

    #[test]
    fn download_uses_active_language() {
        let mut state = DashboardState::new(Lang::Es).with_assets("site/public");
        assert_eq!(
            state.dispatch(Action::DownloadCv),
            Some(Effect::Download {
                file_name: "CV_Jose_Manuel_Ortega_Spanish.pdf",
                source: PathBuf::from("site/public/CV_Jose_Manuel_Ortega_Spanish.pdf"),
            })
        );
        state.dispatch(Action::ToggleLanguage);
        assert_eq!(
            state.dispatch(Action::DownloadCv),
            Some(Effect::Download {
                file_name: "CV_Jose_Manuel_Ortega_English.pdf",
                source: PathBuf::from("site/public/CV_Jose_Manuel_Ortega_English.pdf"),
            })
        );
    }

    #[test]
    fn download_defaults_to_public_root() {
        let mut state = DashboardState::default();
        match state.dispatch(Action::DownloadCv) {
            Some(Effect::Download { source, .. }) => {
                assert_eq!(source, PathBuf::from("public/CV_Jose_Manuel_Ortega_English.pdf"))
            }
            other => panic!("expected download, got {:?}", other),
        }
    }

    #[test]
    fn navigation_and_mail_are_effects_only() {
        let mut state = DashboardState::default().with_contact("jm@example.es");
        let before = state.clone();
        assert_eq!(
            state.dispatch(Action::Navigate(Section::Contact)),
            Some(Effect::ScrollTo(Section::Contact))
        );
        assert_eq!(
            state.dispatch(Action::EmailMe),
            Some(Effect::Mail("jm@example.es".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn mail_without_contact_has_no_effect() {
        let mut state = DashboardState::default();
        assert_eq!(state.dispatch(Action::EmailMe), None);
    }

    #[test]
    fn mailto_link() {
        assert_eq!(mailto("a@b.es"), "mailto:a@b.es");
    }
}
