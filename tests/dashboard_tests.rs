// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end behaviour of the dashboard state and view

use cv_dashboard::content::{self, resolve_text, LocalizedField};
use cv_dashboard::dashboard::{
    perform_download, Action, DashboardState, DashboardView, Effect, Icon, Section,
};
use cv_dashboard::i18n::{Lang, LanguageContext};
use std::path::PathBuf;

fn developer() -> LocalizedField<String> {
    LocalizedField::localized([
        ("en", "Developer".to_string()),
        ("es", "Desarrollador".to_string()),
    ])
}

#[test]
fn test_field_resolves_after_language_toggle() {
    let mut ctx = LanguageContext::new(Lang::En);
    assert_eq!(resolve_text(&developer(), ctx.language()), "Developer");

    ctx.toggle_language();
    assert_eq!(resolve_text(&developer(), ctx.language()), "Desarrollador");
}

#[test]
fn test_toggle_language_is_an_involution() {
    for start in Lang::all() {
        let mut state = DashboardState::new(*start);
        state.dispatch(Action::ToggleLanguage);
        assert_ne!(state.language(), *start);
        state.dispatch(Action::ToggleLanguage);
        assert_eq!(state.language(), *start);
    }
}

#[test]
fn test_plain_fields_are_language_independent() {
    let fields = [
        LocalizedField::plain(String::new()),
        LocalizedField::plain("2017 - 2021".to_string()),
        LocalizedField::plain("Banco Meridiano".to_string()),
    ];
    for field in &fields {
        let en = resolve_text(field, Lang::En);
        let es = resolve_text(field, Lang::Es);
        assert_eq!(en, es);
    }
}

#[test]
fn test_expansion_scenario() {
    let mut state = DashboardState::default();
    state.dispatch(Action::ToggleExperience(3));
    state.dispatch(Action::ToggleExperience(3));
    assert_eq!(state.view().expanded_experience(), None);
    state.dispatch(Action::ToggleExperience(5));
    assert_eq!(state.view().expanded_experience(), Some(5));
}

#[test]
fn test_at_most_one_card_expanded() {
    let data = content::store::embedded().unwrap();
    let mut state = DashboardState::default();
    for id in [1, 4, 4, 2, 5, 3, 3, 1] {
        state.dispatch(Action::ToggleExperience(id));
        let view = DashboardView::build(&data, &state, 2026);
        let open = view.experience.entries.iter().filter(|c| c.expanded).count();
        assert!(open <= 1, "{} cards open after toggling {}", open, id);
    }
}

#[test]
fn test_visibility_only_turns_on() {
    let mut state = DashboardState::default();
    let sequence = [
        Action::ToggleExperience(2),
        Action::ToggleLanguage,
        Action::Mounted,
        Action::Navigate(Section::Education),
        Action::Mounted,
        Action::DownloadCv,
        Action::ToggleLanguage,
        Action::EmailMe,
    ];
    let mut seen_visible = false;
    for action in sequence {
        state.dispatch(action);
        if seen_visible {
            assert!(state.view().is_visible());
        }
        seen_visible |= state.view().is_visible();
    }
    assert!(seen_visible);
}

#[test]
fn test_download_file_per_language() {
    let mut es = DashboardState::new(Lang::Es);
    assert_eq!(
        es.dispatch(Action::DownloadCv),
        Some(Effect::Download {
            file_name: "CV_Jose_Manuel_Ortega_Spanish.pdf",
            source: PathBuf::from("public/CV_Jose_Manuel_Ortega_Spanish.pdf"),
        })
    );
    let mut en = DashboardState::new(Lang::En).with_assets("assets");
    assert_eq!(
        en.dispatch(Action::DownloadCv),
        Some(Effect::Download {
            file_name: "CV_Jose_Manuel_Ortega_English.pdf",
            source: PathBuf::from("assets/CV_Jose_Manuel_Ortega_English.pdf"),
        })
    );
}

#[test]
fn test_download_effect_copies_asset() {
    let assets = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("CV_Jose_Manuel_Ortega_Spanish.pdf"), b"%PDF").unwrap();

    let mut state = DashboardState::new(Lang::Es).with_assets(assets.path());
    let Some(Effect::Download { source, .. }) = state.dispatch(Action::DownloadCv) else {
        panic!("download action should yield a download effect");
    };
    let written = perform_download(&source, downloads.path()).unwrap();
    assert_eq!(written, downloads.path().join("CV_Jose_Manuel_Ortega_Spanish.pdf"));
}

#[test]
fn test_email_me_uses_personal_address() {
    let data = content::store::embedded().unwrap();
    let mut state = DashboardState::default().with_contact(&data.personal.email);
    assert_eq!(
        state.dispatch(Action::EmailMe),
        Some(Effect::Mail(data.personal.email.clone()))
    );
}

#[test]
fn test_full_page_resolves_in_spanish() {
    let data = content::store::embedded().unwrap();
    let mut state = DashboardState::new(Lang::Es);
    state.dispatch(Action::ToggleExperience(3));
    let view = DashboardView::build(&data, &state, 2026);

    assert_eq!(view.header.nav[0].label, "Sobre mí");
    assert_eq!(view.hero.location, "Madrid, España");
    assert_eq!(
        view.hero.stats.iter().map(|s| s.icon).collect::<Vec<_>>(),
        vec![Icon::Briefcase, Icon::Folder, Icon::Award, Icon::Code]
    );
    let card = view.expanded_card().unwrap();
    assert_eq!(card.id, data.experience(3).unwrap().id);
    assert_eq!(card.company, "Consejería de Sanidad");
    assert_eq!(
        card.details.as_ref().unwrap().technologies,
        vec!["Python", "PostgreSQL", "Previsión"]
    );
    let sectors = &view.analytics.charts[1].points;
    assert_eq!(sectors[1].label, "Banca");
}
