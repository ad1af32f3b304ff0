// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text layout of the dashboard for terminals.
//!
//! The layout is a flat list of pre-coloured rows plus the row index of
//! every navigation anchor and experience card, so the interactive
//! terminal can scroll to them.

use crate::content::ExperienceId;
use crate::dashboard::view::{ChartView, DashboardView, ExperienceCard};
use crate::dashboard::Section;
use crate::render::charts;
use colored::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<String>,
    anchors: BTreeMap<Section, usize>,
    experience_rows: Vec<(ExperienceId, usize)>,
}

impl Page {
    /// Row where `section` starts, if the page has it.
    pub fn anchor(&self, section: Section) -> Option<usize> {
        self.anchors.get(&section).copied()
    }

    pub fn experience_row(&self, id: ExperienceId) -> Option<usize> {
        self.experience_rows
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, row)| *row)
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn mark(&mut self, section: Section) {
        self.anchors.insert(section, self.lines.len());
    }
}

pub struct PageFormatter {
    width: usize,
}

impl PageFormatter {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(40),
        }
    }

    pub fn print(&self, view: &DashboardView) {
        for line in self.layout(view, None).lines {
            println!("{}", line);
        }
    }

    /// Lay out the page. `cursor` highlights one experience card.
    pub fn layout(&self, view: &DashboardView, cursor: Option<ExperienceId>) -> Page {
        let mut page = Page::default();
        self.header(&mut page, view);
        self.hero(&mut page, view);

        page.mark(Section::About);
        self.title(&mut page, &view.about.title);
        self.paragraph(&mut page, &view.about.summary, "  ");
        page.blank();

        self.title(&mut page, &view.analytics.title);
        for chart in &view.analytics.charts {
            self.chart(&mut page, chart);
        }

        page.mark(Section::Experience);
        self.title(&mut page, &view.experience.title);
        for card in &view.experience.entries {
            self.experience(&mut page, view, card, cursor == Some(card.id));
        }

        page.mark(Section::Skills);
        self.skills(&mut page, view);

        page.mark(Section::Education);
        self.education(&mut page, view);

        self.title(&mut page, &view.languages.title);
        for language in &view.languages.entries {
            page.push(format!("  {} · {}", language.name.bold(), language.level.cyan()));
        }
        page.blank();

        page.mark(Section::Contact);
        self.title(&mut page, &view.contact.title);
        self.paragraph(&mut page, &view.contact.subtitle, "  ");
        page.push(format!(
            "  [{}] {}   [{}]",
            view.contact.email_me.cyan(),
            view.contact.email,
            view.contact.download_cv.cyan()
        ));
        page.blank();

        page.push(format!("{}", "─".repeat(self.width).dimmed()));
        page.push(format!("{}", view.footer.copyright.dimmed()));
        page.push(format!("{}", view.footer.subtitle.dimmed()));
        page
    }

    fn header(&self, page: &mut Page, view: &DashboardView) {
        let nav: Vec<String> = view
            .header
            .nav
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{} {}", (i + 1).to_string().dimmed(), item.label))
            .collect();
        page.push(format!(
            "{}   {}   [{}]  [{}]",
            view.header.name.bold().cyan(),
            nav.join("  "),
            view.header.toggle_label.yellow(),
            view.header.download_label.cyan()
        ));
        page.push(format!("{}", "═".repeat(self.width).dimmed()));
        page.blank();
    }

    fn hero(&self, page: &mut Page, view: &DashboardView) {
        let hero = &view.hero;
        // Until the first frame is drawn the hero is dimmed; this is the
        // entrance transition.
        let style = |text: &str, strong: bool| -> String {
            if !hero.visible {
                format!("{}", text.dimmed())
            } else if strong {
                format!("{}", text.bold())
            } else {
                text.to_string()
            }
        };

        page.push(format!("  {}", style(&format!("● {}", hero.available), false).green()));
        page.blank();
        page.push(format!("  {}", style(&hero.name.to_uppercase(), true)));
        page.push(format!("  {}", style(&hero.title, false).cyan()));
        for line in wrap(&hero.tagline, self.width.saturating_sub(2)) {
            page.push(format!("  {}", style(&line, false)));
        }
        page.blank();

        let cards: Vec<String> = hero
            .stats
            .iter()
            .map(|stat| format!("{} {} {}", stat.icon.glyph(), style(stat.value, true), stat.label))
            .collect();
        page.push(format!("  {}", cards.join("   ")));
        page.blank();
        page.push(format!(
            "  ✉ {}   ☎ {}   ⌖ {}",
            hero.email, hero.phone, hero.location
        ));
        page.blank();
    }

    fn title(&self, page: &mut Page, title: &str) {
        page.push(format!("{}", title.to_uppercase().bold().yellow()));
        page.blank();
    }

    fn paragraph(&self, page: &mut Page, text: &str, indent: &str) {
        for line in wrap(text, self.width.saturating_sub(indent.len())) {
            page.push(format!("{}{}", indent, line));
        }
    }

    fn chart(&self, page: &mut Page, chart: &ChartView) {
        page.push(format!("  {}", chart.title.bold()));
        page.push(format!("  {}", chart.description.dimmed()));
        for line in charts::chart_lines(chart, self.width.saturating_sub(4)) {
            page.push(format!("    {}", line.cyan()));
        }
        page.blank();
    }

    fn experience(&self, page: &mut Page, view: &DashboardView, card: &ExperienceCard, selected: bool) {
        page.experience_rows.push((card.id, page.lines.len()));
        let indicator = if selected { "➤".green() } else { " ".normal() };
        let chevron = if card.expanded { "▾" } else { "▸" };
        page.push(format!(
            "{} {} {}  {}",
            indicator,
            chevron,
            card.position.bold(),
            card.period.dimmed()
        ));
        page.push(format!("    {}", card.company.cyan()));

        if let Some(details) = &card.details {
            page.push(format!("    {}", "─".repeat(self.width.saturating_sub(8).min(60)).dimmed()));
            self.paragraph(page, &details.description, "    ");
            page.push(format!("    {}", view.experience.technologies_label.bold()));
            page.push(format!("      {}", details.technologies.join(" · ")));
            page.push(format!("    {}", view.experience.achievements_label.bold()));
            for achievement in &details.achievements {
                page.push(format!("      {} {}", "↗".green(), achievement));
            }
        }
        page.blank();
    }

    fn skills(&self, page: &mut Page, view: &DashboardView) {
        let skills = &view.skills;
        self.title(page, &skills.title);

        page.push(format!("  {}", skills.technical_label.bold()));
        let name_width = skills
            .technical
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);
        for skill in &skills.technical {
            page.push(format!(
                "    {:<w$}  {} {:>3}%",
                skill.name,
                charts::level_bar(skill.level, 20).cyan(),
                skill.level,
                w = name_width
            ));
        }
        page.blank();
        page.push(format!("  {}", skills.business_label.bold()));
        self.paragraph(page, &skills.business.join(" · "), "    ");
        page.blank();
        page.push(format!("  {}", skills.tools_label.bold()));
        self.paragraph(page, &skills.tools.join(" · "), "    ");
        page.blank();
    }

    fn education(&self, page: &mut Page, view: &DashboardView) {
        let education = &view.education;
        self.title(page, &education.title);
        self.chart(page, &education.progress);
        for entry in &education.entries {
            let badge = if entry.certified {
                format!(" [{}]", education.certified_label).green().to_string()
            } else {
                String::new()
            };
            page.push(format!(
                "  {}  {}{}",
                entry.year.cyan(),
                entry.degree.bold(),
                badge
            ));
            page.push(format!("        {}", entry.institution.dimmed()));
        }
        page.blank();
    }
}

/// Greedy word wrap on character counts.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store;
    use crate::dashboard::{Action, DashboardState};
    use crate::i18n::Lang;

    fn page(state: &DashboardState, cursor: Option<ExperienceId>) -> Page {
        let data = store::embedded().unwrap();
        let view = DashboardView::build(&data, state, 2026);
        PageFormatter::new(80).layout(&view, cursor)
    }

    #[test]
    fn wrap_respects_width() {
        assert_eq!(wrap("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("toolongword", 4), vec!["toolongword"]);
    }

    #[test]
    fn anchors_are_in_page_order() {
        let page = page(&DashboardState::default(), None);
        let rows: Vec<usize> = Section::all()
            .iter()
            .map(|s| page.anchor(*s).expect("anchor present"))
            .collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]), "{:?}", rows);
        assert!(rows[4] < page.lines.len());
    }

    #[test]
    fn expanding_adds_detail_rows() {
        let mut state = DashboardState::new(Lang::En);
        let collapsed = page(&state, None);
        state.dispatch(Action::ToggleExperience(2));
        let expanded = page(&state, None);

        assert!(expanded.lines.len() > collapsed.lines.len());
        assert!(expanded
            .lines
            .iter()
            .any(|l| l.contains("Automated 85% of regulatory submissions")));
        // Rows above the expanded card do not move.
        assert_eq!(expanded.experience_row(2), collapsed.experience_row(2));
        assert!(expanded.anchor(Section::Skills) > collapsed.anchor(Section::Skills));
    }

    #[test]
    fn experience_ids_follow_data_order() {
        let page = page(&DashboardState::default(), Some(1));
        let rows: Vec<_> = (1..=5).map(|id| page.experience_row(id).unwrap()).collect();
        assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
