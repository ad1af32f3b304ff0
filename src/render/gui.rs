// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop window for the dashboard.

use crate::content::CvData;
use crate::dashboard::view::{ChartKind, ChartView, DashboardView};
use crate::dashboard::{mailto, perform_download, Action, DashboardState, Effect, Section};
use crate::render::HostOptions;
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);

pub struct DashboardGui {
    data: CvData,
    options: HostOptions,
    state: DashboardState,
    scroll_target: Option<Section>,
    status: Option<String>,
}

impl DashboardGui {
    pub fn run(data: CvData, options: HostOptions, state: DashboardState) -> Result<()> {
        let native = NativeOptions::default();
        let title = format!("{} · CV", data.personal.name);
        let app = Self {
            data,
            options,
            state,
            scroll_target: None,
            status: None,
        };
        eframe::run_native(&title, native, Box::new(|_cc| Box::new(app)))
            .map_err(|err| anyhow!("failed to launch dashboard window: {err}"))?;
        Ok(())
    }

    fn dispatch(&mut self, action: Action) {
        match self.state.dispatch(action) {
            Some(Effect::ScrollTo(section)) => self.scroll_target = Some(section),
            Some(Effect::Download { file_name, source }) => {
                let tr = self.state.translations();
                self.status = Some(format!("{} {}", tr.get("tui.download"), file_name));
                perform_download(&source, &self.options.download_dir);
            }
            Some(Effect::Mail(address)) => {
                let tr = self.state.translations();
                self.status = Some(format!("{} {}", tr.get("tui.mail"), mailto(&address)));
            }
            None => {}
        }
    }
}

impl App for DashboardGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let view = DashboardView::build(&self.data, &self.state, self.options.year);
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(&view.header.name).color(ACCENT));
                ui.separator();
                for item in &view.header.nav {
                    if ui.link(&item.label).clicked() {
                        actions.push(Action::Navigate(item.section));
                    }
                }
                ui.separator();
                if ui
                    .button(&view.header.toggle_label)
                    .on_hover_text(view.lang.toggled().native_name())
                    .clicked()
                {
                    actions.push(Action::ToggleLanguage);
                }
                if ui.button(&view.header.download_label).clicked() {
                    actions.push(Action::DownloadCv);
                }
            });
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(egui::RichText::new(status).color(SUCCESS));
            });
        }

        let fade = ctx.animate_bool_with_time(egui::Id::new("hero-fade"), view.hero.visible, 1.0);
        let target = self.scroll_target.take();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_hero(ui, &view, fade);
                section(ui, &view.about.title, Some(Section::About), target, |ui| {
                    ui.label(&view.about.summary);
                });
                section(ui, &view.analytics.title, None, target, |ui| {
                    for chart in &view.analytics.charts {
                        render_chart(ui, chart);
                    }
                });
                section(ui, &view.experience.title, Some(Section::Experience), target, |ui| {
                    render_experience(ui, &view, &mut actions);
                });
                section(ui, &view.skills.title, Some(Section::Skills), target, |ui| {
                    render_skills(ui, &view);
                });
                section(ui, &view.education.title, Some(Section::Education), target, |ui| {
                    render_education(ui, &view);
                });
                section(ui, &view.languages.title, None, target, |ui| {
                    for language in &view.languages.entries {
                        ui.horizontal(|ui| {
                            ui.strong(&language.name);
                            ui.label(egui::RichText::new(&language.level).color(ACCENT));
                        });
                    }
                });
                section(ui, &view.contact.title, Some(Section::Contact), target, |ui| {
                    ui.label(&view.contact.subtitle);
                    ui.horizontal(|ui| {
                        if ui.button(&view.contact.email_me).clicked() {
                            actions.push(Action::EmailMe);
                        }
                        if ui.button(&view.contact.download_cv).clicked() {
                            actions.push(Action::DownloadCv);
                        }
                    });
                });
                ui.separator();
                ui.weak(&view.footer.copyright);
                ui.weak(&view.footer.subtitle);
            });
        });

        if !self.state.view().is_visible() {
            actions.push(Action::Mounted);
            ctx.request_repaint();
        }
        for action in actions {
            self.dispatch(action);
        }
    }
}

fn section(
    ui: &mut egui::Ui,
    title: &str,
    anchor: Option<Section>,
    target: Option<Section>,
    body: impl FnOnce(&mut egui::Ui),
) {
    ui.add_space(24.0);
    let response = ui.heading(title);
    if let Some(anchor) = anchor {
        if target == Some(anchor) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
    }
    ui.add_space(8.0);
    body(ui);
}

fn render_hero(ui: &mut egui::Ui, view: &DashboardView, fade: f32) {
    let hero = &view.hero;
    let text = ui.visuals().text_color().gamma_multiply(fade);
    let accent = ACCENT.gamma_multiply(fade);

    ui.add_space(16.0);
    ui.label(egui::RichText::new(&hero.available).color(SUCCESS.gamma_multiply(fade)));
    ui.label(egui::RichText::new(&hero.name).size(40.0).strong().color(text));
    ui.label(egui::RichText::new(&hero.title).size(22.0).color(accent));
    ui.label(egui::RichText::new(&hero.tagline).color(text));
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        for stat in &hero.stats {
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(stat.icon.glyph()).color(accent));
                    ui.label(egui::RichText::new(stat.value).size(24.0).strong().color(text));
                    ui.label(egui::RichText::new(&stat.label).color(text));
                });
            });
        }
    });
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("✉ {}", hero.email));
        ui.label(format!("☎ {}", hero.phone));
        ui.label(format!("⌖ {}", hero.location));
    });
}

fn render_chart(ui: &mut egui::Ui, chart: &ChartView) {
    ui.add_space(8.0);
    ui.strong(&chart.title);
    ui.weak(&chart.description);
    let total: f64 = chart.points.iter().map(|p| p.value).sum();
    let max = chart.points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    egui::Grid::new(format!("chart-{:?}", chart.kind))
        .num_columns(2)
        .show(ui, |ui| {
            for point in &chart.points {
                let (fraction, text) = match chart.kind {
                    ChartKind::SectorDistribution if total > 0.0 => {
                        let share = point.value / total;
                        (share, format!("{:.0}%", share * 100.0))
                    }
                    _ if max > 0.0 => (point.value / max, format!("{}", point.value)),
                    _ => (0.0, format!("{}", point.value)),
                };
                ui.label(&point.label);
                ui.add(
                    egui::ProgressBar::new(fraction as f32)
                        .text(text)
                        .desired_width(320.0),
                );
                ui.end_row();
            }
        });
}

fn render_experience(ui: &mut egui::Ui, view: &DashboardView, actions: &mut Vec<Action>) {
    let section = &view.experience;
    for card in &section.entries {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            let chevron = if card.expanded { "▾" } else { "▸" };
            let header = format!("{} {}  ·  {}", chevron, card.position, card.period);
            if ui
                .selectable_label(card.expanded, egui::RichText::new(header).strong())
                .clicked()
            {
                actions.push(Action::ToggleExperience(card.id));
            }
            ui.label(egui::RichText::new(&card.company).color(ACCENT));

            if let Some(details) = &card.details {
                ui.separator();
                ui.label(&details.description);
                ui.strong(&section.technologies_label);
                ui.horizontal_wrapped(|ui| {
                    for tech in &details.technologies {
                        ui.label(egui::RichText::new(tech).code());
                    }
                });
                ui.strong(&section.achievements_label);
                for achievement in &details.achievements {
                    ui.label(format!("↗ {}", achievement));
                }
            }
        });
    }
}

fn render_skills(ui: &mut egui::Ui, view: &DashboardView) {
    let skills = &view.skills;
    ui.strong(&skills.technical_label);
    egui::Grid::new("technical-skills").num_columns(2).show(ui, |ui| {
        for skill in &skills.technical {
            ui.label(&skill.name);
            ui.add(
                egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                    .text(format!("{}%", skill.level))
                    .desired_width(320.0),
            );
            ui.end_row();
        }
    });
    ui.add_space(8.0);
    ui.strong(&skills.business_label);
    ui.horizontal_wrapped(|ui| {
        for skill in &skills.business {
            ui.label(egui::RichText::new(skill).color(ACCENT));
        }
    });
    ui.add_space(8.0);
    ui.strong(&skills.tools_label);
    ui.horizontal_wrapped(|ui| {
        for tool in &skills.tools {
            ui.label(egui::RichText::new(tool).code());
        }
    });
}

fn render_education(ui: &mut egui::Ui, view: &DashboardView) {
    let education = &view.education;
    render_chart(ui, &education.progress);
    ui.add_space(8.0);
    for entry in &education.entries {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            if entry.certified {
                ui.label(egui::RichText::new(&education.certified_label).color(SUCCESS));
            }
            ui.label(egui::RichText::new(&entry.year).color(ACCENT));
            ui.strong(&entry.degree);
            ui.weak(&entry.institution);
        });
    }
}
