// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive terminal dashboard

use crate::content::{CvData, ExperienceId};
use crate::dashboard::{
    mailto, perform_download, Action, DashboardState, DashboardView, Effect, Section,
};
use crate::render::formatter::{Page, PageFormatter};
use crate::render::HostOptions;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

/// Rows reserved under the page for the status and controls lines.
const FOOTER_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiCommand {
    Quit,
    Dispatch(Action),
    ToggleSelected,
    MoveCursor(isize),
    Scroll(isize),
}

pub fn command_for(code: KeyCode) -> Option<TuiCommand> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => TuiCommand::Quit,
        KeyCode::Char('l') => TuiCommand::Dispatch(Action::ToggleLanguage),
        KeyCode::Char('d') => TuiCommand::Dispatch(Action::DownloadCv),
        KeyCode::Char('m') => TuiCommand::Dispatch(Action::EmailMe),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize;
            TuiCommand::Dispatch(Action::Navigate(Section::from_shortcut(index)?))
        }
        KeyCode::Enter | KeyCode::Char(' ') => TuiCommand::ToggleSelected,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => TuiCommand::MoveCursor(1),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => TuiCommand::MoveCursor(-1),
        KeyCode::PageDown => TuiCommand::Scroll(10),
        KeyCode::PageUp => TuiCommand::Scroll(-10),
        KeyCode::Home => TuiCommand::Scroll(isize::MIN),
        KeyCode::End => TuiCommand::Scroll(isize::MAX),
        _ => return None,
    };
    Some(command)
}

/// Largest useful scroll offset for a page of `total` rows.
pub fn max_scroll(total: usize, body_rows: usize) -> usize {
    total.saturating_sub(body_rows)
}

/// Terminal-side session: dashboard state plus cursor and viewport.
pub struct TuiSession<'a> {
    data: &'a CvData,
    options: &'a HostOptions,
    state: DashboardState,
    cursor: usize,
    scroll: usize,
    follow_cursor: bool,
    status: Option<String>,
}

impl<'a> TuiSession<'a> {
    pub fn new(data: &'a CvData, options: &'a HostOptions, state: DashboardState) -> Self {
        Self {
            data,
            options,
            state,
            cursor: 0,
            scroll: 0,
            follow_cursor: false,
            status: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn selected(&self) -> Option<ExperienceId> {
        self.data.experience.get(self.cursor).map(|entry| entry.id)
    }

    pub fn layout(&self, width: usize) -> Page {
        let view = DashboardView::build(self.data, &self.state, self.options.year);
        PageFormatter::new(width).layout(&view, self.selected())
    }

    /// Apply one command against the page currently on screen. Returns
    /// `false` when the session should end.
    pub fn apply(&mut self, command: TuiCommand, page: &Page, body_rows: usize) -> bool {
        match command {
            TuiCommand::Quit => return false,
            TuiCommand::Dispatch(action) => {
                if let Some(effect) = self.state.dispatch(action) {
                    self.run_effect(effect, page);
                }
            }
            TuiCommand::ToggleSelected => {
                if let Some(id) = self.selected() {
                    self.state.dispatch(Action::ToggleExperience(id));
                    self.follow_cursor = true;
                }
            }
            TuiCommand::MoveCursor(delta) => {
                let count = self.data.experience.len();
                if count > 0 {
                    let next = self.cursor as isize + delta;
                    self.cursor = next.clamp(0, count as isize - 1) as usize;
                    self.follow_cursor = true;
                }
            }
            TuiCommand::Scroll(delta) => {
                let max = max_scroll(page.lines.len(), body_rows);
                self.scroll = (self.scroll as isize).saturating_add(delta).clamp(0, max as isize) as usize;
            }
        }
        true
    }

    /// Bring the viewport in line with a freshly laid out page.
    pub fn settle(&mut self, page: &Page, body_rows: usize) {
        if self.follow_cursor {
            self.follow_cursor = false;
            if let Some(row) = self.selected().and_then(|id| page.experience_row(id)) {
                if row < self.scroll || row >= self.scroll + body_rows {
                    self.scroll = row;
                }
            }
        }
        self.scroll = self.scroll.min(max_scroll(page.lines.len(), body_rows));
    }

    fn run_effect(&mut self, effect: Effect, page: &Page) {
        let tr = self.state.translations();
        match effect {
            Effect::ScrollTo(section) => match page.anchor(section) {
                Some(row) => self.scroll = row,
                None => tracing::debug!(anchor = section.anchor(), "no such anchor"),
            },
            Effect::Download { file_name, source } => {
                self.status = Some(format!("{} {}", tr.get("tui.download"), file_name));
                perform_download(&source, &self.options.download_dir);
            }
            Effect::Mail(address) => {
                self.status = Some(format!("{} {}", tr.get("tui.mail"), mailto(&address)));
            }
        }
    }
}

pub struct DashboardTui;

impl DashboardTui {
    pub fn run(data: &CvData, options: &HostOptions, state: DashboardState) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        let result = Self::run_inner(TuiSession::new(data, options, state));
        execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(mut session: TuiSession<'_>) -> Result<()> {
        let mut stdout = stdout();

        loop {
            let (cols, rows) = terminal::size()?;
            let body_rows = (rows as usize).saturating_sub(FOOTER_ROWS).max(1);
            let page = session.layout(cols as usize);
            session.settle(&page, body_rows);

            Self::render(&mut stdout, &session, &page, body_rows)?;
            if !session.state().view().is_visible() {
                session.state.dispatch(Action::Mounted);
            }

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                    if kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(command) = command_for(code) {
                        if !session.apply(command, &page, body_rows) {
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn render(
        stdout: &mut impl Write,
        session: &TuiSession<'_>,
        page: &Page,
        body_rows: usize,
    ) -> Result<()> {
        queue!(stdout, terminal::Clear(ClearType::All))?;
        for (row, line) in page
            .lines
            .iter()
            .skip(session.scroll())
            .take(body_rows)
            .enumerate()
        {
            queue!(stdout, cursor::MoveTo(0, row as u16), Print(line))?;
        }

        let tr = session.state().translations();
        let status = session.status().unwrap_or_default();
        queue!(
            stdout,
            cursor::MoveTo(0, body_rows as u16),
            Print(status.green()),
            cursor::MoveTo(0, (body_rows + 1) as u16),
            Print(tr.get("tui.controls").dimmed())
        )?;
        stdout.flush()?;
        Ok(())
    }
}
