use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::action::Action;
use crate::components::Component;
use crate::mode::Mode;
use crate::tui::Frame;

pub struct StatusBar {
    mode: Mode,
    message: Option<String>,
    is_loading: bool,
}

impl StatusBar {
    pub fn new(mode: Mode, message: Option<String>, is_loading: bool) -> Self {
        Self {
            mode,
            message,
            is_loading,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::Qr => "QR",
            Mode::Joke => "JOKES",
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusQr => self.mode = Mode::Qr,
            Action::FocusJoke => self.mode = Mode::Joke,
            Action::RequestJoke(_) => self.is_loading = true,
            Action::JokeLoaded(_) | Action::JokeFailed => self.is_loading = false,
            Action::SystemMessage(message) => self.message = Some(message),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let mode = Span::styled(self.mode_label(), Style::default().fg(Color::Gray).italic());
        let status_line = Paragraph::new(mode).style(Style::default().bg(Color::Black));
        f.render_widget(status_line, layout[1]);

        let message_line = if self.is_loading {
            Paragraph::new("Loading...")
        } else {
            Paragraph::new(self.message.clone().unwrap_or_default())
        };
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}
