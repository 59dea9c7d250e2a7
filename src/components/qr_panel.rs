use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{action::Action, config::Config, mode::Mode, qr, tui::Frame};

/// Surfaced when a generate action fires with an empty input. No request URL
/// is produced in that case.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

/// Left-hand panel: free-text input turned into a QR request URL.
///
/// The URL is recomputed wholesale on every generate action; the unicode
/// preview is the terminal's rendering surface for it. A failed generate
/// leaves the previously generated code on screen.
#[derive(Default)]
pub struct QrPanel {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    input: String,
    qr_url: Option<String>,
    qr_preview: Option<String>,
    error: Option<String>,
    focused: bool,
}

impl QrPanel {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn qr_url(&self) -> Option<&str> {
        self.qr_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn endpoint(&self) -> &str {
        if self.config.qr_api_url.is_empty() {
            qr::DEFAULT_ENDPOINT
        } else {
            &self.config.qr_api_url
        }
    }

    fn generate(&mut self) -> Option<Action> {
        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return Some(Action::SystemMessage(format!("[QR] {EMPTY_INPUT_MESSAGE}")));
        }

        let url = qr::request_url(self.endpoint(), &self.input);
        self.qr_preview = match qr::unicode_preview(&self.input) {
            Ok(preview) => Some(preview),
            Err(e) => {
                log::warn!("Could not render QR preview: {e:?}");
                None
            }
        };
        self.error = None;
        let message = Action::SystemMessage(format!("[QR generated] {url}"));
        self.qr_url = Some(url);
        Some(message)
    }

    fn border_style(&self) -> Style {
        if self.focused {
            self.config
                .styles
                .get(&Mode::Qr)
                .and_then(|styles| styles.get("border_focused"))
                .copied()
                .unwrap_or_else(|| Style::default().fg(Color::Cyan))
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for QrPanel {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.focused {
            return Ok(None);
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                self.error = None;
                Ok(None)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(Action::GenerateQr)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::GenerateQr => return Ok(self.generate()),
            Action::FocusQr => self.focused = true,
            Action::FocusJoke => self.focused = false,
            _ => {}
        }

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let outer = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(2)],
        )
        .split(area);
        let panes = Layout::new(
            Direction::Horizontal,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .split(outer[0]);

        let block = Block::bordered()
            .title("QR Generator")
            .border_style(self.border_style());
        let inner = block.inner(panes[0]);
        f.render_widget(block, panes[0]);

        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ],
        )
        .split(inner);

        let cursor = if self.focused { "▏" } else { "" };
        let input = Paragraph::new(format!("{}{cursor}", self.input))
            .block(Block::bordered().title("Input (Enter generates)"));
        f.render_widget(input, chunks[0]);

        if let Some(error) = &self.error {
            let line = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
            f.render_widget(line, chunks[1]);
        }

        if let Some(url) = &self.qr_url {
            let url_line = Paragraph::new(url.as_str())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false });
            f.render_widget(url_line, chunks[2]);
        }

        if let Some(preview) = &self.qr_preview {
            let qr = Paragraph::new(preview.as_str()).alignment(Alignment::Center);
            f.render_widget(qr, chunks[3]);
        }

        Ok(())
    }
}
