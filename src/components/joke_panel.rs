use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    jokes::{Category, FETCH_FAILED_MESSAGE},
    mode::Mode,
    tui::Frame,
};

/// Shown before the first fetch.
pub const PROMPT_MESSAGE: &str = "Press f to fetch a joke.";

/// Shown while a request is in flight.
pub const LOADING_MESSAGE: &str = "Fetching a joke...";

/// Presentation-only flag; toggling twice restores the original state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Right-hand panel: category-filtered joke fetching with reaction counters.
///
/// The joke text is replaced wholesale on every completed fetch; a failure of
/// any kind replaces it with [`FETCH_FAILED_MESSAGE`]. A fetch action while a
/// request is in flight is ignored. Counters and the theme flag are
/// independent of the fetch lifecycle.
#[derive(Default)]
pub struct JokePanel {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    category: Category,
    joke: Option<String>,
    is_loading: bool,
    likes: u64,
    dislikes: u64,
    theme: Theme,
    focused: bool,
}

impl JokePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn displayed_joke(&self) -> &str {
        if self.is_loading {
            LOADING_MESSAGE
        } else {
            self.joke.as_deref().unwrap_or(PROMPT_MESSAGE)
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn palette(&self) -> (Color, Color) {
        match self.theme {
            Theme::Dark => (Color::White, Color::Black),
            Theme::Light => (Color::Black, Color::White),
        }
    }

    fn border_style(&self) -> Style {
        if self.focused {
            self.config
                .styles
                .get(&Mode::Joke)
                .and_then(|styles| styles.get("border_focused"))
                .copied()
                .unwrap_or_else(|| Style::default().fg(Color::Cyan))
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for JokePanel {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FetchJoke => {
                if self.is_loading {
                    log::debug!("Fetch already in flight, ignoring");
                    return Ok(None);
                }
                self.is_loading = true;
                return Ok(Some(Action::RequestJoke(self.category)));
            }
            Action::JokeLoaded(joke) => {
                self.joke = Some(joke);
                self.is_loading = false;
            }
            Action::JokeFailed => {
                self.joke = Some(FETCH_FAILED_MESSAGE.to_string());
                self.is_loading = false;
            }
            Action::NextCategory => self.category = self.category.next(),
            Action::PrevCategory => self.category = self.category.prev(),
            Action::Like => self.likes += 1,
            Action::Dislike => self.dislikes += 1,
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::FocusJoke => self.focused = true,
            Action::FocusQr => self.focused = false,
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

        let (fg, bg) = self.palette();
        let block = Block::bordered()
            .title("Jokes")
            .border_style(self.border_style())
            .style(Style::default().fg(fg).bg(bg));
        let inner = block.inner(panes[1]);
        f.render_widget(block, panes[1]);

        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(inner);

        let selected = Category::iter()
            .position(|c| c == self.category)
            .unwrap_or(0);
        let tabs = Tabs::new(Category::iter().map(|c| c.to_string()))
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).reversed());
        f.render_widget(tabs, chunks[0]);

        let joke = Paragraph::new(self.displayed_joke())
            .wrap(Wrap { trim: false })
            .block(Block::new().padding(Padding::new(1, 1, 1, 0)));
        f.render_widget(joke, chunks[1]);

        let reactions = Paragraph::new(format!(
            "Like [l]: {}   Dislike [d]: {}",
            self.likes, self.dislikes
        ));
        f.render_widget(reactions, chunks[2]);

        let hints = Paragraph::new("f fetch | Left/Right category | t theme | Tab switch | q quit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, chunks[3]);

        Ok(())
    }
}
