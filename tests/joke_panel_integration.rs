use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

use jestui::{
    action::Action,
    components::{
        joke_panel::{Theme, LOADING_MESSAGE, PROMPT_MESSAGE},
        Component, JokePanel,
    },
    jokes::{Category, FETCH_FAILED_MESSAGE},
};

#[test]
fn test_fetch_dispatches_request_for_current_category() {
    let mut panel = JokePanel::new();
    assert_eq!(panel.category(), Category::Programming);

    let followup = panel.update(Action::FetchJoke).unwrap();

    assert_eq!(followup, Some(Action::RequestJoke(Category::Programming)));
    assert!(panel.is_loading());
    assert_eq!(panel.displayed_joke(), LOADING_MESSAGE);
}

/// A fetch action while a request is in flight is ignored.
#[test]
fn test_fetch_while_loading_is_ignored() {
    let mut panel = JokePanel::new();
    panel.update(Action::FetchJoke).unwrap();

    let followup = panel.update(Action::FetchJoke).unwrap();

    assert_eq!(followup, None);
    assert!(panel.is_loading());
}

#[test]
fn test_successful_fetch_replaces_displayed_text_exactly() {
    let joke = "Why do programmers prefer dark mode? Because light attracts bugs.";
    let mut panel = JokePanel::new();
    panel.update(Action::FetchJoke).unwrap();

    panel.update(Action::JokeLoaded(joke.to_string())).unwrap();

    assert_eq!(panel.displayed_joke(), joke);
    assert!(!panel.is_loading());
}

#[test]
fn test_failed_fetch_shows_fixed_fallback() {
    let mut panel = JokePanel::new();
    panel.update(Action::FetchJoke).unwrap();

    panel.update(Action::JokeFailed).unwrap();

    assert_eq!(panel.displayed_joke(), FETCH_FAILED_MESSAGE);
    assert!(!panel.is_loading());

    // A later fetch can still succeed and replaces the fallback wholesale.
    panel.update(Action::FetchJoke).unwrap();
    panel
        .update(Action::JokeLoaded("A fresh joke".to_string()))
        .unwrap();
    assert_eq!(panel.displayed_joke(), "A fresh joke");
}

/// Counters are independent of the fetch lifecycle.
#[test]
fn test_reaction_counters() {
    let mut panel = JokePanel::new();
    panel.update(Action::FetchJoke).unwrap();

    panel.update(Action::Like).unwrap();
    panel.update(Action::Like).unwrap();
    panel.update(Action::Dislike).unwrap();

    assert_eq!(panel.likes(), 2);
    assert_eq!(panel.dislikes(), 1);
    assert!(panel.is_loading());
}

#[test]
fn test_theme_double_toggle_is_identity() {
    let mut panel = JokePanel::new();
    let original = panel.theme();
    assert_eq!(original, Theme::Dark);

    panel.update(Action::ToggleTheme).unwrap();
    assert_eq!(panel.theme(), Theme::Light);

    panel.update(Action::ToggleTheme).unwrap();
    assert_eq!(panel.theme(), original);
}

#[test]
fn test_category_cycling_wraps() {
    let mut panel = JokePanel::new();
    assert_eq!(panel.category(), Category::Programming);

    panel.update(Action::PrevCategory).unwrap();
    assert_eq!(panel.category(), Category::Any);

    panel.update(Action::PrevCategory).unwrap();
    assert_eq!(panel.category(), Category::Christmas);

    panel.update(Action::NextCategory).unwrap();
    assert_eq!(panel.category(), Category::Any);
}

#[test]
fn test_initial_state_shows_prompt() {
    let panel = JokePanel::new();
    assert_eq!(panel.displayed_joke(), PROMPT_MESSAGE);
    assert_eq!(panel.likes(), 0);
    assert_eq!(panel.dislikes(), 0);
    assert!(!panel.is_focused());
}

#[test]
fn test_draw_renders_categories_and_counters() {
    let mut panel = JokePanel::new();
    panel.update(Action::Like).unwrap();

    let backend = TestBackend::new(120, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            panel.draw(f, area).unwrap();
        })
        .unwrap();

    let mut rendered = String::new();
    let buffer = terminal.backend().buffer().clone();
    for cell in buffer.content() {
        rendered.push_str(cell.symbol());
    }

    assert!(rendered.contains("Programming"));
    assert!(rendered.contains("Like [l]: 1"));
    assert!(rendered.contains(PROMPT_MESSAGE));
}
