use pretty_assertions::assert_eq;

use jestui::{
    action::Action,
    components::{Component, StatusBar},
    jokes::Category,
    mode::Mode,
};

#[test]
fn test_mode_label_follows_focus() {
    let mut status_bar = StatusBar::new(Mode::Qr, None, false);
    assert_eq!(status_bar.mode_label(), "QR");

    status_bar.update(Action::FocusJoke).unwrap();
    assert_eq!(status_bar.mode_label(), "JOKES");

    status_bar.update(Action::FocusQr).unwrap();
    assert_eq!(status_bar.mode_label(), "QR");
}

#[test]
fn test_system_message_flow() {
    let mut status_bar = StatusBar::new(Mode::Qr, None, false);
    assert_eq!(status_bar.message(), None);

    status_bar
        .update(Action::SystemMessage("[QR generated] ...".to_string()))
        .unwrap();

    assert_eq!(status_bar.message(), Some("[QR generated] ..."));
}

#[test]
fn test_loading_follows_fetch_lifecycle() {
    let mut status_bar = StatusBar::new(Mode::Joke, None, false);

    status_bar
        .update(Action::RequestJoke(Category::Programming))
        .unwrap();
    assert!(status_bar.is_loading());

    status_bar
        .update(Action::JokeLoaded("a joke".to_string()))
        .unwrap();
    assert!(!status_bar.is_loading());

    status_bar
        .update(Action::RequestJoke(Category::Pun))
        .unwrap();
    assert!(status_bar.is_loading());

    status_bar.update(Action::JokeFailed).unwrap();
    assert!(!status_bar.is_loading());
}
