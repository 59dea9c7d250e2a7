use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::jokes::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    FocusQr,
    FocusJoke,
    GenerateQr,
    FetchJoke,
    RequestJoke(Category),
    JokeLoaded(String),
    JokeFailed,
    NextCategory,
    PrevCategory,
    Like,
    Dislike,
    ToggleTheme,
    SystemMessage(String),
}
