use serde::{Deserialize, Serialize};

/// Which panel owns the keyboard. The active mode selects the keymap used by
/// the app loop; the QR panel additionally consumes raw character input while
/// its mode is active.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Qr,
    Joke,
}
