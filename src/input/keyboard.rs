/// Symbolic name for a keyboard key.
///
/// The key codes are virtual keycodes of physical keys, they don't necessarily
/// represent what's actually printed on the key cap.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    /// The '1' key over the letters.
    Key1,
    /// The '2' key over the letters.
    Key2,
    /// The '3' key over the letters.
    Key3,
    /// The '4' key over the letters.
    Key4,
    /// The '5' key over the letters.
    Key5,
    /// The '6' key over the letters.
    Key6,
    /// The '7' key over the letters.
    Key7,
    /// The '8' key over the letters.
    Key8,
    /// The '9' key over the letters.
    Key9,
    /// The '0' key over the 'O' and 'P' keys.
    Key0,

    F,
    M,

    /// The Escape key, next to F1.
    Escape,

    Right,

    /// The space bar.
    Space,
}

impl Key {
    /// Returns the digit printed on one of the number keys over the letters.
    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Key0 => Some(0),
            Key::Key1 => Some(1),
            Key::Key2 => Some(2),
            Key::Key3 => Some(3),
            Key::Key4 => Some(4),
            Key::Key5 => Some(5),
            Key::Key6 => Some(6),
            Key::Key7 => Some(7),
            Key::Key8 => Some(8),
            Key::Key9 => Some(9),
            _ => None,
        }
    }
}
