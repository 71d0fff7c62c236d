//! Keyboard input.
//!
//! The window backends translate the platform key events into `InputEvent`s carrying
//! a `Key`. Notes that the key code used here is the virtual keycode of the physical
//! key, which does not necessarily match what's printed on the key cap.
//!
//! Applications receive the events in the order the platform delivered them, once per
//! frame, right after the frame has been presented.

pub mod events;
pub mod keyboard;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
}
