
use super::super::super::events::{Event, WindowEvent};

use crate::input::events::InputEvent;
use crate::input::keyboard::Key;

pub fn from_event(source: glutin::Event) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event),
        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => if v {
            Some(Event::Window(WindowEvent::GainFocus))
        } else {
            Some(Event::Window(WindowEvent::LostFocus))
        },

        glutin::WindowEvent::Resized(glutin::dpi::LogicalSize { width, height }) => Some(
            Event::Window(WindowEvent::Resized(width as u32, height as u32)),
        ),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardPressed { key })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Released,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardReleased { key })),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::Key1 => Some(Key::Key1),
        glutin::VirtualKeyCode::Key2 => Some(Key::Key2),
        glutin::VirtualKeyCode::Key3 => Some(Key::Key3),
        glutin::VirtualKeyCode::Key4 => Some(Key::Key4),
        glutin::VirtualKeyCode::Key5 => Some(Key::Key5),
        glutin::VirtualKeyCode::Key6 => Some(Key::Key6),
        glutin::VirtualKeyCode::Key7 => Some(Key::Key7),
        glutin::VirtualKeyCode::Key8 => Some(Key::Key8),
        glutin::VirtualKeyCode::Key9 => Some(Key::Key9),
        glutin::VirtualKeyCode::Key0 => Some(Key::Key0),
        glutin::VirtualKeyCode::F => Some(Key::F),
        glutin::VirtualKeyCode::M => Some(Key::M),
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        glutin::VirtualKeyCode::Right => Some(Key::Right),
        glutin::VirtualKeyCode::Space => Some(Key::Space),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn maps_bound_keys_only() {
        assert_eq!(
            from_virtual_key_code(glutin::VirtualKeyCode::Key5),
            Some(Key::Key5)
        );
        assert_eq!(from_virtual_key_code(glutin::VirtualKeyCode::M), Some(Key::M));
        assert_eq!(
            from_virtual_key_code(glutin::VirtualKeyCode::Right),
            Some(Key::Right)
        );
        assert_eq!(from_virtual_key_code(glutin::VirtualKeyCode::A), None);
        assert_eq!(from_virtual_key_code(glutin::VirtualKeyCode::Left), None);
    }
}
