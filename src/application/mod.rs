//! A unified application model.
//!
//! ## Application
//!
//! To hide trivial platform-specific details, we offers a convenient trait `Application`
//! which defines a simple application-state-model. While the application is running,
//! the associated per-frame methods are called in a pre-determined order.
//!
//! # Engine
//!
//! `Engine` is where we actully running the main loop and fire `Application` instance. It
//! also binds the window and video systems in a central place. Each frame performs, in
//! strict sequence: render, present, poll input, then sleeps the rest of the frame budget
//! if a maximum fps has been set.

pub mod settings;
pub mod time;

mod engine;

pub use self::engine::{Context, Engine, FrameInfo};
pub use self::settings::{EngineParams, Settings};
pub use self::time::TimeSystem;

pub mod prelude {
    pub use super::{Application, Context, Engine, EngineParams, FrameInfo, Settings};
}

use crate::errors::*;
use crate::input::events::InputEvent;
use crate::video::VideoSystem;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_event` is called for every input event received since the last
    /// frame, after that frame has been presented.
    fn on_event(&mut self, _: &mut Context, _: &InputEvent) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called every frame. Its the main workhorse
    /// function for submitting draw calls.
    fn on_render(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called when the main loop terminates, before the video
    /// and window systems are destroyed. GPU objects owned by the application should be
    /// released here.
    fn on_exit(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }
}
