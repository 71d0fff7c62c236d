//! The shape demo.
//!
//! A single figure is rendered every frame, chosen with the digit keys `1` to `8`.
//! `M` toggles flat and smooth shading for every task, the right arrow cycles the
//! primitive assembly of task 5, and `F` cycles how the faces of task 8 are
//! rasterized. Escape quits.
//!
//! Everything drawn is a hard-coded figure; the only per-frame input is the random
//! source used to color vertices, which is re-sampled each frame.

pub mod figures;
pub mod routines;

mod state;

pub use self::state::{
    Assembly, Cycle, FaceMode, RenderState, Response, Task, ASSEMBLY_KEY, FACE_KEY, QUIT_KEY,
    SHADING_KEY,
};

pub mod prelude {
    pub use super::{Assembly, Cycle, FaceMode, RenderState, Response, Shapes, Task};
}

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::application::{Application, Context};
use crate::errors::*;
use crate::input::events::InputEvent;
use crate::video::VideoSystem;

/// The shape demo application.
pub struct Shapes<R: Rng = ThreadRng> {
    state: RenderState,
    rng: R,
}

impl Shapes<ThreadRng> {
    pub fn new() -> Self {
        Shapes::with_rng(rand::thread_rng())
    }
}

impl Default for Shapes<ThreadRng> {
    fn default() -> Self {
        Shapes::new()
    }
}

impl<R: Rng> Shapes<R> {
    /// Creates the demo coloring vertices from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Shapes {
            state: RenderState::default(),
            rng,
        }
    }

    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }
}

impl<R: Rng> Application for Shapes<R> {
    fn on_event(&mut self, ctx: &mut Context, v: &InputEvent) -> Result<()> {
        if let InputEvent::KeyboardPressed { key } = *v {
            if self.state.on_key_pressed(key) == Response::Quit {
                ctx.shutdown();
            }
        }

        Ok(())
    }

    fn on_render(&mut self, video: &mut VideoSystem) -> Result<()> {
        let buf = routines::frame(&self.state, &mut self.rng);
        video.submit(&buf)
    }
}
