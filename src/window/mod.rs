//! Represents an OpenGL context and the window or environment around it.

pub mod events;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::{WindowParams, WindowSystem};
}

mod backends;

use crate::errors::*;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::Event;

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Window".to_owned(),
            size: Vector2::new(800, 600),
            multisample: 4,
            vsync: false,
        }
    }
}

/// Represents an OpenGL context and the window or environment around it.
pub struct WindowSystem {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
}

impl WindowSystem {
    /// Creates a new `WindowSystem` and initalize OpenGL context.
    pub fn from(params: WindowParams) -> Result<Self> {
        info!("Creating window {:?}.", params);

        Ok(WindowSystem {
            visitor: backends::new(params)?,
            events: Vec::new(),
        })
    }

    /// Creates a new `WindowSystem` without any OpenGL context. Each call to `advance`
    /// yields the next frame of the `script`; once the script is exhausted the window
    /// reports itself as closed.
    pub fn headless(script: Vec<Vec<Event>>) -> Self {
        WindowSystem {
            visitor: backends::new_headless(script),
            events: Vec::new(),
        }
    }

    /// Polls events from window, and returns the iterator over them.
    pub fn advance(&mut self) -> std::slice::Iter<Event> {
        self.events.clear();
        self.visitor.poll_events(&mut self.events);
        self.events.iter()
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed. However drivers can choose to override your vsync settings, which means that
    /// you can't know in advance whether swap_buffers will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Returns the size in *pixels* of the framebuffer backing the client area.
    #[inline]
    pub fn dimensions_in_pixels(&self) -> Vector2<u32> {
        let size = self.visitor.dimensions();
        let dpr = self.visitor.device_pixel_ratio();
        Vector2::new((size.x as f32 * dpr) as u32, (size.y as f32 * dpr) as u32)
    }

    /// Resize the GL context.
    #[inline]
    pub fn resize(&self, dimensions: Vector2<u32>) {
        self.visitor.resize(dimensions);
    }
}
