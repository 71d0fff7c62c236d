use std::time::Duration;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video::prelude::{Recorder, VideoFrameInfo};
use crate::video::VideoSystem;
use crate::window::events::{Event, WindowEvent};
use crate::window::WindowSystem;

use super::settings::Settings;
use super::time::TimeSystem;
use super::Application;

/// The shared state applications may use to control the main loop.
#[derive(Debug, Default, Copy, Clone)]
pub struct Context {
    shutdown: bool,
}

impl Context {
    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

/// Statistics of the last finished frame.
#[derive(Debug, Default, Copy, Clone)]
pub struct FrameInfo {
    pub video: VideoFrameInfo,
    pub duration: Duration,
    pub fps: u32,
}

/// `Engine` is the root object of the application. It binds various sub-systems in
/// a central place and takes take of trivial tasks like the execution order or life-time
/// management.
pub struct Engine {
    // The video system must be dropped before the window which owns its context.
    pub video: VideoSystem,
    pub window: WindowSystem,
    pub time: TimeSystem,
    context: Context,
    frames: u64,
}

impl Engine {
    /// Setup engine with specified settings.
    pub fn new_with(settings: &Settings) -> Result<Self> {
        let window = WindowSystem::from(settings.window.clone())?;
        let video = VideoSystem::new(&window)?;
        let time = TimeSystem::new(settings.engine);

        Ok(Engine {
            video,
            window,
            time,
            context: Context::default(),
            frames: 0,
        })
    }

    /// Setup engine without any window or OpenGL context. The window replays one frame
    /// of `script` per iteration of the main loop and closes once it runs out of events,
    /// while everything submitted to the video system is recorded.
    pub fn headless(settings: &Settings, script: Vec<Vec<Event>>) -> (Self, Recorder) {
        let (video, recorder) = VideoSystem::headless();
        let engine = Engine {
            video,
            window: WindowSystem::headless(script),
            time: TimeSystem::new(settings.engine),
            context: Context::default(),
            frames: 0,
        };

        (engine, recorder)
    }

    /// Run the main loop of `Engine`, this will block the working thread until the
    /// window is closed or the application requests a shutdown. The application is
    /// handed back after its `on_exit` has released its resources.
    pub fn run<T>(mut self, mut application: T) -> Result<T>
    where
        T: Application,
    {
        info!("Engine is running.");

        loop {
            self.time.begin();

            application.on_render(&mut self.video)?;
            let video = self.video.advance()?;
            self.window.swap_buffers()?;
            self.frames += 1;

            let events: Vec<Event> = self.window.advance().cloned().collect();
            for v in &events {
                match *v {
                    Event::Window(WindowEvent::Closed) => self.context.shutdown(),
                    Event::Window(WindowEvent::Resized(width, height)) => {
                        self.resize(Vector2::new(width, height))?
                    }
                    Event::Window(_) => {}
                    Event::InputDevice(ref value) => {
                        application.on_event(&mut self.context, value)?
                    }
                }
            }

            if self.context.is_shutdown() {
                break;
            }

            self.time.advance();

            let info = FrameInfo {
                video,
                duration: self.time.frame_duration(),
                fps: self.time.fps(),
            };

            trace!("Frame {}: {:?}", self.frames, info);
        }

        info!("Engine is shutting down after {} frames.", self.frames);
        application.on_exit(&mut self.video)?;
        self.video.flush()?;
        Ok(application)
    }

    fn resize(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        let dpr = self.window.device_pixel_ratio();
        let pixels = Vector2::new(
            (dimensions.x as f32 * dpr) as u32,
            (dimensions.y as f32 * dpr) as u32,
        );

        debug!("Resizing framebuffer to {:?}.", pixels);
        self.window.resize(pixels);
        self.video.update_viewport(pixels)
    }
}
