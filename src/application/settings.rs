//! Functions for loading application settings.

pub use crate::window::WindowParams;

/// A structure containing configuration data for the engine, which are
/// used to specify hardware setup stuff to create the window and other
/// context information.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
}

#[derive(Debug, Clone, Copy)]
pub struct EngineParams {
    /// The maximum frames per second. The main loop sleeps away the rest of each
    /// frame budget, a value of 0 disables the pacing.
    pub max_fps: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams { max_fps: 60 }
    }
}
