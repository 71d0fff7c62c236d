//! The backend of renderer, which should be responsible for only one thing:
//! submitting draw-calls using low-level OpenGL video APIs.

pub mod headless;

use super::assets::prelude::*;
use super::command::Command;

use crate::errors::*;
use crate::math::prelude::Vector2;

pub trait Visitor {
    unsafe fn create_shader(&mut self, handle: ShaderHandle, vs: &str, fs: &str) -> Result<()>;

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()>;

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &MeshData,
    ) -> Result<()>;

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    unsafe fn update_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()>;

    /// Executes one command of a submitted `CommandBuffer`.
    unsafe fn execute(&mut self, cmd: &Command) -> Result<()>;

    /// Blocks until all execution is complete. Such effects include all changes to render state, all
    /// changes to connection state, and all changes to the frame buffer contents.
    unsafe fn flush(&mut self) -> Result<()>;

    /// Advance one frame, it will be called every frames.
    unsafe fn advance(&mut self) -> Result<()>;
}

pub mod gl;

pub fn new() -> Result<Box<dyn Visitor>> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::new()? };
    Ok(Box::new(visitor))
}

pub fn new_headless() -> (Box<dyn Visitor>, headless::Recorder) {
    let visitor = self::headless::HeadlessVisitor::new();
    let recorder = visitor.recorder();
    (Box::new(visitor), recorder)
}
