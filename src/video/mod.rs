//! The video system, which submits draw-calls and manages the GPU objects of the
//! running application.
//!
//! Drawing is expressed as a `CommandBuffer`: a list of render-state changes and
//! draw calls which is executed in order by the backend when submitted. Two kinds of
//! draws are supported:
//!
//! * immediate draws of colored 2D vertices, rendered by the built-in programs with
//! the current shading, polygon mode and culling;
//! * draws of static meshes with user programs, created through `create_shader` and
//! `create_mesh`.
//!
//! The OpenGL backend requires a current 3.3 core profile context. The headless
//! backend records everything it receives, and is what tests run against.

pub mod assets;
pub mod backends;
pub mod command;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::backends::headless::{Frame, Record, Recorder};
    pub use super::command::{Command, CommandBuffer};
    pub use super::{VideoFrameInfo, VideoSystem};
}

use std::collections::{HashMap, HashSet};
use std::mem;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::window::WindowSystem;

use self::assets::prelude::*;
use self::backends::headless::Recorder;
use self::backends::Visitor;
use self::command::{Command, CommandBuffer};

/// The information of video system during last frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct VideoFrameInfo {
    pub drawcalls: u32,
    /// Points, lines or triangles assembled by the draw calls.
    pub primitives: u32,
}

/// The centralized management of video sub-system.
pub struct VideoSystem {
    visitor: Box<dyn Visitor>,
    shaders: HashSet<ShaderHandle>,
    meshes: HashMap<MeshHandle, (MeshPrimitive, usize)>,
    next_shader: u32,
    next_mesh: u32,
    info: VideoFrameInfo,
}

impl VideoSystem {
    /// Creates a new `VideoSystem` on the OpenGL context of `window`.
    pub fn new(window: &WindowSystem) -> Result<Self> {
        window.make_current()?;

        let mut video = VideoSystem::from(backends::new()?);
        video.update_viewport(window.dimensions_in_pixels())?;
        Ok(video)
    }

    /// Creates a new `VideoSystem` without any OpenGL context, along with the `Recorder`
    /// of everything submitted to it.
    pub fn headless() -> (Self, Recorder) {
        let (visitor, recorder) = backends::new_headless();
        (VideoSystem::from(visitor), recorder)
    }

    fn from(visitor: Box<dyn Visitor>) -> Self {
        VideoSystem {
            visitor,
            shaders: HashSet::new(),
            meshes: HashMap::new(),
            next_shader: 0,
            next_mesh: 0,
            info: VideoFrameInfo::default(),
        }
    }

    /// Creates a program from a vertex and a fragment shader source. Compilation or
    /// linking errors are returned with the info log of the driver.
    pub fn create_shader(&mut self, vs: &str, fs: &str) -> Result<ShaderHandle> {
        if vs.is_empty() || fs.is_empty() {
            bail!("Both vertex and fragment shader are required to describe a program.");
        }

        let handle = ShaderHandle::new(self.next_shader);
        unsafe { self.visitor.create_shader(handle, vs, fs)? };

        self.next_shader += 1;
        self.shaders.insert(handle);
        debug!("Created {}.", handle);
        Ok(handle)
    }

    /// Deletes a program and frees the GPU object.
    pub fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        if !self.shaders.remove(&handle) {
            return Err(Error::ShaderHandleInvalid(handle).into());
        }

        unsafe { self.visitor.delete_shader(handle) }
    }

    /// Uploads the positions of a static mesh.
    pub fn create_mesh(&mut self, params: MeshParams, data: &MeshData) -> Result<MeshHandle> {
        if data.is_empty() {
            bail!("Can not create mesh without any vertex.");
        }

        let handle = MeshHandle::new(self.next_mesh);
        unsafe { self.visitor.create_mesh(handle, params, data)? };

        self.next_mesh += 1;
        self.meshes.insert(handle, (params.primitive, data.len()));
        debug!("Created {} with {} vertices.", handle, data.len());
        Ok(handle)
    }

    /// Deletes a mesh and frees the GPU buffers.
    pub fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if self.meshes.remove(&handle).is_none() {
            return Err(Error::MeshHandleInvalid(handle).into());
        }

        unsafe { self.visitor.delete_mesh(handle) }
    }

    #[inline]
    pub fn is_shader_alive(&self, handle: ShaderHandle) -> bool {
        self.shaders.contains(&handle)
    }

    #[inline]
    pub fn is_mesh_alive(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle)
    }

    /// Updates the viewport to cover a framebuffer of `dimensions` pixels.
    pub fn update_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        unsafe { self.visitor.update_viewport(dimensions) }
    }

    /// Executes the commands of `buf` in order.
    pub fn submit(&mut self, buf: &CommandBuffer) -> Result<()> {
        for cmd in buf.commands() {
            match *cmd {
                Command::DrawMesh(shader, mesh) => {
                    if !self.is_shader_alive(shader) {
                        return Err(Error::ShaderHandleInvalid(shader).into());
                    }

                    let (primitive, len) = *self
                        .meshes
                        .get(&mesh)
                        .ok_or_else(|| Error::MeshHandleInvalid(mesh))?;

                    self.count(primitive, len);
                }
                Command::Draw(primitive, ref vertices) => self.count(primitive, vertices.len()),
                _ => {}
            }

            unsafe { self.visitor.execute(cmd)? };
        }

        Ok(())
    }

    fn count(&mut self, primitive: MeshPrimitive, vertices: usize) {
        self.info.drawcalls += 1;
        self.info.primitives += primitive.assemble(vertices) as u32;
    }

    /// Blocks until all submitted commands have been executed by the GPU.
    pub fn flush(&mut self) -> Result<()> {
        unsafe { self.visitor.flush() }
    }

    /// Finishes the current frame, returns the draw calls and primitives it issued.
    pub fn advance(&mut self) -> Result<VideoFrameInfo> {
        unsafe { self.visitor.advance()? };
        Ok(mem::replace(&mut self.info, VideoFrameInfo::default()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::prelude::Vector3;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
        }
    }

    #[test]
    fn handles() {
        let (mut video, _) = VideoSystem::headless();
        let shader = video.create_shader("vs", "fs").unwrap();
        let mesh = video.create_mesh(MeshParams::default(), &triangle()).unwrap();
        assert!(video.is_shader_alive(shader));
        assert!(video.is_mesh_alive(mesh));

        video.delete_mesh(mesh).unwrap();
        video.delete_shader(shader).unwrap();
        assert!(!video.is_shader_alive(shader));
        assert!(!video.is_mesh_alive(mesh));

        assert!(video.delete_mesh(mesh).is_err());
        assert!(video.delete_shader(shader).is_err());
    }

    #[test]
    fn rejects_invalid_resources() {
        let (mut video, _) = VideoSystem::headless();
        assert!(video.create_shader("", "fs").is_err());
        assert!(video
            .create_mesh(MeshParams::default(), &MeshData::default())
            .is_err());

        let shader = video.create_shader("vs", "fs").unwrap();
        let mesh = video.create_mesh(MeshParams::default(), &triangle()).unwrap();
        video.delete_mesh(mesh).unwrap();

        let mut buf = CommandBuffer::new();
        buf.draw_mesh(shader, mesh);
        assert!(video.submit(&buf).is_err());
    }

    #[test]
    fn counts_drawcalls_per_frame() {
        let (mut video, recorder) = VideoSystem::headless();
        let shader = video.create_shader("vs", "fs").unwrap();
        let mesh = video.create_mesh(MeshParams::default(), &triangle()).unwrap();

        let mut buf = CommandBuffer::new();
        buf.clear(crate::math::Color::black());
        buf.draw_mesh(shader, mesh);
        buf.draw_mesh(shader, mesh);
        buf.draw(
            MeshPrimitive::LineStrip,
            vec![
                Vertex::new(Vector2::new(0.0, 0.0), crate::math::Color::white()),
                Vertex::new(Vector2::new(1.0, 0.0), crate::math::Color::white()),
                Vertex::new(Vector2::new(1.0, 1.0), crate::math::Color::white()),
            ],
        );
        video.submit(&buf).unwrap();

        let info = video.advance().unwrap();
        assert_eq!(info.drawcalls, 3);
        assert_eq!(info.primitives, 1 + 1 + 2);
        assert_eq!(video.advance().unwrap(), VideoFrameInfo::default());
        assert_eq!(recorder.commands(0).len(), 4);
        assert!(recorder.commands(1).is_empty());
    }
}
