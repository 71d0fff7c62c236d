//! The three-triangle shader demo.
//!
//! Three triangles are uploaded once as static meshes. They share one passthrough
//! vertex shader, and each is drawn with its own single-color fragment shader.

use crate::application::{Application, Context};
use crate::errors::*;
use crate::input::events::InputEvent;
use crate::input::keyboard::Key;
use crate::math::prelude::{Color, Vector3};
use crate::video::prelude::*;

pub const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 position;
void main() {
    gl_Position = vec4(position, 1.0);
}
";

pub const RED_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
";

pub const GREEN_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(0.0, 1.0, 0.0, 1.0);
}
";

pub const BLUE_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(0.0, 0.0, 1.0, 1.0);
}
";

/// Positions of the left, middle and right triangles, in normalized device coordinates.
pub const TRIANGLES: [[[f32; 3]; 3]; 3] = [
    [[-0.8, -0.5, 0.0], [-0.4, -0.5, 0.0], [-0.6, 0.5, 0.0]],
    [[-0.2, -0.5, 0.0], [0.2, -0.5, 0.0], [0.0, 0.5, 0.0]],
    [[0.4, -0.5, 0.0], [0.8, -0.5, 0.0], [0.6, 0.5, 0.0]],
];

/// The fragment shader of each triangle, in the same order as `TRIANGLES`.
pub const FRAGMENT_SHADERS: [&str; 3] = [
    RED_FRAGMENT_SHADER,
    GREEN_FRAGMENT_SHADER,
    BLUE_FRAGMENT_SHADER,
];

/// The three-triangle demo application. Owns one program and one mesh per triangle.
pub struct Triangles {
    batches: Vec<(ShaderHandle, MeshHandle)>,
}

impl Triangles {
    /// Compiles the programs and uploads the triangles. Fails with the info log of the
    /// driver if any shader does not compile or link.
    pub fn new(video: &mut VideoSystem) -> Result<Self> {
        let mut batches = Vec::with_capacity(TRIANGLES.len());

        for (positions, fs) in TRIANGLES.iter().zip(FRAGMENT_SHADERS.iter()) {
            let shader = video.create_shader(VERTEX_SHADER, fs)?;

            let data = MeshData {
                positions: positions.iter().map(|&v| Vector3::from(v)).collect(),
            };

            let params = MeshParams {
                hint: MeshHint::Immutable,
                primitive: MeshPrimitive::Triangles,
            };

            let mesh = video.create_mesh(params, &data)?;
            batches.push((shader, mesh));
        }

        Ok(Triangles { batches })
    }

    /// Returns the program and mesh of every triangle, in drawing order.
    #[inline]
    pub fn batches(&self) -> &[(ShaderHandle, MeshHandle)] {
        &self.batches
    }
}

impl Application for Triangles {
    fn on_event(&mut self, ctx: &mut Context, v: &InputEvent) -> Result<()> {
        if let InputEvent::KeyboardPressed { key: Key::Escape } = *v {
            ctx.shutdown();
        }

        Ok(())
    }

    fn on_render(&mut self, video: &mut VideoSystem) -> Result<()> {
        let mut buf = CommandBuffer::new();
        buf.clear(Color::black());
        for &(shader, mesh) in &self.batches {
            buf.draw_mesh(shader, mesh);
        }

        video.submit(&buf)
    }

    fn on_exit(&mut self, video: &mut VideoSystem) -> Result<()> {
        for (_, mesh) in &self.batches {
            video.delete_mesh(*mesh)?;
        }

        for (shader, _) in self.batches.drain(..) {
            video.delete_shader(shader)?;
        }

        Ok(())
    }
}
