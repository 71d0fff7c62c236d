use crate::math::prelude::Color;

use super::assets::prelude::*;

/// A single operation submitted to the video backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Clears the color and depth buffers.
    Clear(Color),
    /// Restores every render state to its default (fill, no culling, flat shading,
    /// unit point size and line width).
    ResetRenderState,
    SetShading(Shading),
    SetPolygonMode(PolygonMode),
    SetCullFace(CullFace),
    SetPointSize(f32),
    SetLineWidth(f32),
    /// Draws colored 2D vertices with the built-in program of current shading.
    Draw(MeshPrimitive, Vec<Vertex>),
    /// Draws a static mesh with a user program.
    DrawMesh(ShaderHandle, MeshHandle),
}

/// The command buffer of video system.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandBuffer {
    cmds: Vec<Command>,
}

impl CommandBuffer {
    /// Creates a new and empty `CommandBuffer`.
    #[inline]
    pub fn new() -> Self {
        CommandBuffer {
            cmds: Vec::with_capacity(32),
        }
    }

    /// Clears the whole framebuffer with `color`.
    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.cmds.push(Command::Clear(color));
    }

    #[inline]
    pub fn reset_render_state(&mut self) {
        self.cmds.push(Command::ResetRenderState);
    }

    #[inline]
    pub fn set_shading(&mut self, shading: Shading) {
        self.cmds.push(Command::SetShading(shading));
    }

    #[inline]
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.cmds.push(Command::SetPolygonMode(mode));
    }

    #[inline]
    pub fn set_cull_face(&mut self, face: CullFace) {
        self.cmds.push(Command::SetCullFace(face));
    }

    /// Sets the diameter of rasterized points in pixels.
    #[inline]
    pub fn set_point_size(&mut self, size: f32) {
        self.cmds.push(Command::SetPointSize(size));
    }

    /// Sets the width of rasterized lines in pixels. The backend clamps it into the
    /// range supported by the implementation.
    #[inline]
    pub fn set_line_width(&mut self, width: f32) {
        self.cmds.push(Command::SetLineWidth(width));
    }

    /// Draws `vertices` assembled as `primitive`. Empty submissions are dropped.
    pub fn draw<T>(&mut self, primitive: MeshPrimitive, vertices: T)
    where
        T: IntoIterator<Item = Vertex>,
    {
        let vertices: Vec<_> = vertices.into_iter().collect();
        if !vertices.is_empty() {
            self.cmds.push(Command::Draw(primitive, vertices));
        }
    }

    #[inline]
    pub fn draw_mesh(&mut self, shader: ShaderHandle, mesh: MeshHandle) {
        self.cmds.push(Command::DrawMesh(shader, mesh));
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Iterates over the immediate draw calls in submission order.
    pub fn draws(&self) -> impl Iterator<Item = (MeshPrimitive, &[Vertex])> + '_ {
        self.cmds.iter().filter_map(|v| match *v {
            Command::Draw(primitive, ref vertices) => Some((primitive, vertices.as_slice())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_draws_are_dropped() {
        let mut buf = CommandBuffer::new();
        buf.draw(MeshPrimitive::Points, Vec::new());
        assert!(buf.is_empty());

        buf.draw(
            MeshPrimitive::Points,
            vec![Vertex::new((0.0, 0.0), Color::white())],
        );
        buf.set_point_size(4.0);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.draws().count(), 1);
    }
}
