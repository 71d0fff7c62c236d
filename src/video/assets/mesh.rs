use crate::math::prelude::{Color, Vector2, Vector3};

impl_handle!(MeshHandle);

/// Hint abouts how this memory will be used.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshHint {
    /// Full speed GPU access. Optimal for render targets and resourced memory.
    Immutable,
    /// CPU to GPU data flow with frequently update commands.
    Stream,
}

impl Default for MeshHint {
    fn default() -> Self {
        MeshHint::Immutable
    }
}

/// Defines how the input vertex data is used to assemble primitives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshPrimitive {
    /// Separate points.
    Points,
    /// A connected strip of lines, the last vertex is not joined back to the first.
    LineStrip,
    /// A connected strip of lines, closed by joining the last vertex to the first.
    LineLoop,
    /// Separate triangles.
    Triangles,
    /// Each vertex forms a triangle with the previous two.
    TriangleStrip,
    /// Every triangle shares the first vertex.
    TriangleFan,
}

impl MeshPrimitive {
    /// Returns the number of assembled primitives for `vertices` submitted vertices.
    pub fn assemble(self, vertices: usize) -> usize {
        match self {
            MeshPrimitive::Points => vertices,
            MeshPrimitive::LineStrip => vertices.saturating_sub(1),
            MeshPrimitive::LineLoop => if vertices < 2 {
                0
            } else {
                vertices
            },
            MeshPrimitive::Triangles => vertices / 3,
            MeshPrimitive::TriangleStrip | MeshPrimitive::TriangleFan => {
                vertices.saturating_sub(2)
            }
        }
    }
}

/// A colored 2D vertex, consumed by the immediate draw commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vector2<f32>,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub fn new<T: Into<Vector2<f32>>>(position: T, color: Color) -> Self {
        Vertex {
            position: position.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshParams {
    /// Usage hints.
    pub hint: MeshHint,
    /// How the vertices are assembled into primitives.
    pub primitive: MeshPrimitive,
}

impl Default for MeshPrimitive {
    fn default() -> Self {
        MeshPrimitive::Triangles
    }
}

/// Positions of a static mesh, uploaded once and bound to `layout (location = 0)`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vector3<f32>>,
}

impl MeshData {
    /// Returns the number of vertices in this mesh.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assemble() {
        assert_eq!(MeshPrimitive::Points.assemble(8), 8);
        assert_eq!(MeshPrimitive::LineStrip.assemble(7), 6);
        assert_eq!(MeshPrimitive::LineLoop.assemble(9), 9);
        assert_eq!(MeshPrimitive::Triangles.assemble(30), 10);
        assert_eq!(MeshPrimitive::TriangleStrip.assemble(15), 13);
        assert_eq!(MeshPrimitive::TriangleFan.assemble(10), 8);
        assert_eq!(MeshPrimitive::TriangleFan.assemble(1), 0);
    }
}
