#[macro_use]
mod handle;

pub mod mesh;
pub mod shader;

pub use self::mesh::{MeshData, MeshHandle, MeshHint, MeshParams, MeshPrimitive, Vertex};
pub use self::shader::{CullFace, PolygonMode, Shading, ShaderHandle};

pub mod prelude {
    pub use super::mesh::{MeshData, MeshHandle, MeshHint, MeshParams, MeshPrimitive, Vertex};
    pub use super::shader::{CullFace, PolygonMode, Shading, ShaderHandle};
}
