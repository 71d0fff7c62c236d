use gl::types::*;

use super::super::super::assets::prelude::*;

impl From<MeshHint> for GLenum {
    fn from(hint: MeshHint) -> Self {
        match hint {
            MeshHint::Immutable => gl::STATIC_DRAW,
            MeshHint::Stream => gl::STREAM_DRAW,
        }
    }
}

impl From<MeshPrimitive> for GLenum {
    fn from(primitive: MeshPrimitive) -> Self {
        match primitive {
            MeshPrimitive::Points => gl::POINTS,
            MeshPrimitive::LineStrip => gl::LINE_STRIP,
            MeshPrimitive::LineLoop => gl::LINE_LOOP,
            MeshPrimitive::Triangles => gl::TRIANGLES,
            MeshPrimitive::TriangleStrip => gl::TRIANGLE_STRIP,
            MeshPrimitive::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

impl From<PolygonMode> for GLenum {
    fn from(mode: PolygonMode) -> Self {
        match mode {
            PolygonMode::Point => gl::POINT,
            PolygonMode::Line => gl::LINE,
            PolygonMode::Fill => gl::FILL,
        }
    }
}
