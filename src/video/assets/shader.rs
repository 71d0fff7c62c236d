//! Render states applied to the programs and primitives that follow them.

impl_handle!(ShaderHandle);

/// Whether the color of a primitive is interpolated between its vertices.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Shading {
    /// One color per primitive, taken from its last (provoking) vertex.
    Flat,
    /// Colors are interpolated between the vertices.
    Smooth,
}

impl Default for Shading {
    fn default() -> Self {
        Shading::Flat
    }
}

/// Specify how polygons will be rasterized.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PolygonMode {
    /// Polygon vertices that are marked as the start of a boundary edge are drawn as points.
    Point,
    /// Boundary edges of the polygon are drawn as line segments.
    Line,
    /// The interior of the polygon is filled.
    Fill,
}

impl Default for PolygonMode {
    fn default() -> Self {
        PolygonMode::Fill
    }
}

/// Specify whether front- or back-facing polygons can be culled. Counter-clockwise
/// winding is front facing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CullFace {
    Nothing,
    Front,
    Back,
}

impl Default for CullFace {
    fn default() -> Self {
        CullFace::Nothing
    }
}
