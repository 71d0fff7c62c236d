//! The drawing routine of every task. Routines only append commands to a
//! `CommandBuffer`, and take the random source used for coloring as an argument.

use rand::Rng;

use crate::math::prelude::{Color, Vector2};
use crate::video::prelude::{CommandBuffer, CullFace, MeshPrimitive, PolygonMode, Shading, Vertex};

use super::figures::{self, FIGURE1, FIGURE2, FIGURE2_FANS, FIGURE2_TRIANGLES, FIGURE3};
use super::state::{Assembly, FaceMode, RenderState, Task};

pub const NGON_POINT_SIZE: f32 = 10.0;
pub const NGON_LINE_WIDTH: f32 = 2.0;
pub const MESH_POINT_SIZE: f32 = 5.0;

/// Records a whole frame of `state`: clear, reset of render states, shading, then
/// the routine of the selected task.
pub fn frame<R: Rng + ?Sized>(state: &RenderState, rng: &mut R) -> CommandBuffer {
    let mut buf = CommandBuffer::new();
    buf.clear(Color::black());
    buf.reset_render_state();
    buf.set_shading(state.shading);
    dispatch(state, rng, &mut buf);
    buf
}

/// Appends the commands of the routine selected by `state.task`.
pub fn dispatch<R: Rng + ?Sized>(state: &RenderState, rng: &mut R, buf: &mut CommandBuffer) {
    match state.task {
        Task::NgonPoints => ngon_points(buf),
        Task::NgonOutline => ngon_outline(buf),
        Task::Polyline => polyline(buf),
        Task::Outline => outline(buf),
        Task::Decomposition => decomposition(state.assembly, state.shading, rng, buf),
        Task::NgonFan => ngon_fan(rng, buf),
        Task::Mesh | Task::MeshFaces => mesh(state.face, rng, buf),
    }
}

fn white<I: IntoIterator<Item = Vector2<f32>>>(positions: I) -> Vec<Vertex> {
    positions
        .into_iter()
        .map(|v| Vertex::new(v, Color::white()))
        .collect()
}

pub fn ngon_points(buf: &mut CommandBuffer) {
    buf.set_point_size(NGON_POINT_SIZE);
    buf.draw(MeshPrimitive::Points, white(figures::ngon(figures::NGON_SIDES)));
}

pub fn ngon_outline(buf: &mut CommandBuffer) {
    buf.set_line_width(NGON_LINE_WIDTH);
    buf.draw(MeshPrimitive::LineLoop, white(figures::ngon(figures::NGON_SIDES)));
}

pub fn polyline(buf: &mut CommandBuffer) {
    buf.draw(MeshPrimitive::LineStrip, white(figures::points(&FIGURE1)));
}

pub fn outline(buf: &mut CommandBuffer) {
    buf.draw(MeshPrimitive::LineLoop, white(figures::points(&FIGURE2)));
}

/// Draws the triangle decomposition of figure 2 assembled as `assembly`.
pub fn decomposition<R: Rng + ?Sized>(
    assembly: Assembly,
    shading: Shading,
    rng: &mut R,
    buf: &mut CommandBuffer,
) {
    match assembly {
        Assembly::Triangles => {
            buf.draw(MeshPrimitive::Triangles, per_triangle(&FIGURE2_TRIANGLES, rng));
        }

        Assembly::Strip => {
            let mut color = Color::white();
            let vertices = figures::points(&FIGURE2_TRIANGLES)
                .enumerate()
                .map(|(i, v)| {
                    // With flat shading, pairs of vertices share a color.
                    if shading == Shading::Smooth || i % 2 == 0 {
                        color = Color::random(rng);
                    }

                    Vertex::new(v, color)
                })
                .collect::<Vec<_>>();

            buf.draw(MeshPrimitive::TriangleStrip, vertices);
        }

        Assembly::Fan => {
            for fan in FIGURE2_FANS.iter() {
                buf.draw(MeshPrimitive::TriangleFan, fan_vertices(fan, shading, rng));
            }
        }
    }
}

/// Colors one fan of figure 2. The center keeps a color of its own. With smooth
/// shading every rim vertex gets a new color; with flat shading only the provoking
/// (last) vertex of each triangle does, and the first rim vertex shares the color of
/// the first triangle.
fn fan_vertices<R: Rng + ?Sized>(fan: &[[f32; 2]], shading: Shading, rng: &mut R) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(fan.len());
    let mut rim = figures::points(fan);

    if let Some(center) = rim.next() {
        vertices.push(Vertex::new(center, Color::random(rng)));
    }

    let mut color = Color::white();
    for (i, v) in rim.enumerate() {
        if shading == Shading::Smooth || i != 1 {
            color = Color::random(rng);
        }

        vertices.push(Vertex::new(v, color));
    }

    vertices
}

/// Draws the n-gon as a fan around a white center at the origin.
pub fn ngon_fan<R: Rng + ?Sized>(rng: &mut R, buf: &mut CommandBuffer) {
    let rim = figures::ngon(figures::NGON_SIDES);

    let mut vertices = Vec::with_capacity(rim.len() + 2);
    vertices.push(Vertex::new(Vector2::new(0.0, 0.0), Color::white()));
    for v in rim.iter().chain(rim.first()) {
        vertices.push(Vertex::new(*v, Color::random(rng)));
    }

    buf.draw(MeshPrimitive::TriangleFan, vertices);
}

/// Draws the mesh of figure 3 with the faces rasterized as `face`.
pub fn mesh<R: Rng + ?Sized>(face: FaceMode, rng: &mut R, buf: &mut CommandBuffer) {
    let vertices = per_triangle(&FIGURE3, rng);

    match face {
        FaceMode::Normal => {
            buf.set_cull_face(CullFace::Nothing);
            buf.set_polygon_mode(PolygonMode::Fill);
        }

        FaceMode::VerticesFront => {
            buf.set_cull_face(CullFace::Back);
            buf.set_polygon_mode(PolygonMode::Point);
            buf.set_point_size(MESH_POINT_SIZE);
        }

        FaceMode::FilledFrontWireBack => {
            buf.set_cull_face(CullFace::Front);
            buf.set_polygon_mode(PolygonMode::Line);
            buf.draw(
                MeshPrimitive::Triangles,
                vertices.iter().map(|v| Vertex::new(v.position, Color::gray())),
            );

            buf.set_cull_face(CullFace::Back);
            buf.set_polygon_mode(PolygonMode::Fill);
        }

        FaceMode::Wireframe => {
            buf.set_cull_face(CullFace::Nothing);
            buf.set_polygon_mode(PolygonMode::Line);
        }
    }

    buf.draw(MeshPrimitive::Triangles, vertices);
}

/// Colors every consecutive triple of `figure` with one random color.
fn per_triangle<R: Rng + ?Sized>(figure: &[[f32; 2]], rng: &mut R) -> Vec<Vertex> {
    figure
        .chunks(3)
        .flat_map(|tri| {
            let color = Color::random(rng);
            figures::points(tri).map(move |v| Vertex::new(v, color))
        })
        .collect()
}
