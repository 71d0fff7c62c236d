extern crate glshapes;
extern crate rand;

use std::f32::consts::PI;

use glshapes::prelude::*;
use glshapes::shapes::figures;
use glshapes::shapes::routines;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::from_seed([7; 32])
}

fn state(task: u32) -> RenderState {
    let mut state = RenderState::default();
    assert!(state.select(task));
    state
}

fn draws(buf: &CommandBuffer) -> Vec<(MeshPrimitive, Vec<Vertex>)> {
    buf.draws().map(|(p, v)| (p, v.to_vec())).collect()
}

#[test]
fn ngon() {
    let points = figures::ngon(figures::NGON_SIDES);
    assert_eq!(points.len(), 8);

    for (i, v) in points.iter().enumerate() {
        assert!((v.magnitude() - 1.0).abs() < 1e-5);

        let next = points[(i + 1) % points.len()];
        let angle = v.angle(next);
        assert!((angle.0 - 2.0 * PI / 8.0).abs() < 1e-5);
    }

    assert!((points[0].x - 1.0).abs() < 1e-6);
    assert!(points[0].y.abs() < 1e-6);
}

#[test]
fn frame_prologue() {
    let mut rng = rng();
    let mut s = state(2);
    s.shading = Shading::Smooth;

    let buf = routines::frame(&s, &mut rng);
    let cmds = buf.commands();
    assert_eq!(cmds[0], Command::Clear(Color::black()));
    assert_eq!(cmds[1], Command::ResetRenderState);
    assert_eq!(cmds[2], Command::SetShading(Shading::Smooth));
}

#[test]
fn outlines() {
    let mut rng = rng();

    let buf = routines::frame(&state(1), &mut rng);
    assert!(buf.commands().contains(&Command::SetPointSize(10.0)));
    let d = draws(&buf);
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].0, MeshPrimitive::Points);
    assert_eq!(d[0].1.len(), 8);

    let buf = routines::frame(&state(2), &mut rng);
    assert!(buf.commands().contains(&Command::SetLineWidth(2.0)));
    let d = draws(&buf);
    assert_eq!(d[0].0, MeshPrimitive::LineLoop);
    assert_eq!(d[0].1.len(), 8);

    let d = draws(&routines::frame(&state(3), &mut rng));
    assert_eq!(d[0].0, MeshPrimitive::LineStrip);
    assert_eq!(d[0].1.len(), 7);
    assert_eq!(d[0].1[0].position, Vector2::new(-1.8, -0.5));
    assert_eq!(d[0].1[6].position, Vector2::new(2.0, -1.0));

    let d = draws(&routines::frame(&state(4), &mut rng));
    assert_eq!(d[0].0, MeshPrimitive::LineLoop);
    assert_eq!(d[0].1.len(), 9);
}

#[test]
fn decomposition_triangles() {
    let mut rng = rng();
    let d = draws(&routines::frame(&state(5), &mut rng));
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].0, MeshPrimitive::Triangles);
    assert_eq!(d[0].1.len(), 15);

    for tri in d[0].1.chunks(3) {
        assert_eq!(tri[0].color, tri[1].color);
        assert_eq!(tri[1].color, tri[2].color);
    }
}

#[test]
fn decomposition_strip() {
    let mut rng = rng();
    let mut s = state(5);
    s.assembly = Assembly::Strip;

    let d = draws(&routines::frame(&s, &mut rng));
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].0, MeshPrimitive::TriangleStrip);
    let vertices = &d[0].1;
    assert_eq!(vertices.len(), 15);
    for pair in vertices.chunks(2) {
        assert!(pair.iter().all(|v| v.color == pair[0].color));
    }

    s.shading = Shading::Smooth;
    let d = draws(&routines::frame(&s, &mut rng));
    let vertices = &d[0].1;
    assert!(vertices.chunks(2).any(|v| v.len() == 2 && v[0].color != v[1].color));
}

#[test]
fn decomposition_fan() {
    let mut rng = rng();
    let mut s = state(5);
    s.assembly = Assembly::Fan;

    let d = draws(&routines::frame(&s, &mut rng));
    assert_eq!(d.len(), figures::FIGURE2_FANS.len());

    let triangles: usize = d
        .iter()
        .map(|(primitive, vertices)| primitive.assemble(vertices.len()))
        .sum();
    assert_eq!(triangles, figures::FIGURE2_TRIANGLES.len() / 3);

    for (i, (primitive, vertices)) in d.iter().enumerate() {
        assert_eq!(*primitive, MeshPrimitive::TriangleFan);
        assert_eq!(vertices.len(), figures::FIGURE2_FANS[i].len());

        // The center has a color of its own, the first triangle is colored by its
        // provoking vertex and the rim vertex before it.
        let (center, rim) = (vertices[0], &vertices[1..]);
        assert_ne!(center.color, rim[0].color);
        assert_eq!(rim[0].color, rim[1].color);
        for v in &rim[2..] {
            assert_ne!(v.color, rim[1].color);
        }
    }

    s.shading = Shading::Smooth;
    let d = draws(&routines::frame(&s, &mut rng));
    for (_, vertices) in &d {
        let (center, rim) = (vertices[0], &vertices[1..]);
        assert!(rim.iter().all(|v| v.color != center.color));
        for pair in rim.windows(2) {
            assert_ne!(pair[0].color, pair[1].color);
        }
    }
}

#[test]
fn assembly_does_not_affect_other_tasks() {
    for task in (1..9).filter(|&i| i != 5) {
        let mut a = state(task);
        let mut b = state(task);
        a.assembly = Assembly::Triangles;
        b.assembly = Assembly::Fan;

        let da = draws(&routines::frame(&a, &mut rng()));
        let db = draws(&routines::frame(&b, &mut rng()));
        assert_eq!(da, db);
    }
}

#[test]
fn ngon_fan() {
    let mut rng = rng();
    let d = draws(&routines::frame(&state(6), &mut rng));
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].0, MeshPrimitive::TriangleFan);

    let vertices = &d[0].1;
    assert_eq!(vertices.len(), figures::NGON_SIDES + 2);
    assert_eq!(vertices[0].position, Vector2::new(0.0, 0.0));
    assert_eq!(vertices[0].color, Color::white());
    assert_eq!(vertices[1].position, vertices[vertices.len() - 1].position);
}

#[test]
fn mesh_face_modes() {
    for &face in FaceMode::ALL {
        let mut rng = rng();
        let mut s = state(8);
        s.face = face;

        let buf = routines::frame(&s, &mut rng);
        let d = draws(&buf);
        for (primitive, vertices) in &d {
            assert_eq!(*primitive, MeshPrimitive::Triangles);
            assert_eq!(vertices.len(), 30);
        }

        let cmds = buf.commands();
        match face {
            FaceMode::Normal => {
                assert_eq!(d.len(), 1);
                assert!(cmds.contains(&Command::SetPolygonMode(PolygonMode::Fill)));
            }
            FaceMode::VerticesFront => {
                assert_eq!(d.len(), 1);
                assert!(cmds.contains(&Command::SetCullFace(CullFace::Back)));
                assert!(cmds.contains(&Command::SetPolygonMode(PolygonMode::Point)));
                assert!(cmds.contains(&Command::SetPointSize(5.0)));
            }
            FaceMode::FilledFrontWireBack => {
                assert_eq!(d.len(), 2);
                assert!(d[0].1.iter().all(|v| v.color == Color::gray()));
                for (back, front) in d[0].1.iter().zip(d[1].1.iter()) {
                    assert_eq!(back.position, front.position);
                }

                let modes: Vec<_> = cmds
                    .iter()
                    .filter(|v| match **v {
                        Command::SetCullFace(_) | Command::SetPolygonMode(_) => true,
                        _ => false,
                    })
                    .cloned()
                    .collect();

                assert_eq!(
                    modes,
                    vec![
                        Command::SetCullFace(CullFace::Front),
                        Command::SetPolygonMode(PolygonMode::Line),
                        Command::SetCullFace(CullFace::Back),
                        Command::SetPolygonMode(PolygonMode::Fill),
                    ]
                );
            }
            FaceMode::Wireframe => {
                assert_eq!(d.len(), 1);
                assert!(cmds.contains(&Command::SetCullFace(CullFace::Nothing)));
                assert!(cmds.contains(&Command::SetPolygonMode(PolygonMode::Line)));
            }
        }
    }
}

#[test]
fn mesh_colors_per_triangle() {
    let mut rng = rng();
    let d = draws(&routines::frame(&state(7), &mut rng));
    assert_eq!(d.len(), 1);
    for tri in d[0].1.chunks(3) {
        assert!(tri.iter().all(|v| v.color == tri[0].color));
    }
}
