extern crate glshapes;

use glshapes::prelude::*;
use glshapes::triangles::{self, TRIANGLES};

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.engine.max_fps = 0;
    settings
}

#[test]
fn creates_programs_and_meshes() {
    let (mut video, recorder) = VideoSystem::headless();
    let app = Triangles::new(&mut video).unwrap();

    assert_eq!(app.batches().len(), 3);
    for &(shader, mesh) in app.batches() {
        assert!(video.is_shader_alive(shader));
        assert!(video.is_mesh_alive(mesh));
    }

    let frame = &recorder.frames()[0];
    let shaders = frame
        .iter()
        .filter(|v| match **v {
            Record::CreateShader(_) => true,
            _ => false,
        })
        .count();

    let meshes: Vec<_> = frame
        .iter()
        .filter_map(|v| match *v {
            Record::CreateMesh(_, params, len) => Some((params.primitive, len)),
            _ => None,
        })
        .collect();

    assert_eq!(shaders, 3);
    assert_eq!(meshes, vec![(MeshPrimitive::Triangles, 3); 3]);
}

#[test]
fn geometry() {
    for tri in TRIANGLES.iter() {
        assert!(tri.iter().all(|v| v[2] == 0.0));
        assert_eq!(tri[0][1], -0.5);
        assert_eq!(tri[2][1], 0.5);
    }

    assert!(TRIANGLES[0].iter().all(|v| v[0] < TRIANGLES[1][0][0]));
    assert!(TRIANGLES[1].iter().all(|v| v[0] < TRIANGLES[2][0][0]));
}

#[test]
fn shaders_share_the_vertex_stage() {
    assert!(triangles::VERTEX_SHADER.starts_with("#version 330 core"));
    assert!(triangles::RED_FRAGMENT_SHADER.contains("vec4(1.0, 0.0, 0.0, 1.0)"));
    assert!(triangles::GREEN_FRAGMENT_SHADER.contains("vec4(0.0, 1.0, 0.0, 1.0)"));
    assert!(triangles::BLUE_FRAGMENT_SHADER.contains("vec4(0.0, 0.0, 1.0, 1.0)"));
}

#[test]
fn draws_and_releases() {
    let script = vec![vec![], vec![Event::InputDevice(InputEvent::KeyboardPressed {
        key: Key::Escape,
    })]];

    let (mut engine, recorder) = Engine::headless(&settings(), script);
    let app = Triangles::new(&mut engine.video).unwrap();
    let batches = app.batches().to_vec();

    let app = engine.run(app).unwrap();
    assert!(app.batches().is_empty());

    for frame in 0..2 {
        let cmds = recorder.commands(frame);
        assert_eq!(cmds[0], Command::Clear(Color::black()));

        let draws: Vec<_> = cmds
            .iter()
            .filter_map(|v| match *v {
                Command::DrawMesh(shader, mesh) => Some((shader, mesh)),
                _ => None,
            })
            .collect();

        assert_eq!(draws, batches);
    }

    let frames = recorder.frames();
    let last = &frames[2];
    let deleted_meshes = last.iter().position(|v| match *v {
        Record::DeleteMesh(_) => true,
        _ => false,
    });

    let deleted_shaders = last.iter().position(|v| match *v {
        Record::DeleteShader(_) => true,
        _ => false,
    });

    assert!(deleted_meshes.unwrap() < deleted_shaders.unwrap());
    assert_eq!(last.len(), 7);
    assert_eq!(last[6], Record::Flush);
}
