extern crate glshapes;
extern crate rand;

use glshapes::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.engine.max_fps = 0;
    settings
}

fn press(key: Key) -> Event {
    Event::InputDevice(InputEvent::KeyboardPressed { key })
}

fn draws(recorder: &Recorder, frame: usize) -> Vec<(MeshPrimitive, usize)> {
    recorder
        .commands(frame)
        .into_iter()
        .filter_map(|v| match v {
            Command::Draw(primitive, vertices) => Some((primitive, vertices.len())),
            _ => None,
        })
        .collect()
}

#[test]
fn shapes_end_to_end() {
    let script = vec![
        vec![press(Key::Key1)],
        vec![press(Key::Key3)],
        vec![press(Key::Escape)],
    ];

    let (engine, recorder) = Engine::headless(&settings(), script);
    let app = engine
        .run(Shapes::with_rng(StdRng::from_seed([1; 32])))
        .unwrap();

    assert_eq!(app.state().task, Task::Polyline);

    let frames = recorder.frames();
    assert_eq!(frames.len(), 4);
    assert_eq!(draws(&recorder, 0), vec![(MeshPrimitive::Points, 8)]);
    assert_eq!(draws(&recorder, 1), vec![(MeshPrimitive::Points, 8)]);
    assert_eq!(draws(&recorder, 2), vec![(MeshPrimitive::LineStrip, 7)]);
    assert_eq!(frames[3], vec![Record::Flush]);
}

#[test]
fn close_without_input() {
    let (engine, recorder) = Engine::headless(&settings(), Vec::new());
    let app = engine.run(Shapes::new()).unwrap();

    assert_eq!(*app.state(), RenderState::default());
    assert_eq!(recorder.frames().len(), 2);
    assert_eq!(draws(&recorder, 0), vec![(MeshPrimitive::Points, 8)]);
}

#[test]
fn release_is_ignored() {
    let script = vec![vec![Event::InputDevice(InputEvent::KeyboardReleased {
        key: Key::Key4,
    })]];

    let (engine, _) = Engine::headless(&settings(), script);
    let app = engine.run(Shapes::new()).unwrap();
    assert_eq!(app.state().task, Task::NgonPoints);
}

#[test]
fn resize_updates_viewport() {
    let script = vec![
        vec![Event::Window(WindowEvent::Resized(640, 480))],
        vec![press(Key::Escape)],
    ];

    let (engine, recorder) = Engine::headless(&settings(), script);
    engine.run(Shapes::new()).unwrap();

    assert!(recorder.frames()[1].contains(&Record::UpdateViewport(Vector2::new(640, 480))));
}
