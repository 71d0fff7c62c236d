#[macro_use]
extern crate log;

use std::process;

use glshapes::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = Settings::default();
    settings.window.title = "OpenGL Shapes".to_owned();
    settings.window.size = Vector2::new(800, 600);
    settings.engine.max_fps = 60;

    if let Err(err) = run(&settings) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<()> {
    let engine = Engine::new_with(settings)?;
    engine.run(Shapes::new())?;
    Ok(())
}
