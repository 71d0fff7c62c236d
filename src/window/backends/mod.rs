mod headless;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    fn resize(&self, dimensions: Vector2<u32>);
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
}

pub fn new_headless(script: Vec<Vec<Event>>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(script))
}

mod glutin;
pub use self::glutin::new;
