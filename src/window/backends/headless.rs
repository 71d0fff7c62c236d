use std::collections::VecDeque;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

pub struct HeadlessVisitor {
    script: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(script: Vec<Vec<Event>>) -> Self {
        HeadlessVisitor {
            script: script.into(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        (0, 0).into()
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    #[inline]
    fn resize(&self, _: Vector2<u32>) {}

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.script.pop_front() {
            Some(frame) => events.extend(frame),
            None => events.push(Event::Window(WindowEvent::Closed)),
        }
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }
}
