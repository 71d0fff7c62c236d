//! A backend without any OpenGL context, which records everything it was asked to do.

use std::cell::RefCell;
use std::rc::Rc;

use super::super::assets::prelude::*;
use super::super::command::Command;
use super::Visitor;

use crate::errors::*;
use crate::math::prelude::Vector2;

/// One call received by the headless backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    CreateShader(ShaderHandle),
    DeleteShader(ShaderHandle),
    CreateMesh(MeshHandle, MeshParams, usize),
    DeleteMesh(MeshHandle),
    UpdateViewport(Vector2<u32>),
    Execute(Command),
    Flush,
}

/// Records of one frame, in the order they were received.
pub type Frame = Vec<Record>;

/// A shared view of the frames recorded by a `HeadlessVisitor`.
#[derive(Debug, Clone)]
pub struct Recorder {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder {
            frames: Rc::new(RefCell::new(vec![Frame::new()])),
        }
    }
}

impl Recorder {
    /// Returns all finished frames, followed by the frame in progress.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    /// Returns the commands executed during frame `index`.
    pub fn commands(&self, index: usize) -> Vec<Command> {
        self.frames
            .borrow()
            .get(index)
            .map(|frame| {
                frame
                    .iter()
                    .filter_map(|v| match *v {
                        Record::Execute(ref cmd) => Some(cmd.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn push(&self, record: Record) {
        if let Some(frame) = self.frames.borrow_mut().last_mut() {
            frame.push(record);
        }
    }

    fn advance(&self) {
        self.frames.borrow_mut().push(Frame::new());
    }
}

pub struct HeadlessVisitor {
    recorder: Recorder,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            recorder: Recorder::default(),
        }
    }

    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn create_shader(&mut self, handle: ShaderHandle, _: &str, _: &str) -> Result<()> {
        self.recorder.push(Record::CreateShader(handle));
        Ok(())
    }

    unsafe fn delete_shader(&mut self, handle: ShaderHandle) -> Result<()> {
        self.recorder.push(Record::DeleteShader(handle));
        Ok(())
    }

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &MeshData,
    ) -> Result<()> {
        self.recorder
            .push(Record::CreateMesh(handle, params, data.len()));
        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        self.recorder.push(Record::DeleteMesh(handle));
        Ok(())
    }

    unsafe fn update_viewport(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        self.recorder.push(Record::UpdateViewport(dimensions));
        Ok(())
    }

    unsafe fn execute(&mut self, cmd: &Command) -> Result<()> {
        self.recorder.push(Record::Execute(cmd.clone()));
        Ok(())
    }

    unsafe fn flush(&mut self) -> Result<()> {
        self.recorder.push(Record::Flush);
        Ok(())
    }

    unsafe fn advance(&mut self) -> Result<()> {
        self.recorder.advance();
        Ok(())
    }
}
