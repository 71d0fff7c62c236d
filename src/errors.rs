//! Error kinds shared by the window, video and application layers.

use crate::video::assets::{MeshHandle, ShaderHandle};

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Glutin: {}", _0)]
    Glutin(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Failed to compile shader, errors: \n{}\nsource: \n{}", log, source)]
    ShaderCompile { log: String, source: String },
    #[fail(display = "Failed to link program, errors: \n{}", _0)]
    ProgramLink(String),
    #[fail(display = "{} is invalid.", _0)]
    ShaderHandleInvalid(ShaderHandle),
    #[fail(display = "{} is invalid.", _0)]
    MeshHandleInvalid(MeshHandle),
    #[fail(display = "[GL] {}", _0)]
    GL(String),
}

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}
