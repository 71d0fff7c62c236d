//! Small interactive OpenGL demos for a graphics course.
//!
//! The crate hosts two programs on top of a thin engine layer:
//!
//! * `shapes`, which draws one primitive shape or figure at a time. The figure is
//! selected with the digit keys `1`..`8`, and a few keys cycle the shading, face and
//! primitive-assembly modes.
//! * `triangles`, which draws three fixed triangles with three single-color shader
//! programs sharing a passthrough vertex stage.
//!
//! Both programs implement the `Application` trait and are driven by `Engine`, which
//! owns the window and video systems and runs the clear-render-present-poll loop.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate cgmath;
pub extern crate gl;
pub extern crate glutin;
pub extern crate rand;

pub mod errors;

pub mod application;
pub mod input;
pub mod math;
pub mod video;
pub mod window;

pub mod shapes;
pub mod triangles;

pub mod prelude;
