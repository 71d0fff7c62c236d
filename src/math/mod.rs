//! This module contains the math utils that mainly comes from `cgmath`.

pub mod color;
pub use self::color::Color;

pub mod prelude {
    pub use super::color::Color;
    pub use cgmath::prelude::*;
    pub use cgmath::{perspective, vec2, vec3, Deg, Matrix4, Point2, Point3, Rad, Vector2, Vector3};
}
