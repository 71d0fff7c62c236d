pub use crate::application::prelude::*;
pub use crate::application::TimeSystem;
pub use crate::errors::{Error, Result};

pub use crate::input::prelude::*;
pub use crate::math::prelude::*;
pub use crate::video::prelude::*;
pub use crate::window::prelude::*;

pub use crate::shapes::prelude::*;
pub use crate::triangles::Triangles;
