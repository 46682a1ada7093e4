//! Camera orbit controls and the pointer input they consume.

mod input;
mod orbit;
mod spherical;

pub use input::*;
pub use orbit::*;
pub use spherical::Spherical;
