pub mod heading;
pub mod orientation;
pub mod tilt;

pub use heading::*;
pub use orientation::*;
pub use tilt::*;
