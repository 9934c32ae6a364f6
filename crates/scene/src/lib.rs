pub mod anchor;
pub mod picking;
pub mod place;
pub mod visibility;
pub mod world;

pub use world::*;
