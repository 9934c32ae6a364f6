pub mod angle;
pub mod geodesy;
pub mod precision;
pub mod vec;

pub use angle::*;
pub use geodesy::*;
pub use precision::*;
pub use vec::*;
