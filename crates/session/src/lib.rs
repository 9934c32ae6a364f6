pub mod error;
pub mod location;
pub mod session;

pub use error::*;
pub use location::*;
pub use session::*;
