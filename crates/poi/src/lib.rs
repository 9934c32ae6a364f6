pub mod feed;
pub mod record;

pub use feed::*;
pub use record::*;
