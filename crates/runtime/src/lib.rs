pub mod event_bus;
pub mod frame;
pub mod retry;

pub use event_bus::*;
pub use frame::*;
pub use retry::*;
