//! Platform abstraction layer for cross-platform functionality.

mod desktop;
pub use desktop::*;
