//! Time-driven behavior: the blinking highlights and the turntable
//! camera path.
//!
//! Both are pure functions of the elapsed time handed in by the host
//! event loop; nothing in here reads a clock.

/// Blinking-highlight lifecycle.
pub mod blink;
/// Scripted auto-rotation camera path.
pub mod turntable;

pub use blink::Blink;
pub use turntable::Turntable;
