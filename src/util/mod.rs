//! Shared utilities.

/// Frame timing and FPS reporting.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
