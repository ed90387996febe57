use std::time::{Duration, Instant};

use log::debug;

/// How often the measured frame rate is reported to the log.
const REPORT_INTERVAL: Duration = Duration::from_secs(3);

/// Frame timing with smoothed FPS calculation and periodic log reporting.
#[derive(Debug)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    last_report: Instant,
    frames_since_report: u32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            last_report: now,
            frames_since_report: 0,
        }
    }

    /// Call once per frame after the update work.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames_since_report += 1;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        let since_report = now.duration_since(self.last_report);
        if since_report >= REPORT_INTERVAL {
            let fps = self.frames_since_report as f32
                / since_report.as_secs_f32();
            debug!(
                "{} frames in {} ms = {fps:.3} fps",
                self.frames_since_report,
                since_report.as_millis()
            );
            self.last_report = now;
            self.frames_since_report = 0;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
