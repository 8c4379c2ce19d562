/*
 * Debug Information Module
 *
 * Frame timing and per-rule steering counts shown in the control panel.
 */

use std::time::Duration;

use crate::flock::StepStats;

#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub steering: StepStats,
    pub pointer_active: bool,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration, steering: StepStats) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.steering = steering;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}
