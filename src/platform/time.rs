//! Frame timing
//!
//! A clock is owned by the game driver and passed explicitly; there is no
//! process-wide timing state. `delta_time` reports the duration of the
//! previous frame in milliseconds and is stable between `start_frame` and
//! `end_frame`.

use std::time::Instant;

pub trait Clock {
    fn start_frame(&mut self);
    fn end_frame(&mut self);
    /// Milliseconds
    fn delta_time(&self) -> f32;
}

/// Wall-clock frame timer
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_start: Option<Instant>,
    delta_ms: f32,
    since_start: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_start: None,
            delta_ms: 0.0,
            since_start: 0.0,
        }
    }

    /// Seconds accumulated over completed frames
    pub fn time_since_start(&self) -> f32 {
        self.since_start
    }

    pub fn fps(&self) -> f32 {
        if self.delta_ms > 0.0 {
            1000.0 / self.delta_ms
        } else {
            0.0
        }
    }
}

impl Clock for FrameClock {
    fn start_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            let elapsed = start.elapsed().as_secs_f32();
            self.delta_ms = elapsed * 1000.0;
            self.since_start += elapsed;
        }
    }

    fn delta_time(&self) -> f32 {
        self.delta_ms
    }
}

/// Clock that reports the same delta every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub delta_ms: f32,
    pub frames: u64,
}

impl FixedClock {
    pub fn new(delta_ms: f32) -> Self {
        Self { delta_ms, frames: 0 }
    }
}

impl Clock for FixedClock {
    fn start_frame(&mut self) {}

    fn end_frame(&mut self) {
        self.frames += 1;
    }

    fn delta_time(&self) -> f32 {
        self.delta_ms
    }
}
