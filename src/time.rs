//! Session clock.
//!
//! The stepper takes elapsed time as an explicit argument. `Time` is the
//! caller-side clock that produces it, either from the wall clock or from a
//! fixed step per frame for deterministic, headless runs.
//!
//! # Example
//!
//! ```
//! use taichi_field::time::Time;
//!
//! let mut time = Time::fixed(1.0 / 60.0);
//! for _ in 0..60 {
//!     time.update();
//! }
//! assert!((time.elapsed() - 1.0).abs() < 1e-4);
//! assert_eq!(time.frame(), 60);
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
enum Source {
    /// Real time measured from `start`.
    Wall { start: Instant, last_frame: Instant },
    /// A constant step per `update`.
    Fixed { step: f32 },
}

/// Elapsed-time tracker for a session.
#[derive(Debug, Clone)]
pub struct Time {
    source: Source,
    /// Total elapsed time in seconds, scaled.
    elapsed_secs: f32,
    /// Time added by the last update, scaled.
    delta_secs: f32,
    frame_count: u64,
    /// Calculated FPS (updated periodically, wall clock only).
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Wall-clock timer starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self::with_source(Source::Wall {
            start: now,
            last_frame: now,
        })
    }

    /// Deterministic timer advancing `step` seconds per update.
    pub fn fixed(step: f32) -> Self {
        Self::with_source(Source::Fixed { step: step.max(0.0) })
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            time_scale: 1.0,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        let raw_delta = match &mut self.source {
            Source::Wall { last_frame, .. } => {
                let now = Instant::now();
                let delta = now.duration_since(*last_frame).as_secs_f32();
                *last_frame = now;
                delta
            }
            Source::Fixed { step } => *step,
        };

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, self.delta_secs);
        }

        // Accumulate scaled deltas so a change of scale never makes elapsed jump.
        self.delta_secs = raw_delta * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.frame_count += 1;

        if matches!(self.source, Source::Wall { .. }) {
            let now = Instant::now();
            let fps_elapsed = now.duration_since(self.fps_update_time);
            if fps_elapsed >= self.fps_update_interval {
                let frames_since = self.frame_count - self.fps_frame_count;
                self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
                self.fps_frame_count = self.frame_count;
                self.fps_update_time = now;
            }
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds since start, excluding pauses.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames counted since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second. For a fixed clock this is the nominal rate.
    #[inline]
    pub fn fps(&self) -> f32 {
        match self.source {
            Source::Fixed { step } if step > 0.0 => 1.0 / step,
            _ => self.fps,
        }
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self.source, Source::Fixed { .. })
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pause time progression.
    ///
    /// While paused, `delta()` returns 0 and `elapsed()` stops increasing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set time scale multiplier. Negative values clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset elapsed time and frame count, keeping the source kind.
    pub fn reset(&mut self) {
        let source = match self.source {
            Source::Wall { .. } => {
                let now = Instant::now();
                Source::Wall {
                    start: now,
                    last_frame: now,
                }
            }
            fixed => fixed,
        };
        let time_scale = self.time_scale;
        *self = Self::with_source(source);
        self.time_scale = time_scale;
    }

    /// Wall time since the timer started, including pauses. `None` for a
    /// fixed clock.
    pub fn wall_elapsed(&self) -> Option<Duration> {
        match self.source {
            Source::Wall { start, .. } => Some(start.elapsed()),
            Source::Fixed { .. } => None,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
