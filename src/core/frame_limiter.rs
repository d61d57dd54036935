//! Caps the frame loop at a fixed rate.
use std::time::{Duration, Instant};

use log::debug;

#[derive(Debug)]
pub struct FrameLimiter {
    iteration_start: Instant,
    pub iteration_duration: Duration,
}

impl FrameLimiter {
    pub fn new(fps: f64) -> FrameLimiter {
        FrameLimiter {
            iteration_start: Instant::now(),
            iteration_duration: Duration::from_secs_f64(1.0 / fps),
        }
    }

    /// Sleeps out the rest of the current frame budget and starts the next
    /// frame. Returns how long the finished frame took.
    pub fn wait(&mut self) -> Duration {
        let sleep_until = self.iteration_start + self.iteration_duration;
        let now = Instant::now();
        if now < sleep_until {
            std::thread::sleep(sleep_until - now);
        } else {
            debug!("Over frame budget by: {:?}", now - sleep_until);
        }
        let delta_t = self.iteration_start.elapsed();
        self.iteration_start = Instant::now();
        delta_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_from_fps() {
        let limiter = FrameLimiter::new(60.0);
        let micros = limiter.iteration_duration.as_micros();
        assert!((16_600..=16_700).contains(&micros), "{}", micros);
    }

    #[test]
    fn wait_fills_the_frame() {
        let before = Instant::now();
        let mut limiter = FrameLimiter::new(50.0);
        let frame = limiter.wait();
        assert!(before.elapsed() >= Duration::from_millis(20));
        assert!(frame >= Duration::from_millis(20));
    }

    #[test]
    fn overrun_does_not_sleep_again() {
        let mut limiter = FrameLimiter::new(1000.0);
        std::thread::sleep(Duration::from_millis(5));
        let started = Instant::now();
        let frame = limiter.wait();
        assert!(frame >= Duration::from_millis(5));
        // only the bookkeeping, no extra sleep
        assert!(started.elapsed() < Duration::from_millis(5));
    }
}
