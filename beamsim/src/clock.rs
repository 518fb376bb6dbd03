//! Simulation clock for frontends driving animated playback.
//!
//! The clock is owned by the caller, never by the model: every evaluation
//! receives its time explicitly (see [`crate::scene::Scene::compose`]), so a
//! frontend may drive the model at any cadence, or from a recorded time
//! series, without the core noticing. This helper just packages the
//! play/pause/reset bookkeeping that interactive frontends need.

use std::time::Duration;

/// Play/pause/reset simulation time source.
///
/// Time is monotonically non-decreasing while playing, frozen while paused,
/// and returns to zero on reset. Starts paused at t = 0.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    time_s: f64,
    playing: bool,
}

impl SimulationClock {
    /// Create a clock paused at t = 0
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Create a clock paused at the given time
    pub fn starting_at(time_s: f64) -> Self {
        Self {
            time_s,
            playing: false,
        }
    }

    /// Current simulation time in seconds
    pub fn time(&self) -> f64 {
        self.time_s
    }

    /// Whether the clock is advancing on ticks
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start advancing on ticks
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Freeze the clock; ticks become no-ops
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip between playing and paused
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Return to t = 0 (play/pause state is unchanged)
    pub fn reset(&mut self) {
        self.time_s = 0.0;
    }

    /// Advance by `dt` if playing; returns the current time either way
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if self.playing {
            self.time_s += dt.as_secs_f64();
        }
        self.time_s
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_paused_at_zero() {
        let clock = SimulationClock::new();
        assert_eq!(clock.time(), 0.0);
        assert!(!clock.is_playing());
    }

    #[test]
    fn test_paused_clock_is_frozen() {
        let mut clock = SimulationClock::new();
        clock.tick(Duration::from_millis(100));
        clock.tick(Duration::from_millis(100));
        assert_eq!(clock.time(), 0.0);
    }

    #[test]
    fn test_playing_clock_advances_monotonically() {
        let mut clock = SimulationClock::new();
        clock.play();

        let mut previous = clock.time();
        for _ in 0..10 {
            let now = clock.tick(Duration::from_millis(100));
            assert!(now >= previous);
            previous = now;
        }
        assert_relative_eq!(clock.time(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = SimulationClock::new();
        clock.play();
        clock.tick(Duration::from_millis(500));

        clock.pause();
        clock.tick(Duration::from_millis(500));
        assert_relative_eq!(clock.time(), 0.5, epsilon = 1e-9);

        clock.toggle();
        clock.tick(Duration::from_millis(500));
        assert_relative_eq!(clock.time(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimulationClock::starting_at(4.2);
        clock.play();
        clock.tick(Duration::from_millis(100));
        clock.reset();
        assert_eq!(clock.time(), 0.0);
        assert!(clock.is_playing());
    }
}
