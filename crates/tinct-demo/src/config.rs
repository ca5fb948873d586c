//! Runtime configuration for the demo loop.

/// Default simulated frame rate.
const DEFAULT_FPS: u32 = 60;
/// Default animation length in seconds.
const DEFAULT_DURATION: f32 = 2.0;

/// Settings for the headless host loop, read from the environment.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Simulated ticks per second.
    pub fps: u32,
    /// Seconds each animation runs.
    pub duration: f32,
    /// Fixed RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Fixed tick length in seconds.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fps: std::env::var("TINCT_FPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&fps| fps > 0)
                .unwrap_or(DEFAULT_FPS),
            duration: std::env::var("TINCT_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|d: &f32| d.is_finite() && *d >= 0.0)
                .unwrap_or(DEFAULT_DURATION),
            seed: std::env::var("TINCT_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }
}
