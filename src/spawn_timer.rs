use log::{debug, trace, warn};

/// Fixed-rate spawn clock.
///
/// Feed it each frame's delta time and it answers how many spawns are due.
/// Time left over after the last full interval carries into the next call, so the
/// total count over a stretch of time doesn't depend on the frame rate.
///
/// A rate of zero or less disables the timer, and so does a non-finite rate. While
/// disabled, `advance` returns 0 and the time it's given is dropped rather than
/// banked for later.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    rate : f32,
    interval : f32,
    accumulated : f32
}

impl Default for SpawnTimer {
    fn default() -> Self {
        SpawnTimer{rate: 0.0, interval: f32::INFINITY, accumulated: 0.0}
    }
}

impl SpawnTimer {
    pub fn new() -> SpawnTimer {
        SpawnTimer::default()
    }

    pub fn with_rate(rate: f32) -> SpawnTimer {
        let mut timer = SpawnTimer::new();
        timer.set_rate(rate);
        timer
    }

    /// Spawns per second. Takes effect on the next `advance`, keeping any accumulated time.
    ///
    /// Infinite or NaN rates, and rates so high the interval rounds to zero, disable the timer.
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
        self.interval = if rate > 0.0 && rate.is_finite() && 1.0 / rate > 0.0 {
            1.0 / rate
        } else {
            f32::INFINITY
        };

        if !rate.is_finite() {
            warn!("Spawn rate {} is not finite, timer disabled", rate);
        } else {
            debug!("Spawn rate set to {}/s (interval {})", rate, self.interval);
        }
    }

    pub fn rate(&self) -> f32 { self.rate }

    /// Seconds between spawns, `None` while disabled
    pub fn interval(&self) -> Option<f32> {
        if self.is_enabled() { Some(self.interval) } else { None }
    }

    /// Time carried toward the next spawn
    pub fn accumulated(&self) -> f32 { self.accumulated }

    pub fn is_enabled(&self) -> bool { self.interval.is_finite() }

    /// Drops the carried time without touching the rate
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Returns how many whole intervals elapsed, including leftover time from earlier calls.
    ///
    /// The count saturates at `u32::MAX`; spawns beyond that in a single call are dropped.
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        if !self.is_enabled() {return 0;}

        if !delta_time.is_finite() || delta_time < 0.0 {
            warn!("Ignoring invalid delta time {}", delta_time);
            return 0;
        }

        self.accumulated += delta_time;

        // closed form: repeated subtraction stalls once interval is below the ulp of accumulated
        let due = (self.accumulated / self.interval).floor();
        let spawns = if due >= u32::MAX as f32 { u32::MAX } else { due as u32 };
        self.accumulated -= due * self.interval;

        if !(self.accumulated >= 0.0 && self.accumulated < self.interval) {
            self.accumulated = 0.0;
        }

        if spawns > 0 {
            trace!("{} spawns due, {} carried", spawns, self.accumulated);
        }
        spawns
    }
}
