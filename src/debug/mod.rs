//! Tick statistics for the headless runner's log.

pub mod timer;

use instant::Instant;

/// How often to log tick statistics (seconds).
const STATS_LOG_INTERVAL: f64 = 5.0;

/// Frame and tick counters, logged periodically.
#[derive(Debug)]
pub struct TickStats {
    pub frame_count: u64,
    pub tick_count: u64,
    last_log_time: Instant,
    frames_since_log: u32,
    ticks_since_log: u64,
    max_burst: u32,
}

impl Default for TickStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TickStats {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            tick_count: 0,
            last_log_time: Instant::now(),
            frames_since_log: 0,
            ticks_since_log: 0,
            max_burst: 0,
        }
    }

    /// Record one scheduler advance that ran `ticks` simulation ticks.
    pub fn record_frame(&mut self, ticks: u32, entities: usize) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.tick_count += u64::from(ticks);
        self.ticks_since_log += u64::from(ticks);
        self.max_burst = self.max_burst.max(ticks);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= STATS_LOG_INTERVAL {
            log::info!(
                "TPS: {:.1} | frames: {} | max burst: {} | entities: {} | total ticks: {}",
                self.ticks_since_log as f64 / elapsed,
                self.frames_since_log,
                self.max_burst,
                entities,
                self.tick_count,
            );
            self.last_log_time = Instant::now();
            self.frames_since_log = 0;
            self.ticks_since_log = 0;
            self.max_burst = 0;
        }
    }
}
