use instant::Instant;

/// Which phase of a simulation tick is being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SystemPhase {
    Input = 0,
    Environment = 1,
    Textures = 2,
    Entities = 3,
    Publish = 4,
}

impl SystemPhase {
    pub const ALL: [SystemPhase; 5] = [
        Self::Input,
        Self::Environment,
        Self::Textures,
        Self::Entities,
        Self::Publish,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Environment => "Environment",
            Self::Textures => "Textures",
            Self::Entities => "Entities",
            Self::Publish => "Publish",
        }
    }
}

/// Per-phase timing with exponential moving average smoothing.
#[derive(Debug)]
pub struct SystemTimers {
    /// EMA-smoothed duration in microseconds per phase.
    pub durations_us: [f64; 5],
    start: Instant,
}

const EMA_ALPHA: f64 = 0.1;

impl Default for SystemTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTimers {
    pub fn new() -> Self {
        Self {
            durations_us: [0.0; 5],
            start: Instant::now(),
        }
    }

    /// Call before a phase runs.
    pub fn begin(&mut self) {
        self.start = Instant::now();
    }

    /// Call after a phase finishes. Folds the elapsed time into `phase`.
    pub fn end(&mut self, phase: SystemPhase) {
        let elapsed_us = self.start.elapsed().as_secs_f64() * 1_000_000.0;
        let idx = phase as usize;
        self.durations_us[idx] =
            self.durations_us[idx] * (1.0 - EMA_ALPHA) + elapsed_us * EMA_ALPHA;
    }

    pub fn total_us(&self) -> f64 {
        self.durations_us.iter().sum()
    }

    /// One-line breakdown for the log.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = SystemPhase::ALL
            .iter()
            .map(|&p| format!("{} {:.0}us", p.label(), self.durations_us[p as usize]))
            .collect();
        format!("{} | total {:.0}us", parts.join(" | "), self.total_us())
    }
}
