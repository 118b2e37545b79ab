use thiserror::Error;

/// Load/link-time failures. Nothing in here is ever produced while ticking.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown behavior id {0}")]
    UnknownAction(u16),

    #[error("state table row {row} declares id {declared}")]
    StateOrder { row: usize, declared: u16 },

    #[error("state {state} links to missing state {next}")]
    MissingState { state: u16, next: u16 },

    #[error("zero-duration cycle through state {0}")]
    ZeroDurationCycle(u16),

    #[error("type {kind} references missing state {state}")]
    MissingTypeState { kind: &'static str, state: u16 },

    #[error("type table row {row} holds {kind}")]
    TypeOrder { row: usize, kind: &'static str },

    #[error("type table has {found} rows, expected {expected}")]
    TypeTableSize { found: usize, expected: usize },

    #[error("linedef {line} references missing vertex {vertex}")]
    MissingVertex { line: usize, vertex: usize },

    #[error("linedef {line} references missing sector {sector}")]
    MissingSector { line: usize, sector: usize },

    #[error("animated texture {0} has no frames or zero speed")]
    BadAnimation(usize),

    #[error("config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
}
