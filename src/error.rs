//! Error types for the construction and persistence boundaries
//!
//! Nothing in the per-frame path returns these; they surface while building a
//! scene or while loading/saving files.

use core::fmt;

/// Texture lookup failures (construction time only)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    /// No texture registered under this name
    Missing { name: String },
    /// A texture with this name is already registered
    Duplicate { name: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "texture `{name}` is not registered"),
            Self::Duplicate { name } => write!(f, "texture `{name}` is already registered"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Score table failures
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    EmptyName,
    NameTooLong { len: usize, max: usize },
    InvalidNameChars { name: String },
    ScoreOutOfRange { score: u32, max: u32 },
    Io(String),
    Parse(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "player name is empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "player name has {len} characters (max {max})")
            }
            Self::InvalidNameChars { name } => write!(
                f,
                "player name `{name}` may only contain A-Z, 0-9 and spaces"
            ),
            Self::ScoreOutOfRange { score, max } => {
                write!(f, "score {score} is out of range (0..={max})")
            }
            Self::Io(msg) => write!(f, "score table I/O failed: {msg}"),
            Self::Parse(msg) => write!(f, "score table is malformed: {msg}"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Settings/tuning file failures
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O failed: {msg}"),
            Self::Parse(msg) => write!(f, "config is malformed: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
