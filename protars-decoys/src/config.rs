use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_DECOY_IDENTIFIER;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecoyType {
    None,
    #[default]
    Reverse,
    Slide,
    /// Named for compatibility with other tools; not implemented
    Shuffle,
    /// Named for compatibility with other tools; not implemented
    Random,
}

impl FromStr for DecoyType {
    type Err = DecoyConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(DecoyType::None),
            "reverse" => Ok(DecoyType::Reverse),
            "slide" => Ok(DecoyType::Slide),
            "shuffle" => Ok(DecoyType::Shuffle),
            "random" => Ok(DecoyType::Random),
            _ => Err(DecoyConfigError::InvalidDecoyType(s.to_string())),
        }
    }
}

impl Display for DecoyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecoyType::None => "none",
            DecoyType::Reverse => "reverse",
            DecoyType::Slide => "slide",
            DecoyType::Shuffle => "shuffle",
            DecoyType::Random => "random",
        };
        write!(f, "{}", name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DecoyConfig {
    pub decoy_type: DecoyType,
    /// Upper bound on worker threads; `None` lets rayon decide
    pub max_threads: Option<usize>,
    /// Prefix for decoy accessions and annotation labels
    pub decoy_identifier: String,
}

impl Default for DecoyConfig {
    fn default() -> Self {
        DecoyConfig {
            decoy_type: DecoyType::default(),
            max_threads: None,
            decoy_identifier: DEFAULT_DECOY_IDENTIFIER.to_string(),
        }
    }
}

impl DecoyConfig {
    pub fn new(decoy_type: DecoyType) -> Self {
        DecoyConfig {
            decoy_type,
            ..Default::default()
        }
    }

    pub fn with_max_threads(mut self, max_threads: Option<usize>) -> Self {
        self.max_threads = max_threads;
        self
    }

    pub fn with_identifier(mut self, decoy_identifier: &str) -> Self {
        self.decoy_identifier = decoy_identifier.to_string();
        self
    }
}

#[derive(Error, Debug)]
pub enum DecoyConfigError {
    #[error("Invalid decoy type: {0}. Expected one of none, reverse, slide, shuffle, random")]
    InvalidDecoyType(String),
    #[error("Decoy identifier must not be empty")]
    EmptyIdentifier,
    #[error("Thread count must be at least 1")]
    ZeroThreads,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type DecoyConfigResult<T> = std::result::Result<T, DecoyConfigError>;

impl TryFrom<&Path> for DecoyConfig {
    type Error = DecoyConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: DecoyConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl DecoyConfig {
    pub fn validate(&self) -> DecoyConfigResult<()> {
        if self.decoy_identifier.is_empty() {
            return Err(DecoyConfigError::EmptyIdentifier);
        }
        if self.max_threads == Some(0) {
            return Err(DecoyConfigError::ZeroThreads);
        }
        Ok(())
    }
}
