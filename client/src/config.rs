use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::patterns::{Pattern, RandomSeedConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// The seed to start from, overridable on the command line.
    pub pattern: Pattern,

    /// Time between two frames.
    pub interval_millis: u64,

    /// How many frames to show before exiting, forever if unset.
    pub generations: Option<u64>,

    /// Clear the terminal before every frame instead of printing frames below each other.
    pub clear_screen: bool,

    /// Exit once every cell is dead.
    pub stop_when_dead: bool,

    /// Only used by [`Pattern::Random`].
    pub random: RandomSeedConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            interval_millis: 1000,
            generations: None,
            clear_screen: true,
            stop_when_dead: false,
            random: RandomSeedConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_millis)
    }
}
