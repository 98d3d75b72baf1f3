//! Runtime settings, read from a TOML file. Every key is optional.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{
    nav::{DEFAULT_THRESHOLD, TieBreak},
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Portfolio dataset to load instead of the embedded one.
    pub data_path: Option<PathBuf>,
    pub tracking: TrackingConfig,
    pub contact: ContactConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub visibility_threshold: f32,
    /// A scroll can bring two sections over the threshold at once. The
    /// most visible one wins unless configured otherwise.
    pub tie_break: TieBreak,
    pub deep_link_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Delay of the simulated delivery.
    pub submit_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    pub splash_ms: u64,
    pub nav_scroll_lock_ms: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_THRESHOLD,
            tie_break: TieBreak::GreatestRatio,
            deep_link_delay_ms: 100,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            splash_ms: 1000,
            nav_scroll_lock_ms: 1000,
        }
    }
}

impl TrackingConfig {
    pub fn deep_link_delay(&self) -> Duration {
        Duration::from_millis(self.deep_link_delay_ms)
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl UiConfig {
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn nav_scroll_lock(&self) -> Duration {
        Duration::from_millis(self.nav_scroll_lock_ms)
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(source).context("Failed to parse config")?;
        config.check()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid config in {:?}", path))
    }

    fn check(&self) -> anyhow::Result<()> {
        let threshold = self.tracking.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            anyhow::bail!(
                "tracking.visibility_threshold must be in (0, 1], got {}",
                threshold
            );
        }
        Ok(())
    }
}
