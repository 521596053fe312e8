//! Dashboard timing and animation settings.

use crate::chart::DrawAnimator;
use crate::loading_bar::LoadingTiming;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunables for the dashboard. Every field has a default, so a config file
/// only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Animation applied to a chart root on every draw.
    pub animation_name: String,
    pub animation_duration_ms: u64,
    /// Delay before the animation designation is removed again.
    pub animation_clear_delay_ms: u64,
    /// Delay of the demonstration refresh scheduled by `init_charts`.
    pub refresh_delay_ms: u64,
    /// Delay before a successful loader hides itself.
    pub loader_auto_idle_ms: u64,
    pub loading_fade_in_ms: u64,
    pub loading_tick_ms: u64,
    pub loading_settle_ms: u64,
    pub loading_fade_out_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            animation_name: "loadChart".into(),
            animation_duration_ms: 1000,
            animation_clear_delay_ms: 1200,
            refresh_delay_ms: 1500,
            loader_auto_idle_ms: 1000,
            loading_fade_in_ms: 800,
            loading_tick_ms: 85,
            loading_settle_ms: 500,
            loading_fade_out_ms: 1000,
        }
    }
}

impl DashboardConfig {
    /// Read a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn animator(&self) -> DrawAnimator {
        DrawAnimator {
            name: self.animation_name.clone(),
            duration: Duration::from_millis(self.animation_duration_ms),
            clear_after: Duration::from_millis(self.animation_clear_delay_ms),
        }
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn loader_auto_idle(&self) -> Duration {
        Duration::from_millis(self.loader_auto_idle_ms)
    }

    pub fn loading_timing(&self) -> LoadingTiming {
        LoadingTiming {
            fade_in: Duration::from_millis(self.loading_fade_in_ms),
            tick: Duration::from_millis(self.loading_tick_ms),
            settle: Duration::from_millis(self.loading_settle_ms),
            fade_out: Duration::from_millis(self.loading_fade_out_ms),
        }
    }
}
