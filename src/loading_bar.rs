//! Top-of-page loading bar, one state object per loading session.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Progress values run 0, 10, .. 100.
const STEP_PERCENT: u32 = 10;
const DONE_AFTER: u32 = 100;

pub const FADE_IN: &str = "fadeIn";
pub const FADE_OUT: &str = "fadeOut";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Hidden,
    FadingIn,
    Filling,
    Settling,
    FadingOut,
}

/// Delays between the loading bar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTiming {
    pub fade_in: Duration,
    pub tick: Duration,
    pub settle: Duration,
    pub fade_out: Duration,
}

/// State of one loading bar session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingBar {
    phase: Phase,
    visible: bool,
    animation: Option<String>,
    progress: u32,
    width_percent: u32,
}

impl LoadingBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn animation(&self) -> Option<&str> {
        self.animation.as_deref()
    }

    /// Width of the filled part, in percent.
    pub fn width_percent(&self) -> u32 {
        self.width_percent
    }

    /// Show the bar and fade it in. Returns the delay before filling starts.
    pub fn start(&mut self, timing: &LoadingTiming) -> Duration {
        *self = Self {
            phase: Phase::FadingIn,
            visible: true,
            animation: Some(FADE_IN.to_string()),
            ..Self::default()
        };
        timing.fade_in
    }

    /// Run the next step. Returns the delay to the following step, or `None`
    /// once the bar is hidden and reset.
    pub fn tick(&mut self, timing: &LoadingTiming) -> Option<Duration> {
        match self.phase {
            Phase::Hidden => None,
            Phase::FadingIn | Phase::Filling => {
                self.phase = Phase::Filling;
                if self.progress <= DONE_AFTER {
                    self.width_percent = self.progress;
                    self.progress += STEP_PERCENT;
                    Some(timing.tick)
                } else {
                    self.phase = Phase::Settling;
                    Some(timing.settle)
                }
            }
            Phase::Settling => {
                self.phase = Phase::FadingOut;
                self.animation = Some(FADE_OUT.to_string());
                Some(timing.fade_out)
            }
            Phase::FadingOut => {
                *self = Self::default();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> LoadingTiming {
        LoadingTiming {
            fade_in: Duration::from_millis(800),
            tick: Duration::from_millis(85),
            settle: Duration::from_millis(500),
            fade_out: Duration::from_millis(1000),
        }
    }

    #[test]
    fn fills_in_ten_percent_steps_then_resets() {
        let t = timing();
        let mut bar = LoadingBar::new();
        assert_eq!(bar.start(&t), t.fade_in);
        assert_eq!(bar.animation(), Some(FADE_IN));

        let mut widths = Vec::new();
        while bar.tick(&t) == Some(t.tick) {
            widths.push(bar.width_percent());
        }
        assert_eq!(widths, (0..=100).step_by(10).collect::<Vec<u32>>());
        assert_eq!(bar.phase(), Phase::Settling);

        assert_eq!(bar.tick(&t), Some(t.fade_out));
        assert_eq!(bar.animation(), Some(FADE_OUT));
        assert_eq!(bar.tick(&t), None);
        assert_eq!(bar, LoadingBar::default());
        assert!(!bar.is_visible());
    }
}
