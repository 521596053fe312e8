//! Four-stage loader used to walk through the approval flow.
//!
//! The state enum is authoritative; every transition is mirrored onto a
//! [`Visibility`] board by clearing all loader flags first and then showing
//! the active panel and the dimmer, so at most one panel is ever shown.

use crate::visibility::{SHOW, Visibility};
use serde::{Deserialize, Serialize};

/// Background dimmer shown while any panel is up.
pub const DIMMER_ID: &str = "loader-bg";

/// Loader state. `Idle` means no panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderState {
    #[default]
    Idle,
    Request,
    Approve,
    Fail,
    Success,
}

impl LoaderState {
    /// Panels in cycle order.
    pub const PANELS: [LoaderState; 4] = [
        LoaderState::Request,
        LoaderState::Approve,
        LoaderState::Fail,
        LoaderState::Success,
    ];

    /// Cyclic successor; `Idle` enters the cycle at `Request`.
    pub fn next(self) -> Self {
        match self {
            LoaderState::Idle => LoaderState::Request,
            LoaderState::Request => LoaderState::Approve,
            LoaderState::Approve => LoaderState::Fail,
            LoaderState::Fail => LoaderState::Success,
            LoaderState::Success => LoaderState::Request,
        }
    }

    /// Element id of the panel for this state.
    pub fn panel_id(self) -> Option<&'static str> {
        match self {
            LoaderState::Idle => None,
            LoaderState::Request => Some("request-loader"),
            LoaderState::Approve => Some("approve-loader"),
            LoaderState::Fail => Some("fail-loader"),
            LoaderState::Success => Some("success-loader"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoaderState::Idle => "idle",
            LoaderState::Request => "request",
            LoaderState::Approve => "approve",
            LoaderState::Fail => "fail",
            LoaderState::Success => "success",
        }
    }
}

impl std::fmt::Display for LoaderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loader state machine.
///
/// `generation` is bumped by every operation so a delayed auto-idle can tell
/// whether anything happened since it was scheduled.
#[derive(Debug, Clone, Default)]
pub struct LoaderStepper {
    state: LoaderState,
    generation: u64,
}

impl LoaderStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Jump to `Request` from any state.
    pub fn start(&mut self, board: &mut impl Visibility) {
        self.transition(LoaderState::Request, board);
    }

    /// Advance one step through the cycle.
    pub fn step(&mut self, board: &mut impl Visibility) {
        self.transition(self.state.next(), board);
    }

    /// Jump to `Success`. Returns the generation the auto-idle must be tagged with.
    pub fn finish_success(&mut self, board: &mut impl Visibility) -> u64 {
        self.transition(LoaderState::Success, board)
    }

    /// Hide everything. Safe from any state.
    pub fn hide(&mut self, board: &mut impl Visibility) {
        self.transition(LoaderState::Idle, board);
    }

    /// Hide if no operation happened since `generation` was handed out.
    pub fn auto_idle(&mut self, generation: u64, board: &mut impl Visibility) -> bool {
        if generation != self.generation {
            return false;
        }
        self.hide(board);
        true
    }

    fn transition(&mut self, to: LoaderState, board: &mut impl Visibility) -> u64 {
        for panel in LoaderState::PANELS {
            if let Some(id) = panel.panel_id() {
                board.clear(id, SHOW);
            }
        }
        board.clear(DIMMER_ID, SHOW);

        if let Some(id) = to.panel_id() {
            board.set(id, SHOW);
            board.set(DIMMER_ID, SHOW);
        }
        log::debug!("loader {} -> {}", self.state, to);
        self.state = to;
        self.generation += 1;
        self.generation
    }
}
