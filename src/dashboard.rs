//! Chart refresh orchestration and delayed task dispatch.
//!
//! [`Dashboard`] owns every mounted [`ChartTarget`], the loader, the loading
//! bar sessions and the [`Timeline`] of delayed work. Delayed work is plain
//! [`Task`] data; each task carries the generation it was scheduled for and
//! does nothing if that generation has been superseded when it fires.

use crate::chart::{self, AnimationTicket, ChartTarget, DrawAnimator};
use crate::config::DashboardConfig;
use crate::error::{ChartError, Result};
use crate::loader::{LoaderState, LoaderStepper};
use crate::loading_bar::LoadingBar;
use crate::models::{EMPLOYEE, LabelSet, SIGNS, SSH, Series};
use crate::schedule::{Scheduler, Timeline};
use crate::visibility::FlagBoard;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::time::Duration;

/// Values used by the delayed refresh `init_charts` schedules.
pub const REFRESH_SAMPLE: [f64; 4] = [0.0, 2.0, 2.0, 6.0];

pub type SessionId = u64;

/// Delayed work queued on the dashboard timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Remove a chart's entrance animation if the draw is still current.
    ClearAnimation { key: String, ticket: AnimationTicket },
    /// Redraw a chart with new data.
    Redraw {
        key: String,
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// Hide a successful loader unless it was touched since.
    LoaderAutoIdle { generation: u64 },
    /// Next step of a loading bar session.
    LoadingTick { session: SessionId },
}

/// Outcome of a batch of chart draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Charts drawn, with their new draw generation.
    pub drawn: Vec<(String, u64)>,
    pub failed: Vec<(String, ChartError)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    animator: DrawAnimator,
    charts: BTreeMap<String, ChartTarget>,
    /// Last draw generation handed out per key; survives remounts.
    generations: AHashMap<String, u64>,
    board: FlagBoard,
    loader: LoaderStepper,
    loading: AHashMap<SessionId, LoadingBar>,
    next_session: SessionId,
    timeline: Timeline<Task>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            animator: config.animator(),
            config,
            charts: BTreeMap::new(),
            generations: AHashMap::new(),
            board: FlagBoard::new(),
            loader: LoaderStepper::new(),
            loading: AHashMap::new(),
            next_session: 0,
            timeline: Timeline::new(),
        }
    }

    /// A dashboard with empty `employee`, `ssh` and `signs` charts mounted.
    pub fn with_default_charts(config: DashboardConfig) -> Self {
        let mut dash = Self::new(config);
        for key in [EMPLOYEE, SSH, SIGNS] {
            dash.mount(key, ChartTarget::new());
        }
        dash
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Mount `target` under `key`, returning any target it replaces.
    ///
    /// The target's generation is reset to 0, which no draw ever uses, so
    /// clears still pending for an earlier target under `key` miss it.
    pub fn mount(&mut self, key: &str, mut target: ChartTarget) -> Option<ChartTarget> {
        target.root.set_generation(0);
        self.charts.insert(key.to_string(), target)
    }

    pub fn unmount(&mut self, key: &str) -> Option<ChartTarget> {
        self.charts.remove(key)
    }

    pub fn target(&self, key: &str) -> Option<&ChartTarget> {
        self.charts.get(key)
    }

    /// Mounted charts in key order.
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartTarget)> {
        self.charts.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn board(&self) -> &FlagBoard {
        &self.board
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.len()
    }

    /// Draw one chart from scratch and start its entrance animation.
    ///
    /// Input is validated before anything is touched; on error the chart is
    /// left exactly as it was and the error is logged. Returns the new draw
    /// generation.
    pub fn draw_chart<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        values: &[f64],
        key: &str,
    ) -> Result<u64> {
        self.try_draw_chart(labels, values, key).inspect_err(|e| {
            log::error!("chart `{}` not drawn: {}", key, e);
        })
    }

    fn try_draw_chart<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        values: &[f64],
        key: &str,
    ) -> Result<u64> {
        let labels = LabelSet::new(labels)?;
        let series = Series::new(values)?;
        let target = self
            .charts
            .get_mut(key)
            .ok_or_else(|| ChartError::MissingTarget {
                key: key.to_string(),
            })?;

        let last = self.generations.entry(key.to_string()).or_default();
        *last += 1;
        let generation = *last;
        chart::redraw(target, &labels, &series, generation);
        let ticket = self.animator.animate_entrance(&mut target.root, generation);
        self.timeline.after(
            ticket.clear_after,
            Task::ClearAnimation {
                key: key.to_string(),
                ticket,
            },
        );
        log::debug!(
            "drew `{}` generation {} max {}",
            key,
            generation,
            series.max()
        );
        Ok(generation)
    }

    /// Draw the `employee`, `ssh` and `signs` charts against one label set,
    /// then schedule a refresh of `employee` with [`REFRESH_SAMPLE`].
    ///
    /// A failing chart does not stop the others.
    pub fn init_charts<S: AsRef<str>>(
        &mut self,
        labels: &[S],
        employees: &[f64],
        sshs: &[f64],
        signs: &[f64],
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for (key, values) in [(EMPLOYEE, employees), (SSH, sshs), (SIGNS, signs)] {
            match self.draw_chart(labels, values, key) {
                Ok(generation) => report.drawn.push((key.to_string(), generation)),
                Err(e) => report.failed.push((key.to_string(), e)),
            }
        }
        log::info!(
            "initialized charts: {} drawn, {} failed",
            report.drawn.len(),
            report.failed.len()
        );

        self.timeline.after(
            self.config.refresh_delay(),
            Task::Redraw {
                key: EMPLOYEE.to_string(),
                labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
                values: REFRESH_SAMPLE.to_vec(),
            },
        );
        report
    }

    pub fn loader_state(&self) -> LoaderState {
        self.loader.state()
    }

    pub fn loader_start(&mut self) {
        self.loader.start(&mut self.board);
    }

    pub fn loader_step(&mut self) {
        self.loader.step(&mut self.board);
    }

    /// Show the success panel and schedule the automatic hide.
    pub fn loader_finish_success(&mut self) {
        let generation = self.loader.finish_success(&mut self.board);
        self.timeline.after(
            self.config.loader_auto_idle(),
            Task::LoaderAutoIdle { generation },
        );
    }

    pub fn loader_hide(&mut self) {
        self.loader.hide(&mut self.board);
    }

    /// Start a new loading bar session.
    pub fn start_loading_bar(&mut self) -> SessionId {
        let session = self.next_session;
        self.next_session += 1;
        let mut bar = LoadingBar::new();
        let delay = bar.start(&self.config.loading_timing());
        self.loading.insert(session, bar);
        self.timeline.after(delay, Task::LoadingTick { session });
        session
    }

    /// State of a running loading bar session; `None` once it has finished.
    pub fn loading_bar(&self, session: SessionId) -> Option<&LoadingBar> {
        self.loading.get(&session)
    }

    /// Move time forward by `dt`, running every task that comes due.
    /// Returns the number of tasks run.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let until = self.timeline.now() + dt;
        let mut fired = 0;
        while let Some(task) = self.timeline.pop_due(until) {
            self.dispatch(task);
            fired += 1;
        }
        self.timeline.advance_to(until);
        fired
    }

    /// Run tasks until nothing is pending. Returns the number of tasks run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.timeline.next_due() {
            if let Some(task) = self.timeline.pop_due(due) {
                self.dispatch(task);
                fired += 1;
            }
        }
        fired
    }

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::ClearAnimation { key, ticket } => match self.charts.get_mut(&key) {
                Some(target) => {
                    if !DrawAnimator::finish(&mut target.root, ticket) {
                        log::debug!(
                            "stale animation clear for `{}` (generation {})",
                            key,
                            ticket.generation
                        );
                    }
                }
                None => log::debug!("animation clear for unmounted chart `{}`", key),
            },
            Task::Redraw {
                key,
                labels,
                values,
            } => {
                // errors are logged by draw_chart
                let _ = self.draw_chart(&labels, &values, &key);
            }
            Task::LoaderAutoIdle { generation } => {
                if !self.loader.auto_idle(generation, &mut self.board) {
                    log::debug!("stale loader auto-idle (generation {})", generation);
                }
            }
            Task::LoadingTick { session } => {
                let timing = self.config.loading_timing();
                let Some(bar) = self.loading.get_mut(&session) else {
                    return;
                };
                match bar.tick(&timing) {
                    Some(delay) => self.timeline.after(delay, Task::LoadingTick { session }),
                    None => {
                        self.loading.remove(&session);
                        log::debug!("loading session {} finished", session);
                    }
                }
            }
        }
    }
}
