//! One-shot entrance animation with generation-tagged clearing.

use super::surface::{Animation, ChartRoot};
use std::time::Duration;

/// Applies the entrance animation to freshly drawn charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawAnimator {
    pub name: String,
    pub duration: Duration,
    /// How long after starting the animation its designation is removed.
    pub clear_after: Duration,
}

/// Handle for the pending clear of one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicket {
    pub generation: u64,
    pub clear_after: Duration,
}

impl DrawAnimator {
    /// Start the animation on `root` for draw `generation`.
    ///
    /// The caller schedules [`DrawAnimator::finish`] with the returned ticket.
    pub fn animate_entrance(&self, root: &mut ChartRoot, generation: u64) -> AnimationTicket {
        root.set_animation(Animation {
            name: self.name.clone(),
            duration_ms: self.duration.as_millis() as u64,
        });
        AnimationTicket {
            generation,
            clear_after: self.clear_after,
        }
    }

    /// Remove the animation if `ticket` still belongs to the latest draw.
    ///
    /// Returns `false` for a stale ticket; a newer draw owns the animation now.
    pub fn finish(root: &mut ChartRoot, ticket: AnimationTicket) -> bool {
        if root.generation() != ticket.generation {
            return false;
        }
        root.clear_animation();
        true
    }
}
