//! Logo ⇄ content state machine
//!
//! Transitions are async and resolve when their last step is done. Only one
//! transition runs at a time: a trigger that arrives while one is in
//! progress is dropped, not queued.

use std::cell::Cell;

use super::easing::{Pose, Tween};
use crate::settings::RevealSettings;

/// Which view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Full-screen logo with the scroll prompt
    #[default]
    Logo,
    /// Token information panel
    Content,
}

/// A requested state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    RevealContent,
    RevealLogo,
}

/// Result of asking for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Completed,
    /// Another transition was running
    Dropped,
    /// Nothing to do in the current state
    Skipped,
}

/// Vertical scroll direction between two consecutive scroll events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// The rendering side driven by the sequencer
#[allow(async_fn_in_trait)]
pub trait Stage {
    /// Apply a pose immediately
    fn set_pose(&self, pose: Pose);
    /// Play a tween to completion
    async fn animate(&self, tween: Tween);
    async fn sleep(&self, ms: u32);
    /// Make a view visible ahead of its entry animation, leaving the other as is
    fn prepare(&self, state: RevealState);
    /// Switch the visible view
    fn show(&self, state: RevealState);
    fn scroll_to_content(&self);
    fn scroll_to_top(&self);
}

/// Clears the busy flag when the transition ends or is dropped midway
struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct RevealSequencer {
    settings: RevealSettings,
    state: Cell<RevealState>,
    pose: Cell<Pose>,
    busy: Cell<bool>,
    last_scroll_y: Cell<f64>,
}

impl RevealSequencer {
    pub fn new(settings: RevealSettings) -> Self {
        Self {
            settings,
            state: Cell::new(RevealState::Logo),
            pose: Cell::new(Pose::NATURAL),
            busy: Cell::new(false),
            last_scroll_y: Cell::new(0.0),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Current logo pose
    pub fn pose(&self) -> Pose {
        self.pose.get()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        if self.busy.replace(true) {
            None
        } else {
            Some(BusyGuard(&self.busy))
        }
    }

    fn enlarged(&self) -> Pose {
        Pose::enlarged(self.settings.enlarged_scale)
    }

    fn tween(&self, from: Pose, to: Pose) -> Tween {
        Tween {
            from,
            to,
            duration_ms: self.settings.duration_ms,
            easing: self.settings.easing,
        }
    }

    /// Record a scroll offset and decide whether it triggers a transition.
    ///
    /// Equal offsets count as upward, matching a "not increasing" test.
    pub fn on_scroll(&self, y: f64) -> Option<Transition> {
        let direction = if y > self.last_scroll_y.get() {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_scroll_y.set(y);

        match (direction, self.state.get()) {
            (ScrollDirection::Down, RevealState::Logo) if y > self.settings.content_threshold => {
                Some(Transition::RevealContent)
            }
            (ScrollDirection::Up, RevealState::Content) if y <= self.settings.top_threshold => {
                Some(Transition::RevealLogo)
            }
            _ => None,
        }
    }

    pub async fn run(&self, transition: Transition, stage: &impl Stage) -> TransitionOutcome {
        match transition {
            Transition::RevealContent => self.reveal_content(stage).await,
            Transition::RevealLogo => self.reveal_logo(stage).await,
        }
    }

    /// Blow the logo up and fade it out, then switch to the content panel
    pub async fn reveal_content(&self, stage: &impl Stage) -> TransitionOutcome {
        if self.state.get() != RevealState::Logo {
            return TransitionOutcome::Skipped;
        }
        let Some(_guard) = self.try_begin() else {
            log::debug!("Reveal already running, dropping content trigger");
            return TransitionOutcome::Dropped;
        };
        log::debug!("Revealing content");

        let target = self.enlarged();
        stage.animate(self.tween(self.pose.get(), target)).await;
        self.pose.set(target);

        self.state.set(RevealState::Content);
        stage.show(RevealState::Content);

        stage.sleep(self.settings.settle_ms).await;
        stage.scroll_to_content();
        TransitionOutcome::Completed
    }

    /// Snap the logo to the enlarged pose and shrink it back into place
    pub async fn reveal_logo(&self, stage: &impl Stage) -> TransitionOutcome {
        let Some(_guard) = self.try_begin() else {
            log::debug!("Reveal already running, dropping logo trigger");
            return TransitionOutcome::Dropped;
        };
        log::debug!("Revealing logo");

        let start = self.enlarged();
        self.pose.set(start);
        stage.set_pose(start);
        stage.prepare(RevealState::Logo);
        stage.sleep(self.settings.reset_delay_ms).await;

        stage.animate(self.tween(start, Pose::NATURAL)).await;
        self.pose.set(Pose::NATURAL);

        self.state.set(RevealState::Logo);
        stage.show(RevealState::Logo);
        stage.scroll_to_top();
        TransitionOutcome::Completed
    }

    /// Establish the first rendered pose once translations are ready.
    ///
    /// Only acts while the logo is showing.
    pub async fn settle_initial(&self, stage: &impl Stage) -> TransitionOutcome {
        if self.state.get() != RevealState::Logo {
            return TransitionOutcome::Skipped;
        }
        if self.settings.replay_initial {
            return self.reveal_logo(stage).await;
        }

        let Some(_guard) = self.try_begin() else {
            return TransitionOutcome::Dropped;
        };
        self.pose.set(Pose::NATURAL);
        stage.set_pose(Pose::NATURAL);
        stage.show(RevealState::Logo);
        TransitionOutcome::Completed
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(RevealSettings::default())
    }
}
