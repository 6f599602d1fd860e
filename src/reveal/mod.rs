//! Scroll-driven logo reveal
//!
//! Pure state and timing; the browser side implements [`Stage`].

pub mod easing;
pub mod sequencer;

pub use easing::{CubicBezier, Pose, Tween};
pub use sequencer::{
    RevealSequencer, RevealState, ScrollDirection, Stage, Transition, TransitionOutcome,
};
