//! A single in-flight interpolation and its per-tick state machine.
//!
//! ```text
//!            step(dt), elapsed < duration
//!               ┌──────────┐
//!               ▼          │
//!   start ──→ Active ──────┘
//!               │ step(dt), elapsed ≥ duration   → Completed (target written once)
//!               │ engine cancel                   → removed (nothing written)
//! ```
//!
//! Cancellation is a registry removal in the engine, so a cancelled task
//! is dropped instead of carrying a terminal state.

use std::fmt;

use tinct_core::Color;

use crate::sink::{ColorSink, ColorSlots};

/// Opaque reference to a task registered with an engine.
///
/// Only useful for cancellation and status queries. Handles are never
/// reused within one engine, so a stale handle cannot hit a newer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LerpHandle(pub(crate) u64);

impl fmt::Display for LerpHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lerp#{}", self.0)
    }
}

/// Lifecycle of a task while it sits in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskState {
    /// Still interpolating; will be stepped on the next tick.
    Active,
    /// Reached its target. The final value has been written.
    Completed,
}

/// What a task writes into, and between which endpoints.
pub(crate) enum LerpTarget {
    Single {
        sink: Box<dyn ColorSink>,
        from: Color,
        to: Color,
    },
    Batch {
        slots: Box<dyn ColorSlots>,
        from: Vec<Color>,
        to: Vec<Color>,
        /// Reused per-tick output buffer.
        frame: Vec<Color>,
    },
}

impl LerpTarget {
    fn write_fraction(&mut self, t: f32) {
        match self {
            Self::Single { sink, from, to } => sink.set(from.lerp(*to, t)),
            Self::Batch {
                slots,
                from,
                to,
                frame,
            } => {
                frame.clear();
                frame.extend(from.iter().zip(to.iter()).map(|(a, b)| a.lerp(*b, t)));
                slots.write(frame);
            }
        }
    }

    fn write_target(&mut self) {
        match self {
            Self::Single { sink, to, .. } => sink.set(*to),
            Self::Batch { slots, to, .. } => slots.write(to),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Batch { from, .. } => from.len(),
        }
    }
}

pub(crate) struct LerpTask {
    pub(crate) handle: LerpHandle,
    pub(crate) state: TaskState,
    elapsed: f32,
    duration: f32,
    target: LerpTarget,
}

impl LerpTask {
    /// `duration` must already be sanitized (finite or `+inf`, never NaN).
    pub(crate) fn new(handle: LerpHandle, target: LerpTarget, duration: f32) -> Self {
        Self {
            handle,
            state: TaskState::Active,
            elapsed: 0.0,
            duration,
            target,
        }
    }

    /// Advance by `dt` and write this tick's value.
    ///
    /// Once `elapsed` reaches `duration` the exact target is written and the
    /// task moves to [`TaskState::Completed`]. Stepping a task that is not
    /// active does nothing.
    pub(crate) fn step(&mut self, dt: f32) -> TaskState {
        if self.state != TaskState::Active {
            return self.state;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.target.write_target();
            self.state = TaskState::Completed;
        } else {
            self.target.write_fraction(self.elapsed / self.duration);
        }
        self.state
    }

    pub(crate) fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub(crate) fn channel_count(&self) -> usize {
        self.target.len()
    }
}

impl fmt::Debug for LerpTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LerpTask")
            .field("handle", &self.handle)
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("colors", &self.target.len())
            .finish()
    }
}
