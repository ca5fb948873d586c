//! The animation registry and its tick loop.
//!
//! The engine owns no clock and no thread. The host calls
//! [`AnimationEngine::advance`] once per frame with the elapsed time, and
//! every active task is stepped in registration order. Cancellation is a
//! plain registry removal on the same thread, so no locking is involved.

use tinct_core::Color;

use crate::config::{EngineConfig, MAX_TASK_CAPACITY};
use crate::error::AnimationError;
use crate::sink::{ColorSink, ColorSlots};
use crate::task::{LerpHandle, LerpTarget, LerpTask, TaskState};

/// Outcome of one [`AnimationEngine::advance`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Tasks stepped this tick, including those that completed.
    pub updated: usize,
    /// Tasks that reached their target this tick, in registration order.
    pub completed: Vec<LerpHandle>,
}

/// Registry of in-flight color interpolations.
///
/// Callers receive a [`LerpHandle`] for every task they start; the task
/// itself stays inside the engine until it completes or is cancelled.
#[derive(Debug)]
pub struct AnimationEngine {
    config: EngineConfig,
    tasks: Vec<LerpTask>,
    next_id: u64,
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl AnimationEngine {
    /// Create an empty engine.
    ///
    /// The up-front reservation is capped at [`MAX_TASK_CAPACITY`]; the
    /// registry still grows past it on demand.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            tasks: Vec::with_capacity(config.initial_capacity.min(MAX_TASK_CAPACITY)),
            config,
            next_id: 1,
        }
    }

    /// The configuration this engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Animate a single color from `from` to `to` over `duration` seconds.
    ///
    /// Nothing is written until the next [`advance`](Self::advance). While
    /// `elapsed < duration` the sink receives the linear interpolation; on
    /// the tick that reaches `duration` it receives `to` exactly, once, and
    /// the task is removed. A non-positive (or NaN) duration completes on
    /// the first tick without an intermediate frame.
    pub fn start_lerp(
        &mut self,
        sink: impl ColorSink + 'static,
        from: Color,
        to: Color,
        duration: f32,
    ) -> LerpHandle {
        let target = LerpTarget::Single {
            sink: Box::new(sink),
            from,
            to,
        };
        self.register(target, duration)
    }

    /// Animate a sequence of colors in lockstep, sharing one clock.
    ///
    /// Slot `i` follows `from[i] → to[i]` with the same per-tick rule as
    /// [`start_lerp`](Self::start_lerp).
    ///
    /// # Errors
    /// [`AnimationError::InvalidArgument`] if `from` and `to` differ in
    /// length, or `slots` has fewer entries than `from`. No task is created.
    pub fn start_lerp_batch(
        &mut self,
        slots: impl ColorSlots + 'static,
        from: Vec<Color>,
        to: Vec<Color>,
        duration: f32,
    ) -> Result<LerpHandle, AnimationError> {
        if from.len() != to.len() {
            tracing::warn!(
                "batch lerp rejected: from has {} colors, to has {}",
                from.len(),
                to.len()
            );
            return Err(AnimationError::InvalidArgument(format!(
                "from and to differ in length ({} vs {})",
                from.len(),
                to.len()
            )));
        }
        let slot_count = slots.slot_count();
        if slot_count < from.len() {
            tracing::warn!(
                "batch lerp rejected: {} slots for {} colors",
                slot_count,
                from.len()
            );
            return Err(AnimationError::InvalidArgument(format!(
                "{slot_count} slots cannot hold {} colors",
                from.len()
            )));
        }

        let frame = Vec::with_capacity(from.len());
        let target = LerpTarget::Batch {
            slots: Box::new(slots),
            from,
            to,
            frame,
        };
        Ok(self.register(target, duration))
    }

    fn register(&mut self, target: LerpTarget, duration: f32) -> LerpHandle {
        let handle = LerpHandle(self.next_id);
        self.next_id += 1;

        let duration = if duration.is_nan() { 0.0 } else { duration };
        let task = LerpTask::new(handle, target, duration);
        tracing::debug!(
            "started {handle}: {} color(s) over {duration}s",
            task.channel_count()
        );
        self.tasks.push(task);
        handle
    }

    /// Stop a task immediately. Its sink is never written again.
    ///
    /// Returns `false` (and does nothing) if the handle is unknown, already
    /// completed or already cancelled.
    pub fn cancel(&mut self, handle: LerpHandle) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.handle == handle) else {
            return false;
        };
        let task = self.tasks.remove(index);
        tracing::debug!("cancelled {handle} after {}s", task.elapsed());
        true
    }

    /// Cancel every active task. Returns how many were removed.
    ///
    /// Call this when the owner of the sinks is torn down.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        if count > 0 {
            tracing::debug!("cancelled all {count} active lerp(s)");
        }
        count
    }

    /// Step every active task by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, dt: f32) -> TickSummary {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!("ignoring invalid tick delta {dt}");
            0.0
        };

        let mut summary = TickSummary::default();
        for task in &mut self.tasks {
            summary.updated += 1;
            if task.step(dt) == TaskState::Completed {
                tracing::debug!("completed {}", task.handle);
                summary.completed.push(task.handle);
            }
        }
        self.tasks.retain(|t| t.state == TaskState::Active);

        tracing::trace!(
            "tick {dt}s: {} updated, {} completed, {} active",
            summary.updated,
            summary.completed.len(),
            self.tasks.len()
        );
        summary
    }

    /// Whether `handle` refers to a task that is still running.
    pub fn is_active(&self, handle: LerpHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Handles of all active tasks, in registration order.
    pub fn handles(&self) -> Vec<LerpHandle> {
        self.tasks.iter().map(|t| t.handle).collect()
    }

    /// Number of active tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task is active.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for AnimationEngine {
    fn drop(&mut self) {
        if self.config.warn_on_leaked_tasks && !self.tasks.is_empty() {
            for task in &self.tasks {
                tracing::warn!(
                    "{} still active at engine teardown ({}s elapsed)",
                    task.handle,
                    task.elapsed()
                );
            }
        }
    }
}
