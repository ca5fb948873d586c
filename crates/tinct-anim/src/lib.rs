//! Tinct Anim: tick-driven color interpolation.
//!
//! An [`AnimationEngine`] keeps a registry of running lerps. The host drives
//! it by calling [`AnimationEngine::advance`] with the frame delta; each task
//! pushes its current color into a caller-provided sink until it reaches its
//! target or is cancelled through its [`LerpHandle`].
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use tinct_anim::AnimationEngine;
//! use tinct_core::Color;
//!
//! let mut engine = AnimationEngine::default();
//! let current = Rc::new(Cell::new(Color::BLACK));
//! let sink = {
//!     let current = Rc::clone(&current);
//!     move |c: Color| current.set(c)
//! };
//! engine.start_lerp(sink, Color::BLACK, Color::WHITE, 1.0);
//!
//! engine.advance(0.5);
//! assert!((current.get().r - 0.5).abs() < 1e-6);
//! engine.advance(0.5);
//! assert_eq!(current.get(), Color::WHITE);
//! assert!(engine.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod sink;
pub mod task;

pub use config::{ConfigError, EngineConfig, MAX_TASK_CAPACITY};
pub use engine::{AnimationEngine, TickSummary};
pub use error::AnimationError;
pub use sink::{ColorSink, ColorSlots, SlotFn};
pub use task::LerpHandle;
