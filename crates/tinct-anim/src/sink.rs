//! Destinations for animated colors.
//!
//! The engine never knows where a color ends up. A single animation pushes
//! into a [`ColorSink`] (any `FnMut(Color)` qualifies), a batch pushes into a
//! [`ColorSlots`] sequence that it overwrites front to back every tick.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::Mutex;
use tinct_core::Color;

/// Receives one color per tick.
pub trait ColorSink {
    /// Push the current value.
    fn set(&mut self, color: Color);
}

impl<F: FnMut(Color)> ColorSink for F {
    fn set(&mut self, color: Color) {
        self(color)
    }
}

/// An indexed sequence of colors written as a whole each tick.
pub trait ColorSlots {
    /// Number of writable slots.
    fn slot_count(&self) -> usize;

    /// Overwrite the leading slots with `colors`, in order.
    ///
    /// Implementations write `min(slot_count, colors.len())` entries.
    fn write(&mut self, colors: &[Color]);
}

impl ColorSlots for Rc<RefCell<Vec<Color>>> {
    fn slot_count(&self) -> usize {
        self.borrow().len()
    }

    fn write(&mut self, colors: &[Color]) {
        copy_prefix(&mut self.borrow_mut(), colors);
    }
}

impl ColorSlots for Arc<Mutex<Vec<Color>>> {
    fn slot_count(&self) -> usize {
        self.lock().len()
    }

    fn write(&mut self, colors: &[Color]) {
        copy_prefix(&mut self.lock(), colors);
    }
}

fn copy_prefix(slots: &mut [Color], colors: &[Color]) {
    for (slot, &color) in slots.iter_mut().zip(colors) {
        *slot = color;
    }
}

/// Adapts a closure over `&[Color]` into [`ColorSlots`] with a fixed slot
/// count.
pub struct SlotFn<F> {
    count: usize,
    f: F,
}

impl<F: FnMut(&[Color])> SlotFn<F> {
    /// Wrap `f`, advertising `count` slots.
    pub fn new(count: usize, f: F) -> Self {
        Self { count, f }
    }
}

impl<F: FnMut(&[Color])> ColorSlots for SlotFn<F> {
    fn slot_count(&self) -> usize {
        self.count
    }

    fn write(&mut self, colors: &[Color]) {
        let n = self.count.min(colors.len());
        (self.f)(&colors[..n]);
    }
}

impl<F> std::fmt::Debug for SlotFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotFn").field("count", &self.count).finish_non_exhaustive()
    }
}
