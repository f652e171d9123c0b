//! Host notification hand-off
//!
//! Every side effect destined for the host (spin start/end, boundary ticks,
//! resets) travels through one serialized queue owned by the wheel. The
//! engine never calls host code from the animation-sampling path; it only
//! enqueues, and the host drains on its own execution context. Haptics,
//! audio, and chrome reactions hang off these events outside the engine.

use crate::section::Section;
use crate::wheel::SpinWheel;

/// A notification for the host, in the order it occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// A spin was accepted and the animation started
    SpinStart,
    /// The rotation crossed one slice boundary. Emitted once per boundary
    /// actually crossed, even when a single frame skips several slices.
    Tick,
    /// The animation settled; carries the winning section
    SpinEnd(Section),
    /// The wheel was synchronously returned to its initial orientation
    Reset,
}

/// Optional host callbacks, dispatched from drained events.
///
/// Thin sugar over matching on [`WheelEvent`] directly; hosts that need
/// more context (or want to batch) should drain the queue themselves.
#[derive(Default)]
pub struct Callbacks {
    pub on_spin_start: Option<Box<dyn FnMut()>>,
    pub on_spin_end: Option<Box<dyn FnMut(&Section)>>,
    pub on_reset: Option<Box<dyn FnMut()>>,
    pub on_tick: Option<Box<dyn FnMut()>>,
}

impl Callbacks {
    /// Route one event to its callback, if registered.
    pub fn handle(&mut self, event: &WheelEvent) {
        match event {
            WheelEvent::SpinStart => {
                if let Some(f) = self.on_spin_start.as_mut() {
                    f();
                }
            }
            WheelEvent::Tick => {
                if let Some(f) = self.on_tick.as_mut() {
                    f();
                }
            }
            WheelEvent::SpinEnd(section) => {
                if let Some(f) = self.on_spin_end.as_mut() {
                    f(section);
                }
            }
            WheelEvent::Reset => {
                if let Some(f) = self.on_reset.as_mut() {
                    f();
                }
            }
        }
    }

    /// Drain the wheel's pending events through these callbacks.
    pub fn dispatch(&mut self, wheel: &mut SpinWheel) {
        for event in wheel.drain_events() {
            self.handle(&event);
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_spin_start", &self.on_spin_start.is_some())
            .field("on_spin_end", &self.on_spin_end.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .field("on_tick", &self.on_tick.is_some())
            .finish()
    }
}
