//! The imperative wheel handle
//!
//! `SpinWheel` owns the whole rotation state and is the single writer to
//! it: commands, frame advancement, and event draining all go through
//! `&mut self`, so no two updates can interleave and no locks are needed.
//! Host-side effects only ever leave through the event queue.

use std::collections::HashSet;
use std::collections::VecDeque;

use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::events::WheelEvent;
use crate::layout::{SliceLayout, layout_sections};
use crate::section::Section;
use crate::spin::{RotationController, TickDetector, pointer_index};

/// An interactive spin wheel: labeled slices, a timed spin animation, and
/// boundary tick events.
///
/// The host drives it imperatively: `spin` / `spin_to_index` / `reset`,
/// then `advance` from its frame clock and `drain_events` on its own
/// execution context.
#[derive(Debug)]
pub struct SpinWheel {
    sections: Vec<Section>,
    config: WheelConfig,
    controller: RotationController,
    ticks: TickDetector,
    events: VecDeque<WheelEvent>,
}

impl SpinWheel {
    /// Validate sections and config and build the wheel at its initial
    /// orientation.
    pub fn new(sections: Vec<Section>, config: WheelConfig) -> Result<Self, WheelError> {
        if sections.is_empty() {
            return Err(WheelError::InvalidConfig("section list is empty".into()));
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(WheelError::InvalidConfig(format!(
                    "duplicate section id `{}`",
                    section.id
                )));
            }
        }
        let n = sections.len();
        if let Some(index) = config.winning_index
            && index >= n
        {
            return Err(WheelError::InvalidConfig(format!(
                "winning index {index} out of range for {n} sections"
            )));
        }

        let initial_angle = config.initial_rotation.resolve(n)?;
        let controller = RotationController::new(n, initial_angle, &config);
        let ticks = TickDetector::new(n, initial_angle);
        log::debug!("wheel created: {n} sections, initial angle {initial_angle:.1}");
        Ok(Self {
            sections,
            config,
            controller,
            ticks,
            events: VecDeque::new(),
        })
    }

    /// Spin toward the rigged `winning_index` if configured, else a
    /// uniformly random slice. No-op while spinning or disabled; the
    /// request is dropped, not queued.
    pub fn spin(&mut self) {
        if self.busy("spin") {
            return;
        }
        let target = self
            .config
            .winning_index
            .unwrap_or_else(|| self.controller.random_index());
        self.start(target);
    }

    /// Spin toward an explicit slice, ignoring `winning_index`.
    ///
    /// Out-of-range targets fail with `InvalidIndex` and leave the state
    /// untouched; a busy or disabled wheel silently drops the request.
    pub fn spin_to_index(&mut self, index: usize) -> Result<(), WheelError> {
        if index >= self.sections.len() {
            return Err(WheelError::InvalidIndex {
                index,
                len: self.sections.len(),
            });
        }
        if !self.busy("spin_to_index") {
            self.start(index);
        }
        Ok(())
    }

    fn busy(&self, command: &str) -> bool {
        if self.controller.is_spinning() {
            log::debug!("{command} ignored: already spinning");
            return true;
        }
        if self.config.disabled {
            log::debug!("{command} ignored: wheel disabled");
            return true;
        }
        false
    }

    fn start(&mut self, target: usize) {
        log::info!("spin started toward `{}`", self.sections[target].id);
        self.events.push_back(WheelEvent::SpinStart);
        self.controller.begin_spin(target);
    }

    /// Advance the animation by `dt_ms` of frame-clock time. Emits one
    /// `Tick` per slice boundary crossed this frame and `SpinEnd` on the
    /// frame the wheel settles.
    pub fn advance(&mut self, dt_ms: f32) {
        if !self.controller.is_spinning() {
            return;
        }
        let completed = self.controller.advance(dt_ms);
        let crossings = self.ticks.sample(self.controller.current_angle());
        for _ in 0..crossings {
            self.events.push_back(WheelEvent::Tick);
        }
        if let Some(index) = completed {
            let section = self.sections[index].clone();
            log::info!("spin settled on `{}`", section.id);
            self.events.push_back(WheelEvent::SpinEnd(section));
        }
    }

    /// Synchronously cancel any in-flight spin and restore the initial
    /// orientation. No animation, no ticks, and no completion may be
    /// observed afterward - a queued-but-undrained `SpinEnd` is purged too.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.ticks.resync(self.controller.current_angle());
        self.events
            .retain(|event| !matches!(event, WheelEvent::SpinEnd(_)));
        self.events.push_back(WheelEvent::Reset);
        log::info!("wheel reset");
    }

    /// Drain pending host notifications, oldest first. This is the single
    /// hand-off point between the engine and host-side effects.
    pub fn drain_events(&mut self) -> impl Iterator<Item = WheelEvent> + '_ {
        self.events.drain(..)
    }

    /// Current unbounded rotation in degrees; the host applies this as the
    /// global wheel orientation when rendering.
    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.controller.current_angle()
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.controller.is_spinning()
    }

    /// The slice index currently aligned with the pointer.
    pub fn pointer_index(&self) -> usize {
        pointer_index(self.controller.current_angle(), self.sections.len())
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Whether the knob/chrome collaborator should render as disabled.
    pub fn knob_disabled(&self) -> bool {
        self.controller.is_spinning() || self.config.disabled
    }

    /// Knob press trigger; identical to `spin()`.
    pub fn press_knob(&mut self) {
        self.spin();
    }

    /// Render plan for every slice. Orientation-independent; pair with
    /// [`current_angle`](Self::current_angle) when drawing.
    pub fn layout(&self) -> Vec<SliceLayout> {
        layout_sections(&self.sections, &self.config)
    }
}
