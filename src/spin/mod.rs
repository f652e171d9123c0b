//! Rotation state machine
//!
//! All spin logic lives here and must stay deterministic:
//! - Externally clocked (the host frame loop supplies elapsed time)
//! - Seeded RNG only
//! - Single writer; no host callbacks fire from the sampling path

pub mod controller;
pub mod ticks;

pub use controller::RotationController;
pub use ticks::{TickDetector, pointer_index};
