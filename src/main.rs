//! Spin wheel demo
//!
//! Drives a six-slice fortune wheel through a fixed-step frame clock,
//! logging the events a host UI would react to, then dumps one slice's
//! render plan as JSON.

use spinwheel::{Callbacks, Section, SpinWheel, WheelConfig};

/// 120 Hz frame clock, matching a typical animation driver
const FRAME_MS: f32 = 1000.0 / 120.0;

fn fortune_sections() -> Vec<Section> {
    vec![
        Section::new("1", "$100", "#E25B5F"),
        Section::new("2", "Try Again", "#F9A03F"),
        Section::new("3", "$500", "#F7D047"),
        Section::new("4", "Lose Turn", "#9BDE7E"),
        Section::new("5", "$1000", "#4CB5AB"),
        Section::new("6", "Jackpot", "#387D7A").with_description("Grand prize"),
    ]
}

fn run_until_idle(wheel: &mut SpinWheel, callbacks: &mut Callbacks) {
    while wheel.is_spinning() {
        wheel.advance(FRAME_MS);
        callbacks.dispatch(wheel);
    }
}

fn main() {
    env_logger::init();
    log::info!("spinwheel demo starting...");

    let config = WheelConfig {
        size: 320.0,
        ..WheelConfig::default()
    };
    let mut wheel = match SpinWheel::new(fortune_sections(), config) {
        Ok(wheel) => wheel,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut callbacks = Callbacks {
        on_spin_start: Some(Box::new(|| log::info!("knob pressed, wheel spinning"))),
        on_spin_end: Some(Box::new(|section| {
            println!("You landed on: {}", section.title);
        })),
        on_reset: Some(Box::new(|| log::info!("wheel back at start"))),
        on_tick: Some(Box::new(|| log::debug!("click"))),
    };

    // A random spin via the knob, then a rigged one
    wheel.press_knob();
    run_until_idle(&mut wheel, &mut callbacks);

    wheel
        .spin_to_index(5)
        .expect("index 5 exists on a six-slice wheel");
    run_until_idle(&mut wheel, &mut callbacks);

    wheel.reset();
    callbacks.dispatch(&mut wheel);

    // What a renderer would consume for the first slice
    let layout = wheel.layout();
    match serde_json::to_string_pretty(&layout[0]) {
        Ok(json) => println!("\nSlice 0 render plan:\n{json}"),
        Err(err) => log::error!("layout serialization failed: {err}"),
    }
}
