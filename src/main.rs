//! Desktop host for the heart-rate monitor app (simulator mode).
//!
//! Opens an SDL window via `embedded-graphics-simulator`, translates keyboard
//! input into badge buttons, and drives the app lifecycle at ~50 FPS with a
//! monotonic millisecond tick.
//!
//! # Controls
//!
//! | Button | Key      | Action                       |
//! |--------|----------|------------------------------|
//! | A      | `A`      | Start scan / disconnect      |
//! | Home   | `Escape` | Exit the app                 |
//!
//! Key repeat is ignored so holding a key counts as one press.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heartrate_badge::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use heartrate_badge::{Button, FrameInput, HeartRateApp};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Heart Rate Monitor", &output_settings);

    let mut app = HeartRateApp::new();
    app.init();

    // Monotonic millisecond tick, zero at app start
    let start = Instant::now();

    'frames: loop {
        let frame_start = Instant::now();
        let mut input = FrameInput::none();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'frames,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so a held key is a single press
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => input.press(Button::A),
                        Keycode::Escape => input.press(Button::Home),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = start.elapsed().as_millis() as u64;
        if !app.update(&mut display, &input, now) {
            break;
        }

        window.update(&display);

        // Hold the target frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    app.on_exit();
}
