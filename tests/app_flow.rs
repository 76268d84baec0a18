//! End-to-end frame sequences against a headless simulator display.
//!
//! These tests drive the full `update` contract (clear, input, timeout check,
//! phase rendering) rather than poking the state record directly, so they
//! cover the same path the host exercises.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use heartrate_badge::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use heartrate_badge::{Button, FrameInput, HeartRateApp, Phase};

fn display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

fn press_a() -> FrameInput { FrameInput::single(Button::A) }

#[test]
fn scan_connect_disconnect_cycle() {
    let mut display = display();
    let mut app = HeartRateApp::new();
    app.init();

    // Press A at t=0: scan begins
    assert!(app.update(&mut display, &press_a(), 0));
    assert_eq!(app.state().phase(), Phase::Scanning);
    assert_eq!(app.state().scan_start, 0);

    // Frames without input while the scan runs
    assert!(app.update(&mut display, &FrameInput::none(), 100));
    assert!(app.update(&mut display, &FrameInput::none(), 1000));
    assert_eq!(app.state().phase(), Phase::Scanning, "still scanning before the timeout");

    // Past the 3s timeout: fallback connect with a populated reading
    assert!(app.update(&mut display, &FrameInput::none(), 3001));
    assert_eq!(app.state().phase(), Phase::Connected);
    assert_eq!(app.state().hr_update_time, 3001, "refresh timer seeded at the transition");

    // First reading lands one refresh interval after connecting
    assert!(app.update(&mut display, &FrameInput::none(), 3501));
    assert!(
        (64..=80).contains(&app.state().heart_rate),
        "simulated BPM {} outside [64, 80]",
        app.state().heart_rate
    );

    // Press A while connected: back to idle with the reading cleared
    assert!(app.update(&mut display, &press_a(), 4000));
    assert_eq!(app.state().phase(), Phase::Idle);
    assert_eq!(app.state().heart_rate, 0);
}

#[test]
fn action_button_ignored_mid_scan() {
    let mut display = display();
    let mut app = HeartRateApp::new();

    app.update(&mut display, &press_a(), 0);
    assert_eq!(app.state().phase(), Phase::Scanning);

    // A press mid-scan neither cancels nor restarts the scan
    app.update(&mut display, &press_a(), 1500);
    assert_eq!(app.state().phase(), Phase::Scanning);
    assert_eq!(app.state().scan_start, 0, "scan start unchanged by mid-scan press");
}

#[test]
fn home_button_requests_exit() {
    let mut display = display();
    let mut app = HeartRateApp::new();

    let exit = FrameInput::single(Button::Home);
    assert!(!app.update(&mut display, &exit, 0), "Home press should stop the app");
}

#[test]
fn home_button_wins_over_action_press() {
    let mut display = display();
    let mut app = HeartRateApp::new();

    // Both buttons in one frame: A is handled first, then Home exits
    let mut input = FrameInput::none();
    input.press(Button::A);
    input.press(Button::Home);
    assert!(!app.update(&mut display, &input, 0));
    assert_eq!(app.state().phase(), Phase::Scanning, "A press was still applied");
}

#[test]
fn flags_stay_exclusive_over_long_sequence() {
    let mut display = display();
    let mut app = HeartRateApp::new();

    // Press A every ~700ms over 20 seconds of ticks, checking the invariant
    // after every frame. This walks the machine through several full cycles.
    let mut now = 0u64;
    let mut frame = 0u32;
    while now < 20_000 {
        let input = if frame % 7 == 0 { press_a() } else { FrameInput::none() };
        assert!(app.update(&mut display, &input, now));
        let state = app.state();
        assert!(
            !(state.is_connected && state.is_scanning),
            "flags both true at t={now}"
        );
        assert!(
            state.is_connected || state.heart_rate == 0,
            "stale reading while disconnected at t={now}"
        );
        now += 100;
        frame += 1;
    }
}

#[test]
fn on_exit_resets_from_every_phase() {
    let mut display = display();

    // From Scanning
    let mut app = HeartRateApp::new();
    app.update(&mut display, &press_a(), 0);
    app.on_exit();
    assert_eq!(app.state().phase(), Phase::Idle);
    assert_eq!(app.state().heart_rate, 0);

    // From Connected, with a reading on screen
    let mut app = HeartRateApp::new();
    app.update(&mut display, &press_a(), 0);
    app.update(&mut display, &FrameInput::none(), 3000);
    app.update(&mut display, &FrameInput::none(), 3500);
    assert_eq!(app.state().phase(), Phase::Connected);
    app.on_exit();
    assert!(!app.state().is_connected);
    assert!(!app.state().is_scanning);
    assert_eq!(app.state().heart_rate, 0);
}

#[test]
fn reading_refreshes_at_two_hertz() {
    let mut display = display();
    let mut app = HeartRateApp::new();

    app.update(&mut display, &press_a(), 0);
    app.update(&mut display, &FrameInput::none(), 3000); // connect

    // 60 FPS worth of frames inside one refresh window: timer must not move
    for t in (3001..3500).step_by(16) {
        app.update(&mut display, &FrameInput::none(), t);
        assert_eq!(app.state().hr_update_time, 3000, "no refresh inside the 500ms window");
    }

    app.update(&mut display, &FrameInput::none(), 3500);
    assert_eq!(app.state().hr_update_time, 3500, "refresh at the window boundary");
}
