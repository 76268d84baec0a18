//! Per-frame button input.
//!
//! The host collects buttons that went down since the previous frame and hands
//! them to the app as a [`FrameInput`] snapshot. Only newly-pressed edges are
//! reported; held buttons do not repeat.

use heapless::Vec;

/// Maximum distinct button presses reported in one frame.
const MAX_PRESSES: usize = 4;

/// Physical badge buttons the app reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    /// Primary action button: start scan / disconnect.
    A,
    /// Home button: exit the app.
    Home,
}

/// Buttons newly pressed during the current frame.
#[derive(Clone, Default, Debug)]
pub struct FrameInput {
    pressed: Vec<Button, MAX_PRESSES>,
}

impl FrameInput {
    /// Snapshot with no presses.
    pub const fn none() -> Self { Self { pressed: Vec::new() } }

    /// Record a button press. Presses beyond the per-frame capacity are
    /// silently dropped; duplicates are ignored.
    pub fn press(&mut self, button: Button) {
        if !self.pressed.contains(&button) {
            let _ = self.pressed.push(button);
        }
    }

    /// Convenience constructor for a single press.
    pub fn single(button: Button) -> Self {
        let mut input = Self::none();
        input.press(button);
        input
    }

    /// Was `button` newly pressed this frame?
    pub fn pressed(&self, button: Button) -> bool { self.pressed.contains(&button) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_reports_nothing() {
        let input = FrameInput::none();
        assert!(!input.pressed(Button::A), "no press recorded for A");
        assert!(!input.pressed(Button::Home), "no press recorded for Home");
    }

    #[test]
    fn test_single_press_reported() {
        let input = FrameInput::single(Button::A);
        assert!(input.pressed(Button::A), "A should be reported");
        assert!(!input.pressed(Button::Home), "Home was not pressed");
    }

    #[test]
    fn test_duplicate_press_is_idempotent() {
        let mut input = FrameInput::none();
        input.press(Button::Home);
        input.press(Button::Home);
        assert!(input.pressed(Button::Home));
        assert_eq!(input.pressed.len(), 1, "duplicate press should not grow the set");
    }
}
