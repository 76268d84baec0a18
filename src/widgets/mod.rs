//! Reusable drawing widgets.
//!
//! Widgets are stateless: they take a draw target plus geometry and render,
//! discarding per-pixel errors. All state lives in the app.

mod heart;
mod progress;

pub use heart::draw_heart_icon;
pub use progress::draw_progress_bar;
