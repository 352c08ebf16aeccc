pub mod keypad;
pub mod panel;
pub mod style;

pub use keypad::{KEYPAD_WIDTH, render_keypad};
pub use panel::render_panel;
