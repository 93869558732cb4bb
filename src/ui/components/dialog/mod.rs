//! Dialog components for TUI

mod base;
mod toast;

pub use base::{render_dialog, DialogConfig, DialogPosition};
pub use toast::render_toast;
