//! Immediate-mode UI toolkit for the player window
//!
//! Design principles:
//! - Immediate mode (no retained widget tree, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Every widget takes its colors from the active `Theme` - nothing in this
//!   module owns a color of its own
//!
//! Note: a few toolkit helpers are kept even where the player doesn't call
//! them yet.

#![allow(dead_code)]

mod icons;
mod input;
mod rect;
mod text_input;
mod widgets;

pub use icons::*;
pub use input::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
