//! Lucide icon support
//!
//! Uses the Lucide icon font for crisp vector icons at any size.

use macroquad::prelude::*;

/// Lucide icon codepoints used by the player
pub mod icon {
    // Transport
    pub const PLAY: char = '\u{e13c}';
    pub const PAUSE: char = '\u{e131}';
    pub const SKIP_BACK: char = '\u{e15f}';
    pub const SKIP_FORWARD: char = '\u{e160}';

    // Playlist panel
    pub const PLUS: char = '\u{e13d}';
    pub const MUSIC: char = '\u{e122}';
    pub const LIST_MUSIC: char = '\u{e10b}';
    pub const FOLDER_OPEN: char = '\u{e247}';

    // Theme editor
    pub const PALETTE: char = '\u{e12f}';
    pub const REFRESH_CW: char = '\u{e145}'; // reset to defaults
    pub const X: char = '\u{e183}';
}

/// Draw a Lucide icon centered in a rect
pub fn draw_icon_centered(font: Option<&Font>, icon: char, rect: &super::Rect, size: f32, color: Color) {
    let text = icon.to_string();

    // Icon fonts have roughly square glyphs where width ≈ height ≈ font size,
    // so centering on the font size is close enough.
    let icon_size = size;

    let x = rect.x + (rect.w - icon_size) * 0.5;

    // Text baseline sits at the bottom of the glyph
    let y = rect.y + (rect.h + icon_size) * 0.5;

    // Round to integer pixels to avoid blurry subpixel rendering
    draw_text_ex(
        &text,
        x.round(),
        y.round(),
        TextParams {
            font,
            font_size: size as u16,
            color,
            ..Default::default()
        },
    );
}
