//! Theme model: named colors + style scalars for every rendered element
//!
//! The live theme is owned by `AppState` and replaced in whole when the
//! theme editor applies - widgets only ever see a fully populated theme, so
//! a frame can never render a mix of old and new fields.

mod editor;
mod hex;

pub use editor::{draw_theme_editor, ThemeEditorAction, ThemeEditorState};
pub use hex::{color_to_hex, parse_hex_color, HexColorError, FALLBACK_COLOR};

use macroquad::prelude::Color;

/// Default light palette, one hex string per color field, in
/// `Theme::COLOR_LABELS` order.
pub const LIGHT_PALETTE: [&str; 10] = [
    "#F2F2F5", // window background
    "#FFFFFF", // panel background
    "#1A1A1A", // text
    "#E6E6EB", // button
    "#D9D9E6", // button hovered
    "#CCCCD9", // button active
    "#F2F2F5", // frame background
    "#A6BFE6", // slider grab
    "#99B3D9", // slider grab active
    "#4D99E6", // accent
];

/// Numeric style parameters applied alongside the colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    pub window_padding: (f32, f32),
    pub frame_padding: (f32, f32),
    pub item_spacing: (f32, f32),
    /// Corner radius for buttons and the slider grab
    pub rounding: f32,
    pub border_width: f32,
    pub scrollbar_rounding: f32,
}

impl StyleParams {
    pub fn light() -> Self {
        Self {
            window_padding: (8.0, 8.0),
            frame_padding: (8.0, 4.0),
            item_spacing: (8.0, 6.0),
            rounding: 4.0,
            border_width: 0.0,
            scrollbar_rounding: 0.0,
        }
    }
}

/// The full set of colors driving the player UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window background
    pub window_bg: Color,
    /// Child/panel background
    pub panel_bg: Color,
    /// Primary text
    pub text: Color,
    /// Button normal
    pub button: Color,
    /// Button hovered
    pub button_hovered: Color,
    /// Button pressed
    pub button_active: Color,
    /// Frame/track background (slider track, input fields)
    pub frame_bg: Color,
    /// Slider grab normal
    pub slider_grab: Color,
    /// Slider grab while dragging
    pub slider_grab_active: Color,
    /// Highlight color for titles and labels
    pub accent: Color,
    /// Style scalars
    pub style: StyleParams,
}

impl Theme {
    /// Editor-facing labels, one per color field, in `colors()` order
    pub const COLOR_LABELS: [&'static str; 10] = [
        "Window",
        "Panel",
        "Text",
        "Button",
        "Button hover",
        "Button active",
        "Frame",
        "Slider grab",
        "Slider drag",
        "Accent",
    ];

    /// The built-in light theme, parsed from `LIGHT_PALETTE`
    pub fn light() -> Self {
        let mut colors = [FALLBACK_COLOR; 10];
        for (slot, hex) in colors.iter_mut().zip(LIGHT_PALETTE) {
            *slot = parse_hex_color(hex).unwrap_or(FALLBACK_COLOR);
        }
        Self::from_colors(colors, StyleParams::light())
    }

    /// Assemble a theme from its ten colors in `COLOR_LABELS` order
    pub fn from_colors(colors: [Color; 10], style: StyleParams) -> Self {
        let [window_bg, panel_bg, text, button, button_hovered, button_active, frame_bg, slider_grab, slider_grab_active, accent] =
            colors;
        Self {
            window_bg,
            panel_bg,
            text,
            button,
            button_hovered,
            button_active,
            frame_bg,
            slider_grab,
            slider_grab_active,
            accent,
            style,
        }
    }

    /// The ten colors in `COLOR_LABELS` order
    pub fn colors(&self) -> [Color; 10] {
        [
            self.window_bg,
            self.panel_bg,
            self.text,
            self.button,
            self.button_hovered,
            self.button_active,
            self.frame_bg,
            self.slider_grab,
            self.slider_grab_active,
            self.accent,
        ]
    }

    /// Dimmed variant of the text color, for secondary labels
    pub fn text_dim(&self) -> Color {
        Color::new(
            self.text.r * 0.4 + 0.24,
            self.text.g * 0.4 + 0.24,
            self.text.b * 0.4 + 0.24,
            self.text.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_in_unit_range(c: Color) -> bool {
        [c.r, c.g, c.b, c.a]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_light_palette_parses_without_fallback() {
        for hex in LIGHT_PALETTE {
            assert!(parse_hex_color(hex).is_ok(), "default palette entry {} must parse", hex);
        }
    }

    #[test]
    fn test_light_theme_colors_valid() {
        let theme = Theme::light();
        for color in theme.colors() {
            assert!(color_in_unit_range(color));
            assert_eq!(color.a, 1.0);
        }
    }

    #[test]
    fn test_from_colors_preserves_order() {
        let theme = Theme::light();
        let rebuilt = Theme::from_colors(theme.colors(), theme.style);
        assert_eq!(rebuilt, theme);
    }

    #[test]
    fn test_replacement_is_wholesale() {
        // Replacing the live theme must swap every governed field at once.
        let mut live = Theme::light();
        let mut colors = [Color::new(0.2, 0.2, 0.2, 1.0); 10];
        colors[9] = Color::new(0.9, 0.1, 0.1, 1.0);
        let replacement = Theme::from_colors(colors, StyleParams::light());
        assert_ne!(live, replacement);

        live = replacement;

        assert_eq!(live.colors(), replacement.colors());
        assert_eq!(live.style, replacement.style);
        assert_eq!(live, replacement);
    }
}
