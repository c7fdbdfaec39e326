//! Theme editor overlay
//!
//! The editor stages one hex-string buffer per color field, independent of
//! the live theme. Nothing touches the live theme until Apply is pressed;
//! Apply hands back a complete replacement theme built from every staged
//! buffer at once.

use macroquad::prelude::*;

use super::{color_to_hex, parse_hex_color, StyleParams, Theme, FALLBACK_COLOR};
use crate::ui::{
    draw_text_input, fill_panel, icon, icon_button, wide_button, Rect, TextInputState, UiContext,
};

/// What the theme editor wants the app to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEditorAction {
    None,
    /// Parse every staged buffer and replace the live theme
    Apply,
    /// Re-seed the staged buffers from the built-in palette
    Reset,
    Close,
}

/// Staged hex buffers for the ten theme colors
pub struct ThemeEditorState {
    pub open: bool,
    /// One buffer per color field, in `Theme::COLOR_LABELS` order
    pub fields: [TextInputState; 10],
    /// Which field has keyboard focus
    pub focused: Option<usize>,
}

impl ThemeEditorState {
    pub fn new(theme: &Theme) -> Self {
        let colors = theme.colors();
        Self {
            open: false,
            fields: std::array::from_fn(|i| TextInputState::new(color_to_hex(colors[i]))),
            focused: None,
        }
    }

    /// Open the editor, staging the current live theme
    pub fn open_with(&mut self, theme: &Theme) {
        self.seed_from(theme);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.set_focus(None);
    }

    /// Overwrite every staged buffer from a theme
    pub fn seed_from(&mut self, theme: &Theme) {
        for (field, color) in self.fields.iter_mut().zip(theme.colors()) {
            field.set_text(color_to_hex(color));
        }
    }

    fn set_focus(&mut self, index: Option<usize>) {
        self.focused = index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = Some(i) == index;
        }
    }

    /// Build the replacement theme from the staged buffers. Unparseable
    /// fields fall back to opaque white; the count of fallbacks is returned
    /// so the caller can surface it.
    pub fn staged_theme(&self, style: StyleParams) -> (Theme, usize) {
        let mut fallbacks = 0;
        let mut colors = [FALLBACK_COLOR; 10];
        for (slot, field) in colors.iter_mut().zip(&self.fields) {
            match parse_hex_color(field.text.trim()) {
                Ok(color) => *slot = color,
                Err(_) => fallbacks += 1,
            }
        }
        (Theme::from_colors(colors, style), fallbacks)
    }
}

const ROW_HEIGHT: f32 = 30.0;
const ROW_GAP: f32 = 6.0;
const SWATCH_SIZE: f32 = 20.0;

/// Draw the theme editor panel. The caller decides what to do with the
/// returned action; drawing never mutates the live theme.
pub fn draw_theme_editor(
    ctx: &mut UiContext,
    screen: Rect,
    state: &mut ThemeEditorState,
    theme: &Theme,
    icon_font: Option<&Font>,
    text_font: Option<&Font>,
) -> ThemeEditorAction {
    let panel = screen.centered(340.0, 470.0);

    // Dim the window behind the overlay
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, Color::new(0.0, 0.0, 0.0, 0.35));
    fill_panel(&panel, theme);

    let mut action = ThemeEditorAction::None;

    // Header: title + close
    let header = panel.slice_top(40.0).pad(8.0);
    draw_text_ex(
        "Theme",
        header.x,
        header.y + 18.0,
        TextParams {
            font: text_font,
            font_size: 18,
            color: theme.accent,
            ..Default::default()
        },
    );
    let close_rect = Rect::new(header.right() - 24.0, header.y, 24.0, 24.0);
    if icon_button(ctx, close_rect, icon::X, icon_font, theme) {
        action = ThemeEditorAction::Close;
    }

    // One row per color field: label, live swatch, hex input
    let body = panel.remaining_after_top(44.0).pad_xy(12.0, 4.0);
    let mut y = body.y;
    let mut clicked_field = None;
    for (i, label) in Theme::COLOR_LABELS.iter().enumerate() {
        let row = Rect::new(body.x, y, body.w, ROW_HEIGHT);

        draw_text_ex(
            label,
            row.x,
            row.center_y() + 4.0,
            TextParams {
                font: text_font,
                font_size: 13,
                color: theme.text,
                ..Default::default()
            },
        );

        // Swatch previews the staged value, not the live theme
        let staged = parse_hex_color(state.fields[i].text.trim());
        let swatch = Rect::new(
            row.x + 118.0,
            row.center_y() - SWATCH_SIZE * 0.5,
            SWATCH_SIZE,
            SWATCH_SIZE,
        );
        draw_rectangle(
            swatch.x,
            swatch.y,
            swatch.w,
            swatch.h,
            staged.unwrap_or(FALLBACK_COLOR),
        );
        // Flag unparseable input without rejecting it
        let outline = if staged.is_ok() { theme.button } else { theme.accent };
        draw_rectangle_lines(swatch.x, swatch.y, swatch.w, swatch.h, 1.0, outline);

        let input_rect = Rect::new(
            swatch.right() + 8.0,
            row.y + 2.0,
            row.right() - swatch.right() - 8.0,
            ROW_HEIGHT - 4.0,
        );
        if ctx.mouse.clicked(&input_rect) {
            clicked_field = Some(i);
        }
        draw_text_input(input_rect, &mut state.fields[i], text_font, 14.0, theme);

        y += ROW_HEIGHT + ROW_GAP;
    }
    if let Some(i) = clicked_field {
        state.set_focus(Some(i));
    } else if ctx.mouse.left_pressed && !ctx.mouse.inside(&panel) {
        state.set_focus(None);
    }

    // Footer: Apply + Reset
    let footer = panel.slice_bottom(46.0).pad_xy(12.0, 8.0);
    let (apply_rect, reset_rect) = footer.split_h(0.5);
    if wide_button(
        ctx,
        apply_rect.pad_xy(4.0, 0.0),
        icon::PALETTE,
        "Apply",
        icon_font,
        text_font,
        theme,
    ) {
        action = ThemeEditorAction::Apply;
    }
    if wide_button(
        ctx,
        reset_rect.pad_xy(4.0, 0.0),
        icon::REFRESH_CW,
        "Reset",
        icon_font,
        text_font,
        theme,
    ) {
        action = ThemeEditorAction::Reset;
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_then_stage_round_trips_live_theme() {
        let live = Theme::light();
        let editor = ThemeEditorState::new(&live);
        let (staged, fallbacks) = editor.staged_theme(live.style);
        assert_eq!(fallbacks, 0);
        assert_eq!(staged, live);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let live = Theme::light();
        let mut editor = ThemeEditorState::new(&live);
        editor.fields[0].set_text("#101010");
        editor.fields[9].set_text("#E64D4D");

        let (staged, fallbacks) = editor.staged_theme(live.style);
        assert_eq!(fallbacks, 0);

        // Every governed field of the replacement matches the staged
        // buffers; untouched fields come through unchanged.
        assert_eq!(color_to_hex(staged.window_bg), "#101010");
        assert_eq!(color_to_hex(staged.accent), "#E64D4D");
        assert_eq!(staged.panel_bg, live.panel_bg);
        assert_eq!(staged.slider_grab_active, live.slider_grab_active);
        assert_eq!(staged.style, live.style);
    }

    #[test]
    fn test_unparseable_fields_fall_back_to_white() {
        let live = Theme::light();
        let mut editor = ThemeEditorState::new(&live);
        editor.fields[2].set_text("oops");
        editor.fields[5].set_text("#12345");

        let (staged, fallbacks) = editor.staged_theme(live.style);
        assert_eq!(fallbacks, 2);
        assert_eq!(staged.text, FALLBACK_COLOR);
        assert_eq!(staged.button_active, FALLBACK_COLOR);
        // Valid fields are unaffected by their neighbors' failures
        assert_eq!(staged.window_bg, live.window_bg);
    }

    #[test]
    fn test_editing_buffers_never_touches_a_theme() {
        // Staging is pure: the editor holds strings, not colors, and the
        // caller's theme only changes when it chooses to assign the staged
        // result.
        let live = Theme::light();
        let mut editor = ThemeEditorState::new(&live);
        editor.fields[0].set_text("#000000");
        let (_staged, _) = editor.staged_theme(live.style);
        assert_eq!(live, Theme::light());
    }

    #[test]
    fn test_reset_reseeds_from_given_theme() {
        let live = Theme::light();
        let mut editor = ThemeEditorState::new(&live);
        editor.fields[3].set_text("junk");
        editor.seed_from(&Theme::light());
        let (staged, fallbacks) = editor.staged_theme(live.style);
        assert_eq!(fallbacks, 0);
        assert_eq!(staged, live);
    }
}
