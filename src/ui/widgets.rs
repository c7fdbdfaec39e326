//! Basic UI widgets
//!
//! All widgets resolve their colors through the active `Theme` so a theme
//! replacement is visible on the very next frame.

use macroquad::prelude::*;

use super::{draw_icon_centered, Rect, UiContext};
use crate::theme::Theme;

/// Draw a rounded rectangle (approximated with overlapping rects and circles)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w * 0.5).min(h * 0.5);
    if r <= 0.0 {
        draw_rectangle(x, y, w, h, color);
        return;
    }
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Fill a child panel with the theme's panel background
pub fn fill_panel(rect: &Rect, theme: &Theme) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme.panel_bg);
    if theme.style.border_width > 0.0 {
        draw_rectangle_lines(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            theme.style.border_width,
            theme.button,
        );
    }
}

/// Draw an icon button, returns true if clicked this frame
pub fn icon_button(
    ctx: &mut UiContext,
    rect: Rect,
    icon: char,
    icon_font: Option<&Font>,
    theme: &Theme,
) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = if pressed {
        theme.button_active
    } else if hovered {
        theme.button_hovered
    } else {
        theme.button
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, theme.style.rounding, bg);

    let icon_size = (rect.h * 0.45).min(22.0);
    draw_icon_centered(icon_font, icon, &rect, icon_size, theme.text);

    clicked && !ctx.drag_active()
}

/// Draw a full-width button with an icon and a label ("Add Playlist" style)
pub fn wide_button(
    ctx: &mut UiContext,
    rect: Rect,
    icon: char,
    label: &str,
    icon_font: Option<&Font>,
    text_font: Option<&Font>,
    theme: &Theme,
) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = if pressed {
        theme.button_active
    } else if hovered {
        theme.button_hovered
    } else {
        theme.button
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, theme.style.rounding, bg);

    let font_size = 14.0;
    let icon_size = 14.0;
    let gap = 6.0;
    let text_dims = measure_text(label, text_font, font_size as u16, 1.0);
    let total_w = icon_size + gap + text_dims.width;
    let start_x = rect.x + (rect.w - total_w) * 0.5;

    let icon_rect = Rect::new(start_x, rect.y, icon_size, rect.h);
    draw_icon_centered(icon_font, icon, &icon_rect, icon_size, theme.text);

    let text_y = (rect.y + (rect.h + text_dims.height) * 0.5).round();
    draw_text_ex(
        label,
        (start_x + icon_size + gap).round(),
        text_y,
        TextParams {
            font: text_font,
            font_size: font_size as u16,
            color: theme.text,
            ..Default::default()
        },
    );

    clicked && !ctx.drag_active()
}

/// Horizontal value slider bound to `value` in [0, 1].
/// Returns true if the value changed this frame.
pub fn slider(ctx: &mut UiContext, rect: Rect, value: &mut f32, theme: &Theme) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
    }
    if ctx.mouse.clicked(&rect) && !ctx.drag_active() {
        ctx.start_drag(id);
    }
    let dragging = ctx.is_dragging(id);

    let mut changed = false;
    if dragging {
        let t = ((ctx.mouse.x - rect.x) / rect.w.max(1.0)).clamp(0.0, 1.0);
        if (t - *value).abs() > f32::EPSILON {
            *value = t;
            changed = true;
        }
    }

    // Track with the played portion tinted
    let track_h = 6.0;
    let track = Rect::new(rect.x, rect.y + (rect.h - track_h) * 0.5, rect.w, track_h);
    let radius = theme.style.rounding.min(track_h * 0.5);
    draw_rounded_rect(track.x, track.y, track.w, track.h, radius, theme.frame_bg);
    let filled = track.w * value.clamp(0.0, 1.0);
    if filled > 0.0 {
        draw_rounded_rect(track.x, track.y, filled, track.h, radius, theme.slider_grab);
    }

    // Grab
    let grab_color = if dragging {
        theme.slider_grab_active
    } else {
        theme.slider_grab
    };
    let grab_x = track.x + filled;
    draw_circle(grab_x, track.center_y(), 8.0, grab_color);

    changed
}
