//! Player window layout
//!
//! Draws the whole window each frame from the current state and reports
//! user input as a `PlayerAction`. Layout is rectangle slicing from the
//! window rect down; all colors come from the live theme.

use macroquad::prelude::*;

use super::{PlayerAction, PlayerState};
use crate::app::AppState;
use crate::theme::{draw_theme_editor, Theme, ThemeEditorAction};
use crate::ui::{
    draw_icon_centered, draw_rounded_rect, fill_panel, icon, icon_button, slider, wide_button,
    Rect, UiContext,
};

const TITLE_BAR_HEIGHT: f32 = 48.0;
const STATUS_BAR_HEIGHT: f32 = 26.0;
const TRANSPORT_HEIGHT: f32 = 90.0;
const PLAYLIST_PANEL_RATIO: f32 = 0.22;
const COVER_SIZE: f32 = 200.0;
const ROW_HEIGHT: f32 = 24.0;

/// Draw one frame of the player UI
pub fn draw_player(ctx: &mut UiContext, screen: Rect, app: &mut AppState) -> PlayerAction {
    let theme = app.theme;
    let mut action = PlayerAction::None;

    // Field borrows: fonts and cover stay shared while player state is
    // mutated below.
    let main_font = app.fonts.main.as_ref();
    let medium_font = app.fonts.medium.as_ref();
    let title_font = app.fonts.title.as_ref();
    let icon_font = app.fonts.icons.as_ref();
    let cover = app.cover.as_ref();

    // The theme editor overlay owns the mouse while it is open
    if app.theme_editor.open {
        ctx.begin_modal();
    }

    // Title bar
    let title_bar = screen.slice_top(TITLE_BAR_HEIGHT);
    let music_rect = Rect::new(title_bar.x + 16.0, title_bar.y, 24.0, title_bar.h);
    draw_icon_centered(icon_font, icon::MUSIC, &music_rect, 20.0, theme.accent);
    draw_text_ex(
        "CatMp3",
        title_bar.x + 48.0,
        title_bar.center_y() + 10.0,
        TextParams {
            font: title_font,
            font_size: 28,
            color: theme.accent,
            ..Default::default()
        },
    );
    let palette_rect = Rect::new(title_bar.right() - 44.0, title_bar.y + 10.0, 28.0, 28.0);
    if icon_button(ctx, palette_rect, icon::PALETTE, icon_font, &theme) {
        action = PlayerAction::OpenThemeEditor;
    }

    // Status line
    let status_bar = screen.slice_bottom(STATUS_BAR_HEIGHT);
    if let Some(message) = app.player.status() {
        draw_text_ex(
            message,
            status_bar.x + 16.0,
            status_bar.center_y() + 4.0,
            TextParams {
                font: main_font,
                font_size: 12,
                color: theme.text_dim(),
                ..Default::default()
            },
        );
    }

    // Content: playlist panel on the left, player panels on the right
    let pad = theme.style.window_padding;
    let content = screen
        .remaining_after_top(TITLE_BAR_HEIGHT)
        .remaining_after_bottom(STATUS_BAR_HEIGHT)
        .pad_xy(pad.0, pad.1);
    let (playlist_rect, right) = content.split_h(PLAYLIST_PANEL_RATIO);
    let spacing = theme.style.item_spacing;
    let main_rect = Rect::new(
        right.x + spacing.0,
        right.y,
        right.w - spacing.0,
        right.h,
    );

    let playlist_action = draw_playlist_panel(
        ctx,
        playlist_rect,
        &mut app.player,
        &theme,
        icon_font,
        main_font,
        medium_font,
    );
    if playlist_action != PlayerAction::None {
        action = playlist_action;
    }

    let transport_rect = main_rect.slice_bottom(TRANSPORT_HEIGHT);
    let now_playing_rect = main_rect.remaining_after_bottom(TRANSPORT_HEIGHT + spacing.1);

    draw_now_playing(
        ctx,
        now_playing_rect,
        &mut app.player,
        &theme,
        main_font,
        medium_font,
        icon_font,
        cover,
    );

    let transport_action = draw_transport(ctx, transport_rect, &app.player, &theme, icon_font);
    if transport_action != PlayerAction::None {
        action = transport_action;
    }

    // Theme editor overlay, drawn on top with the real mouse restored
    if app.theme_editor.open {
        ctx.end_modal();
        let editor_action = draw_theme_editor(
            ctx,
            screen,
            &mut app.theme_editor,
            &theme,
            icon_font,
            main_font,
        );
        match editor_action {
            ThemeEditorAction::Apply => {
                let (staged, fallbacks) = app.theme_editor.staged_theme(theme.style);
                action = PlayerAction::ApplyTheme(staged, fallbacks);
            }
            ThemeEditorAction::Reset => app.theme_editor.seed_from(&Theme::light()),
            ThemeEditorAction::Close => app.theme_editor.close(),
            ThemeEditorAction::None => {}
        }
    }

    action
}

/// Left panel: header, "Add Playlist" button, scanned filenames
fn draw_playlist_panel(
    ctx: &mut UiContext,
    rect: Rect,
    player: &mut PlayerState,
    theme: &Theme,
    icon_font: Option<&Font>,
    main_font: Option<&Font>,
    medium_font: Option<&Font>,
) -> PlayerAction {
    fill_panel(&rect, theme);
    let inner = rect.pad(10.0);
    let mut action = PlayerAction::None;

    draw_text_ex(
        "Playlists",
        inner.x,
        inner.y + 16.0,
        TextParams {
            font: medium_font,
            font_size: 16,
            color: theme.text,
            ..Default::default()
        },
    );
    let sep_y = inner.y + 26.0;
    draw_line(inner.x, sep_y, inner.right(), sep_y, 1.0, theme.button);

    let add_rect = Rect::new(inner.x, sep_y + 8.0, inner.w, 28.0);
    if wide_button(
        ctx,
        add_rect,
        icon::PLUS,
        "Add Playlist",
        icon_font,
        main_font,
        theme,
    ) {
        action = PlayerAction::AddPlaylist;
    }

    if !player.files_visible {
        return action;
    }

    // File list: the rows that fit, scrolled by the wheel
    let list_top = add_rect.bottom() + 10.0;
    let footer_h = 20.0;
    let list = Rect::new(inner.x, list_top, inner.w, inner.bottom() - list_top - footer_h);
    let visible = ((list.h / ROW_HEIGHT).floor() as usize).min(player.loaded_files.len());
    let max_scroll = player.loaded_files.len().saturating_sub(visible);

    if ctx.mouse.inside(&list) {
        if ctx.mouse.scroll < 0.0 {
            player.scroll_row = (player.scroll_row + 1).min(max_scroll);
        } else if ctx.mouse.scroll > 0.0 {
            player.scroll_row = player.scroll_row.saturating_sub(1);
        }
    }
    player.scroll_row = player.scroll_row.min(max_scroll);

    for (index, name) in player
        .loaded_files
        .iter()
        .enumerate()
        .skip(player.scroll_row)
        .take(visible)
    {
        let offset = (index - player.scroll_row) as f32;
        let row = Rect::new(list.x, list.y + offset * ROW_HEIGHT, list.w, ROW_HEIGHT);
        let hovered = ctx.mouse.inside(&row);
        if player.selected_track == Some(index) {
            let tint = Color::new(theme.accent.r, theme.accent.g, theme.accent.b, 0.30);
            draw_rectangle(row.x, row.y, row.w, row.h, tint);
        } else if hovered {
            draw_rectangle(row.x, row.y, row.w, row.h, theme.button_hovered);
        }

        let glyph_rect = Rect::new(row.x + 2.0, row.y, 16.0, row.h);
        draw_icon_centered(
            icon_font,
            icon::MUSIC,
            &glyph_rect,
            11.0,
            theme.text_dim(),
        );
        let label = fit_text(name, row.w - 26.0, main_font, 13);
        draw_text_ex(
            &label,
            row.x + 22.0,
            row.center_y() + 4.0,
            TextParams {
                font: main_font,
                font_size: 13,
                color: theme.text,
                ..Default::default()
            },
        );

        if ctx.mouse.clicked(&row) {
            action = PlayerAction::SelectTrack(index);
        }
    }

    // Scrollbar on the right edge when the list overflows
    if max_scroll > 0 {
        let track = Rect::new(list.right() - 4.0, list.y, 4.0, list.h);
        draw_rounded_rect(
            track.x,
            track.y,
            track.w,
            track.h,
            theme.style.scrollbar_rounding,
            theme.frame_bg,
        );
        let thumb_h = (track.h * visible as f32 / player.loaded_files.len() as f32).max(16.0);
        let thumb_y = track.y + (track.h - thumb_h) * player.scroll_row as f32 / max_scroll as f32;
        draw_rounded_rect(
            track.x,
            thumb_y,
            track.w,
            thumb_h,
            theme.style.scrollbar_rounding,
            theme.slider_grab,
        );
    }

    let footer = format!("{} tracks", player.loaded_files.len());
    draw_text_ex(
        &footer,
        inner.x,
        inner.bottom() - 6.0,
        TextParams {
            font: main_font,
            font_size: 11,
            color: theme.text_dim(),
            ..Default::default()
        },
    );

    action
}

/// Center panel: album art, track labels, progress slider, time labels
fn draw_now_playing(
    ctx: &mut UiContext,
    rect: Rect,
    player: &mut PlayerState,
    theme: &Theme,
    main_font: Option<&Font>,
    medium_font: Option<&Font>,
    icon_font: Option<&Font>,
    cover: Option<&Texture2D>,
) {
    fill_panel(&rect, theme);

    let cover_rect = Rect::new(
        rect.center_x() - COVER_SIZE * 0.5,
        rect.y + (rect.h - COVER_SIZE - 160.0).max(0.0) * 0.3,
        COVER_SIZE,
        COVER_SIZE,
    );
    match cover {
        Some(texture) => {
            draw_texture_ex(
                texture,
                cover_rect.x,
                cover_rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(COVER_SIZE, COVER_SIZE)),
                    ..Default::default()
                },
            );
        }
        None => {
            draw_rectangle(cover_rect.x, cover_rect.y, cover_rect.w, cover_rect.h, theme.frame_bg);
            draw_icon_centered(icon_font, icon::MUSIC, &cover_rect, 48.0, theme.text_dim());
            draw_centered_text(
                "cover not loaded",
                rect.center_x(),
                cover_rect.bottom() - 12.0,
                main_font,
                11,
                theme.text_dim(),
            );
        }
    }

    let title_y = cover_rect.bottom() + 30.0;
    draw_centered_text(
        &player.track_title,
        rect.center_x(),
        title_y,
        medium_font,
        18,
        theme.text,
    );
    draw_centered_text(
        &player.track_artist,
        rect.center_x(),
        title_y + 22.0,
        main_font,
        14,
        theme.text_dim(),
    );

    let slider_rect = Rect::new(rect.x + 30.0, title_y + 36.0, rect.w - 60.0, 24.0);
    let mut value = player.progress;
    if slider(ctx, slider_rect, &mut value, theme) {
        player.set_progress(value);
    }

    let times_y = slider_rect.bottom() + 10.0;
    draw_text_ex(
        &player.elapsed_label,
        slider_rect.x,
        times_y,
        TextParams {
            font: main_font,
            font_size: 12,
            color: theme.text_dim(),
            ..Default::default()
        },
    );
    let total_dims = measure_text(&player.total_label, main_font, 12, 1.0);
    draw_text_ex(
        &player.total_label,
        slider_rect.right() - total_dims.width,
        times_y,
        TextParams {
            font: main_font,
            font_size: 12,
            color: theme.text_dim(),
            ..Default::default()
        },
    );
}

/// Bottom panel: previous, play/pause, next
fn draw_transport(
    ctx: &mut UiContext,
    rect: Rect,
    player: &PlayerState,
    theme: &Theme,
    icon_font: Option<&Font>,
) -> PlayerAction {
    fill_panel(&rect, theme);
    let mut action = PlayerAction::None;

    let button = 50.0;
    let play = 60.0;
    let spacing = theme.style.item_spacing.0;
    let total_w = button * 2.0 + play + spacing * 2.0;
    let mut x = rect.center_x() - total_w * 0.5;
    let cy = rect.center_y();

    let back_rect = Rect::new(x, cy - button * 0.5, button, button);
    if icon_button(ctx, back_rect, icon::SKIP_BACK, icon_font, theme) {
        action = PlayerAction::SkipBack;
    }
    x += button + spacing;

    let play_rect = Rect::new(x, cy - play * 0.5, play, play);
    let play_icon = if player.playing { icon::PAUSE } else { icon::PLAY };
    if icon_button(ctx, play_rect, play_icon, icon_font, theme) {
        action = PlayerAction::TogglePlay;
    }
    x += play + spacing;

    let fwd_rect = Rect::new(x, cy - button * 0.5, button, button);
    if icon_button(ctx, fwd_rect, icon::SKIP_FORWARD, icon_font, theme) {
        action = PlayerAction::SkipForward;
    }

    action
}

/// Draw text horizontally centered on `center_x` with baseline at `y`
fn draw_centered_text(
    text: &str,
    center_x: f32,
    y: f32,
    font: Option<&Font>,
    font_size: u16,
    color: Color,
) {
    let dims = measure_text(text, font, font_size, 1.0);
    draw_text_ex(
        text,
        (center_x - dims.width * 0.5).round(),
        y.round(),
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// Trim text with an ellipsis until it fits `max_width`
fn fit_text(text: &str, max_width: f32, font: Option<&Font>, font_size: u16) -> String {
    if measure_text(text, font, font_size, 1.0).width <= max_width {
        return text.to_string();
    }
    let mut out: String = text.to_string();
    while !out.is_empty() {
        out.pop();
        let candidate = format!("{}…", out);
        if measure_text(&candidate, font, font_size, 1.0).width <= max_width {
            return candidate;
        }
    }
    "…".to_string()
}
