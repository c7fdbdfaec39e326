//! Player actions
//!
//! Draw functions report what the user did; this handler mutates state.
//! The transport arms are the seam where a real audio engine or playlist
//! navigator would be called.

use crate::app::AppState;
use crate::playlist::scan_async;
use crate::theme::Theme;

/// What the player UI wants to happen this frame
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    None,
    /// Flip play/pause
    TogglePlay,
    /// Jump to the previous track (no playlist navigation exists yet)
    SkipBack,
    /// Jump to the next track (no playlist navigation exists yet)
    SkipForward,
    /// Pick a folder and scan it for audio files
    AddPlaylist,
    /// Highlight a row in the playlist panel
    SelectTrack(usize),
    /// Open the theme editor, staging the live theme
    OpenThemeEditor,
    /// Replace the live theme; carries how many staged fields fell back
    ApplyTheme(Theme, usize),
}

/// Apply a player action to the app state
pub fn handle_player_action(app: &mut AppState, action: PlayerAction) {
    match action {
        PlayerAction::None => {}

        PlayerAction::TogglePlay => {
            // Audio engine seam: start/stop would happen here
            app.player.toggle_play();
        }

        PlayerAction::SkipBack => {
            // Playlist navigation seam
            app.player.set_status("Previous track", 1.5);
        }

        PlayerAction::SkipForward => {
            // Playlist navigation seam
            app.player.set_status("Next track", 1.5);
        }

        PlayerAction::AddPlaylist => {
            // Blocking native dialog; cancelling leaves everything untouched
            if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                app.player
                    .set_status(&format!("Scanning {}", folder.display()), 10.0);
                app.pending_scan = Some(scan_async(folder));
            }
        }

        PlayerAction::SelectTrack(index) => {
            if index < app.player.loaded_files.len() {
                app.player.selected_track = Some(index);
            }
        }

        PlayerAction::OpenThemeEditor => {
            app.theme_editor.open_with(&app.theme);
        }

        PlayerAction::ApplyTheme(theme, fallbacks) => {
            // One whole-struct assignment between frames: the renderer can
            // never see a half-replaced theme.
            app.theme = theme;
            if fallbacks > 0 {
                app.player.set_status(
                    &format!("Theme applied ({} invalid fields set to white)", fallbacks),
                    4.0,
                );
            } else {
                app.player.set_status("Theme applied", 2.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Fonts;

    fn test_app() -> AppState {
        AppState::new(
            Fonts {
                main: None,
                medium: None,
                title: None,
                icons: None,
            },
            None,
        )
    }

    #[test]
    fn test_toggle_play_round_trips() {
        let mut app = test_app();
        assert!(!app.player.playing);
        handle_player_action(&mut app, PlayerAction::TogglePlay);
        assert!(app.player.playing);
        handle_player_action(&mut app, PlayerAction::TogglePlay);
        assert!(!app.player.playing);
    }

    #[test]
    fn test_select_track_ignores_out_of_range() {
        let mut app = test_app();
        app.player.set_playlist(vec!["a.mp3".into(), "c.wav".into()]);
        handle_player_action(&mut app, PlayerAction::SelectTrack(5));
        assert_eq!(app.player.selected_track, None);
        handle_player_action(&mut app, PlayerAction::SelectTrack(1));
        assert_eq!(app.player.selected_track, Some(1));
    }

    #[test]
    fn test_open_theme_editor_stages_live_theme() {
        let mut app = test_app();
        handle_player_action(&mut app, PlayerAction::OpenThemeEditor);
        assert!(app.theme_editor.open);
        let (staged, fallbacks) = app.theme_editor.staged_theme(app.theme.style);
        assert_eq!(fallbacks, 0);
        assert_eq!(staged, app.theme);
    }
}
