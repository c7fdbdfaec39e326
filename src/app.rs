//! Application state
//!
//! Everything the frame loop reads or mutates lives here and is passed down
//! explicitly - the live theme included. There are no process-wide style or
//! texture globals.

use macroquad::prelude::Texture2D;

use crate::assets::Fonts;
use crate::player::PlayerState;
use crate::playlist::PendingScan;
use crate::theme::{Theme, ThemeEditorState};

/// Top-level state owned by the run loop
pub struct AppState {
    /// Transport + playlist state
    pub player: PlayerState,
    /// The live theme; replaced in whole, never field-by-field
    pub theme: Theme,
    /// Staged hex buffers for the theme editor overlay
    pub theme_editor: ThemeEditorState,
    /// Folder scan in flight, polled once per frame
    pub pending_scan: Option<PendingScan>,
    /// Loaded fonts (each may have fallen back to the built-in font)
    pub fonts: Fonts,
    /// Album art, if it loaded
    pub cover: Option<Texture2D>,
}

impl AppState {
    pub fn new(fonts: Fonts, cover: Option<Texture2D>) -> Self {
        let theme = Theme::light();
        Self {
            player: PlayerState::new(),
            theme_editor: ThemeEditorState::new(&theme),
            theme,
            pending_scan: None,
            fonts,
            cover,
        }
    }

    /// Fold a finished folder scan into the player state. The complete
    /// result arrives through the scan's channel, so the file list is
    /// swapped in one step; a failed scan keeps the previous list.
    pub fn poll_pending_scan(&mut self) {
        let Some(scan) = self.pending_scan.as_mut() else {
            return;
        };
        let Some(result) = scan.poll() else {
            return;
        };
        let folder = scan.path.display().to_string();
        self.pending_scan = None;

        match result {
            Ok(files) => {
                let count = files.len();
                self.player.set_playlist(files);
                self.player
                    .set_status(&format!("Added {} tracks from {}", count, folder), 3.0);
            }
            Err(e) => {
                eprintln!("Playlist scan of {} failed: {}", folder, e);
                self.player.set_status(&format!("Scan failed: {}", e), 4.0);
            }
        }
    }
}
