//! Player state
//!
//! The minimal mutable state behind the transport controls and the playlist
//! panel. Play/pause is a flag and progress a bare fraction - there is no
//! audio engine behind them.

/// Player state, mutated only by action handlers on the UI thread
pub struct PlayerState {
    /// Is playback "active"? (toggles the play/pause icon, nothing else)
    pub playing: bool,
    /// Track position fraction in [0, 1], driven by the progress slider
    pub progress: f32,
    /// Filenames from the last playlist scan, in enumeration order
    pub loaded_files: Vec<String>,
    /// Show the playlist panel's file list?
    pub files_visible: bool,
    /// Highlighted row in the file list
    pub selected_track: Option<usize>,
    /// First visible row in the file list
    pub scroll_row: usize,

    // Static presentation labels (no metadata parsing exists)
    pub track_title: String,
    pub track_artist: String,
    pub elapsed_label: String,
    pub total_label: String,

    /// Transient status message with expiry time
    status_message: Option<(String, f64)>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            playing: false,
            progress: 0.65,
            loaded_files: Vec::new(),
            files_visible: false,
            selected_track: None,
            scroll_row: 0,
            track_title: "Prince".to_string(),
            track_artist: "Ya ystal".to_string(),
            elapsed_label: "2:45".to_string(),
            total_label: "4:20".to_string(),
            status_message: None,
        }
    }

    /// Flip play/pause. A real audio engine would be started or stopped
    /// here; this shell only records the flag.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Set the progress fraction, clamped to [0, 1]
    pub fn set_progress(&mut self, value: f32) {
        self.progress = value.clamp(0.0, 1.0);
    }

    /// Replace the loaded file list wholesale and reveal the panel list
    pub fn set_playlist(&mut self, files: Vec<String>) {
        self.loaded_files = files;
        self.files_visible = true;
        self.selected_track = None;
        self.scroll_row = 0;
    }

    /// Set status message
    pub fn set_status(&mut self, message: &str, duration: f64) {
        let expiry = macroquad::time::get_time() + duration;
        self.status_message = Some((message.to_string(), expiry));
    }

    /// Get current status message if not expired
    pub fn status(&self) -> Option<&str> {
        if let Some((msg, expiry)) = &self.status_message {
            if macroquad::time::get_time() < *expiry {
                return Some(msg);
            }
        }
        None
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
