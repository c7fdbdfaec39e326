//! Single-line text input used by the theme editor's hex fields

use macroquad::prelude::*;

use super::Rect;
use crate::theme::Theme;

/// State for a text input field
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index, always on a char boundary)
    pub cursor: usize,
    /// Blink timer for the caret
    pub blink_timer: f32,
    /// Whether the input has focus
    pub focused: bool,
}

impl TextInputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            blink_timer: 0.0,
            focused: false,
        }
    }

    /// Replace the content and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Move cursor one character left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor = prev;
        }
    }

    /// Move cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character after the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    /// Handle keyboard input for the focused field, returns true if the text
    /// changed
    pub fn handle_input(&mut self) -> bool {
        let old_text = self.text.clone();
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            self.move_left();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Home) {
            self.move_home();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::End) {
            self.move_end();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
            self.blink_timer = 0.0;
        }

        while let Some(ch) = get_char_pressed() {
            // Printable characters only
            if ch >= ' ' && ch != '\u{7f}' {
                self.insert_char(ch);
                self.blink_timer = 0.0;
            }
        }

        self.text != old_text
    }
}

/// Draw a text input field, handling keyboard input when focused.
/// Returns true if the text changed.
pub fn draw_text_input(
    rect: Rect,
    state: &mut TextInputState,
    font: Option<&Font>,
    font_size: f32,
    theme: &Theme,
) -> bool {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme.frame_bg);
    let border = if state.focused {
        theme.accent
    } else {
        theme.button
    };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

    let changed = if state.focused {
        state.handle_input()
    } else {
        false
    };

    let text_x = rect.x + theme.style.frame_padding.0;
    let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;
    draw_text_ex(
        &state.text,
        text_x,
        text_y,
        TextParams {
            font,
            font_size: font_size as u16,
            color: theme.text,
            ..Default::default()
        },
    );

    // Blinking caret
    if state.focused && (state.blink_timer % 1.0) < 0.5 {
        let before_cursor = &state.text[..state.cursor];
        let cursor_x = text_x + measure_text(before_cursor, font, font_size as u16, 1.0).width;
        draw_line(
            cursor_x,
            rect.y + 5.0,
            cursor_x,
            rect.y + rect.h - 5.0,
            1.5,
            theme.text,
        );
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut state = TextInputState::new("#F2F2F");
        state.insert_char('5');
        assert_eq!(state.text, "#F2F2F5");
        state.backspace();
        state.backspace();
        assert_eq!(state.text, "#F2F2");
        assert_eq!(state.cursor, state.text.len());
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = TextInputState::new("#AB");
        state.move_home();
        assert_eq!(state.cursor, 0);
        state.move_right();
        assert_eq!(state.cursor, 1);
        state.insert_char('X');
        assert_eq!(state.text, "#XAB");
        state.move_end();
        assert_eq!(state.cursor, 4);
        state.move_left();
        state.delete();
        assert_eq!(state.text, "#XA");
    }

    #[test]
    fn test_utf8_boundaries() {
        let mut state = TextInputState::new("#αβ");
        state.move_left();
        state.backspace();
        assert_eq!(state.text, "#β");
        state.move_home();
        state.delete();
        assert_eq!(state.text, "β");
    }

    #[test]
    fn test_set_text_resets_cursor() {
        let mut state = TextInputState::new("#FFFFFF");
        state.move_home();
        state.set_text("#1A1A1A");
        assert_eq!(state.cursor, "#1A1A1A".len());
    }
}
