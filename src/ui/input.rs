//! Input state for UI interaction

use super::Rect;

/// Mouse state sampled once at the top of each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
    pub scroll: f32,        // Scroll wheel delta
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// ID of the widget currently being dragged (if any)
    dragging: Option<u64>,
    /// ID of the widget the mouse is hovering
    hot: Option<u64>,
    /// Counter for generating stable per-frame IDs
    id_counter: u64,
    /// Real mouse state stashed while a modal overlay blocks the background
    saved_mouse: Option<MouseState>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            hot: None,
            id_counter: 0,
            saved_mouse: None,
        }
    }

    /// Generate a unique ID for a widget. Widgets must be drawn in the same
    /// order every frame for IDs to stay stable.
    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Reset at start of frame (call before any UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.id_counter = 0;

        // Drag ends when the button is released
        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    /// Check if this widget is being dragged
    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    /// Check if any widget is being dragged
    pub fn drag_active(&self) -> bool {
        self.dragging.is_some()
    }

    /// Start dragging a widget
    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    /// Set hot widget (hovering)
    pub fn set_hot(&mut self, id: u64) {
        // Only set hot if not dragging something else
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    /// Check if widget is hot
    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }

    /// Block background widgets while a modal overlay is open: the real
    /// mouse is stashed and replaced with an off-screen one.
    pub fn begin_modal(&mut self) {
        if self.saved_mouse.is_none() {
            self.saved_mouse = Some(self.mouse);
            self.mouse = MouseState {
                x: f32::MIN,
                y: f32::MIN,
                ..MouseState::default()
            };
        }
    }

    /// Restore the real mouse so the modal overlay itself receives input
    pub fn end_modal(&mut self) {
        if let Some(mouse) = self.saved_mouse.take() {
            self.mouse = mouse;
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_at(x: f32, y: f32, down: bool) -> MouseState {
        MouseState {
            x,
            y,
            left_down: down,
            ..Default::default()
        }
    }

    #[test]
    fn test_drag_ownership_survives_frames() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(5.0, 5.0, true));
        let id = ctx.next_id();
        ctx.start_drag(id);
        assert!(ctx.is_dragging(id));

        // Still held down next frame: drag persists across begin_frame
        ctx.begin_frame(mouse_at(50.0, 5.0, true));
        assert!(ctx.is_dragging(id));

        // Released: drag cleared
        ctx.begin_frame(mouse_at(50.0, 5.0, false));
        assert!(!ctx.is_dragging(id));
        assert!(!ctx.drag_active());
    }

    #[test]
    fn test_modal_blocks_then_restores_mouse() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(10.0, 10.0, false));
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(ctx.mouse.inside(&rect));

        ctx.begin_modal();
        assert!(!ctx.mouse.inside(&rect));

        ctx.end_modal();
        assert!(ctx.mouse.inside(&rect));
    }

    #[test]
    fn test_hot_blocked_while_dragging_other() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(0.0, 0.0, true));
        let slider = ctx.next_id();
        let button = ctx.next_id();
        ctx.start_drag(slider);
        ctx.set_hot(button);
        assert!(!ctx.is_hot(button));
        ctx.set_hot(slider);
        assert!(ctx.is_hot(slider));
    }
}
