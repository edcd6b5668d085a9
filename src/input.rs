use winit::event::{ElementState, MouseButton};

/// Tracks the pointer between frames and turns left-button presses into
/// one-shot click events.
#[derive(Debug, Default)]
pub struct InputHandler {
    cursor: Option<(f64, f64)>,
    pending_click: Option<(i32, i32)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return;
        }
        // Presses before the first CursorMoved have no position to map.
        if let Some((x, y)) = self.cursor {
            self.pending_click = Some((x.floor() as i32, y.floor() as i32));
        }
    }

    /// Returns the press recorded since the last call, if any.
    pub fn take_click(&mut self) -> Option<(i32, i32)> {
        self.pending_click.take()
    }
}
