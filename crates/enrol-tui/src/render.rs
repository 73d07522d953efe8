//! Pure view/render functions for the TUI.
//!
//! This module contains the top-level render dispatch. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::{AppState, Route};
use crate::{login, register};

/// Spinner frames for the submitting indicator.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    match app.route() {
        Route::Register => register::render_register(frame, app),
        Route::Login => login::render_login(frame, app),
    }
}

/// Centers a `width` x `height` rect inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 52, 20);
        assert_eq!(rect, Rect::new(24, 10, 52, 20));

        // Larger than the area: clamped, not out of bounds
        let rect = centered_rect(area, 200, 100);
        assert_eq!(rect, area);
    }
}
