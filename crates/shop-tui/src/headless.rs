//! Off-screen rendering.
//!
//! Draws the shop into a [`TestBackend`] instead of a real terminal, for the
//! `render` command and for tests.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::ShopApp;
use crate::TuiError;

/// Render one frame of `app` at its current viewport and return the text.
pub fn render_to_string(app: &ShopApp) -> Result<String, TuiError> {
    let backend = TestBackend::new(app.viewport.columns, app.viewport.rows);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| crate::draw(frame, app))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Convert a buffer to text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_buffer_to_string_trims() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(2, 2, "World", Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\n\n  World");
    }
}
