//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the full visualizer screen into a test buffer and converts the
//! output to strings for assertions.

use loopscope::ui::{view, AppState};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `state` and return the terminal holding it
pub fn render_state(state: &AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| view::draw(f, state))
        .expect("Failed to draw frame");
    terminal
}

/// Convert a buffer to text, one line per row, trailing spaces trimmed
pub fn buffer_to_trimmed_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| row_text(buffer, area, y).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of row `y` restricted to the columns of `area`
pub fn row_text(buffer: &Buffer, area: Rect, y: u16) -> String {
    (area.x..area.x.saturating_add(area.width))
        .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
        .collect()
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_trimmed_string(buffer).contains(text)
}

/// Assert that the rendered screen contains `expected`, dumping it otherwise
pub fn assert_screen_contains(buffer: &Buffer, expected: &str) {
    let actual = buffer_to_trimmed_string(buffer);
    assert!(
        actual.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        actual
    );
}

/// Row index of the first line containing `text`
pub fn find_row(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area;
    (area.y..area.y + area.height).find(|&y| row_text(buffer, area, y).contains(text))
}
