mod console_view;
mod dialog;
mod help_dialog;
mod key_hints;
mod palette;
mod spinner;
mod status_bar;
mod step_list;
mod task_panel;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use console_view::ConsoleView;
pub use dialog::{DialogFrame, InstructionBar};
pub use help_dialog::{HelpDialog, KeybindingEntry};
pub use key_hints::{key_hint_spans, render_key_hints, KeyHintBarStyle};
pub use palette::*;
pub use spinner::Spinner;
pub use status_bar::StatusBar;
pub use step_list::StepList;
pub use task_panel::{PanelKind, TaskPanel};

/// Truncate `text` to at most `max_width` terminal columns, adding an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
