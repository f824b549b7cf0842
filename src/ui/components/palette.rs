//! Fixed color palette shared by the visualizer widgets.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);
pub const ACCENT_WARNING: Color = Color::Rgb(229, 192, 123);
pub const ACCENT_MICROTASK: Color = Color::Rgb(198, 120, 221);
pub const ACCENT_MACROTASK: Color = Color::Rgb(209, 154, 102);

pub const TEXT_BRIGHT: Color = Color::Rgb(230, 230, 230);
pub const TEXT_PRIMARY: Color = Color::Rgb(200, 204, 212);
pub const TEXT_SECONDARY: Color = Color::Rgb(171, 178, 191);
pub const TEXT_MUTED: Color = Color::Rgb(127, 132, 142);
pub const TEXT_FAINT: Color = Color::Rgb(92, 99, 112);

pub const BORDER_DEFAULT: Color = Color::Rgb(62, 68, 81);
pub const STATUS_BAR_BG: Color = Color::Rgb(33, 37, 43);
pub const KEY_HINT_BG: Color = Color::Rgb(44, 49, 58);
pub const SELECTED_BG: Color = Color::Rgb(44, 62, 80);
