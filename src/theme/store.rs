use ratatui::style::Color;

use super::types::Theme;

/// Catppuccin Mocha, the only palette the UI ships with.
const MOCHA: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    surface2: Color::Rgb(0x58, 0x5b, 0x70),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// Return the active palette.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
