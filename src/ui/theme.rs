use ratatui::style::Color;

pub const HELIOS_GOLD: Color = Color::Rgb(0xf5, 0xb0, 0x41);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DETAIL_KEY: Color = Color::Rgb(0x7d, 0xb4, 0xf5);
pub const CONSOLE_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

/// Terminal palette color for a grid cell index (0..16).
pub fn palette_color(index: u8) -> Color {
    Color::Indexed(index)
}
