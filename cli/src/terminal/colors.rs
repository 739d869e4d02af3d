use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const MONEY: Color = Color::BrightYellow;
pub const EMAIL: Color = Color::BrightCyan;
pub const IDENT: Color = Color::BrightBlue;
