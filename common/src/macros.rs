//! User-facing status line macros.
//!
//! These print directly to stdout with a level symbol, independent of the
//! `tracing` diagnostics channel. They are the voice of the tool itself:
//! `success!` for completed operations, `warn!` for recoverable oddities,
//! `error!` for rejected operations.

use colored::{ColoredString, Colorize};

#[doc(hidden)]
pub fn emit(symbol: ColoredString, msg: &str) {
    println!("{symbol} {msg}");
}

#[doc(hidden)]
pub fn info_symbol() -> ColoredString {
    "[i]".blue()
}

#[doc(hidden)]
pub fn success_symbol() -> ColoredString {
    "[+]".green().bold()
}

#[doc(hidden)]
pub fn warn_symbol() -> ColoredString {
    "[*]".yellow().bold()
}

#[doc(hidden)]
pub fn error_symbol() -> ColoredString {
    "[-]".red().bold()
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::info_symbol(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::success_symbol(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::warn_symbol(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::error_symbol(), &format!($($arg)*))
    };
}
