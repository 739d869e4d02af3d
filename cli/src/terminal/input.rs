use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::terminal::colors;

/// Prints a prompt and reads one line from stdin, trimmed.
///
/// Returns `None` once stdin is closed, which the menu treats as a request
/// to exit.
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    print!(
        "{} {} ",
        label.color(colors::PRIMARY),
        "›".color(colors::SEPARATOR)
    );
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
