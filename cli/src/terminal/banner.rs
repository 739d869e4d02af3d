use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
  ___  ___  _    _    ___   _   _    _
 | _ \/ _ \| |  | |  / __| /_\ | |  | |
 |   / (_) | |__| |_| (__ / _ \| |__| |__
 |_|_\\___/|____|____\___/_/ \_\____|____|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
    print::centerln(&format!("{}", "course registration manager".bright_black()));
    print::fat_separator();
}
