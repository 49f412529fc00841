use std::fmt::Display;

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 9;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn blank() {
    println!();
}

/// A `⟦ TITLE ⟧` line padded to [`TOTAL_WIDTH`]. Suppressed when quiet.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_width: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_width);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// A dimmed aside. Suppressed when quiet.
pub fn note(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!("{}", msg.bright_black().italic()));
}

pub fn status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

pub fn failure(msg: &str) {
    let prefix: ColoredString = "✗".red().bold();
    print(&format!("{} {}", prefix, msg.red()));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let lead: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    status(format!("{}{} {}", key.color(colors::PRIMARY), lead, value));
}

pub fn tree_head(idx: usize, name: &str) {
    let output: String = format!(
        "{}{}{} {}",
        "[".bright_black(),
        idx.to_string().color(colors::ACCENT),
        "]".bright_black(),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn tree(rows: Vec<(String, ColoredString)>) {
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (i, (key, value)) in rows.iter().enumerate() {
        let last: bool = i + 1 == rows.len();
        let branch: ColoredString = if last {
            "└─".bright_black()
        } else {
            "├─".bright_black()
        };
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centered(msg: &str) {
    let width: usize = UnicodeWidthStr::width(msg);
    let pad: usize = TOTAL_WIDTH.saturating_sub(width) / 2;
    print(&format!("{}{}", " ".repeat(pad), msg.color(colors::TEXT_DEFAULT)));
}
