//! Small shared helpers: console banners, option classification, path joins

use std::path::{Path, PathBuf};

/// Render a fixed-width banner line of `=` characters.
///
/// A non-empty caption is padded with one space on each side and embedded
/// after a leading run of ten markers; the trailing run is sized so the
/// whole line is exactly `length` characters when the caption fits. A
/// caption too long for `length` is never truncated, the line just runs
/// long.
///
/// # Examples
/// ```
/// use sf_core::util::horizontal_line;
/// assert_eq!(horizontal_line("", 20), "====================");
/// assert_eq!(horizontal_line("hi", 20), "========== hi ======");
/// ```
pub fn horizontal_line(caption: &str, length: usize) -> String {
    let mut line = String::from("==========");
    let mut caption_len = 0;
    if !caption.is_empty() {
        let padded = format!(" {} ", caption);
        caption_len = padded.chars().count();
        line.push_str(&padded);
    }
    let fill = length.saturating_sub(caption_len + 10);
    line.push_str(&"=".repeat(fill));
    line
}

/// Classify a command-line token as a flag/option.
///
/// A token is an option when it starts with `--` and, ignoring trailing
/// whitespace, does not end with `=` (a trailing `=` means an assignment
/// still waiting for its value).
pub fn is_option(arg: &str) -> bool {
    arg.starts_with("--") && !arg.trim_end().ends_with('=')
}

/// Join a file name onto a directory path.
pub fn file_in(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
