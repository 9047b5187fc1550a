//! Terminal hosts for the engine.
mod blocking;
mod cooperative;

pub use blocking::BlockingHost;
pub use cooperative::CooperativeHost;

/// Drop a trailing `\n` or `\r\n`.
fn strip_newline(mut line: String) -> String {
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    line
}

#[cfg(test)]
mod tests {
    use super::strip_newline;

    #[test]
    fn strips_line_endings_only() {
        assert_eq!(strip_newline("3\n".into()), "3");
        assert_eq!(strip_newline("3\r\n".into()), "3");
        assert_eq!(strip_newline(" 3 ".into()), " 3 ");
        assert_eq!(strip_newline(String::new()), "");
    }
}
