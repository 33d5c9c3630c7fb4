use std::{fmt::Write, panic::Location};

use chrono::{DateTime, Datelike, Local, Timelike, Utc};

use super::flags::FormatFlags;

/// Builds one output line: header, message, trailing newline.
///
/// Layout is `prefix date time file:line: message`, with the prefix moved
/// in front of the message when `MSG_PREFIX` is set. Each header part is
/// only present when its flag asks for it.
pub fn format_line(
    prefix: &str,
    flags: FormatFlags,
    now: DateTime<Utc>,
    location: &Location<'_>,
    msg: &str,
) -> String {
    let mut out = String::with_capacity(prefix.len() + msg.len() + 48);

    if !flags.contains(FormatFlags::MSG_PREFIX) {
        out.push_str(prefix);
    }

    if flags.wants_timestamp() {
        if flags.contains(FormatFlags::UTC) {
            push_timestamp(&mut out, flags, &now);
        } else {
            push_timestamp(&mut out, flags, &now.with_timezone(&Local));
        }
    }

    if flags.wants_location() {
        let file = if flags.contains(FormatFlags::SHORT_FILE) {
            short_file(location.file())
        } else {
            location.file()
        };
        let _ = write!(out, "{}:{}: ", file, location.line());
    }

    if flags.contains(FormatFlags::MSG_PREFIX) {
        out.push_str(prefix);
    }

    out.push_str(msg);
    if !msg.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn push_timestamp<T: Datelike + Timelike>(out: &mut String, flags: FormatFlags, t: &T) {
    if flags.contains(FormatFlags::DATE) {
        let _ = write!(out, "{:04}/{:02}/{:02} ", t.year(), t.month(), t.day());
    }
    if flags.contains(FormatFlags::TIME) || flags.contains(FormatFlags::MICROSECONDS) {
        let _ = write!(out, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
        if flags.contains(FormatFlags::MICROSECONDS) {
            // nanosecond() exceeds 1e9 during a leap second
            let _ = write!(out, ".{:06}", (t.nanosecond() / 1_000) % 1_000_000);
        }
        out.push(' ');
    }
}

fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap() + chrono::Duration::microseconds(123_123)
    }

    #[track_caller]
    fn here() -> &'static Location<'static> {
        Location::caller()
    }

    #[test]
    fn no_flags_is_prefix_and_message() {
        let line = format_line("Info: ", FormatFlags::NONE, at(), here(), "hello");
        assert_eq!(line, "Info: hello\n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        let line = format_line("Info: ", FormatFlags::NONE, at(), here(), "hello\n");
        assert_eq!(line, "Info: hello\n");
    }

    #[test]
    fn utc_date_time_and_micros() {
        let flags = FormatFlags::STD | FormatFlags::MICROSECONDS | FormatFlags::UTC;
        let line = format_line("Debug: ", flags, at(), here(), "x");
        assert_eq!(line, "Debug: 2009/01/23 01:23:23.123123 x\n");
    }

    #[test]
    fn micros_without_time_still_prints_clock() {
        let flags = FormatFlags::MICROSECONDS | FormatFlags::UTC;
        let line = format_line("", flags, at(), here(), "x");
        assert_eq!(line, "01:23:23.123123 x\n");
    }

    #[test]
    fn short_file_overrides_long_file() {
        let loc = here();
        let flags = FormatFlags::LONG_FILE | FormatFlags::SHORT_FILE;
        let line = format_line("Error: ", flags, at(), loc, "boom");
        assert_eq!(line, format!("Error: format.rs:{}: boom\n", loc.line()));
    }

    #[test]
    fn long_file_keeps_the_path() {
        let loc = here();
        let line = format_line("", FormatFlags::LONG_FILE, at(), loc, "m");
        assert_eq!(line, format!("{}:{}: m\n", loc.file(), loc.line()));
    }

    #[test]
    fn msg_prefix_moves_prefix_after_header() {
        let flags = FormatFlags::DATE | FormatFlags::UTC | FormatFlags::MSG_PREFIX;
        let line = format_line("Warning: ", flags, at(), here(), "careful");
        assert_eq!(line, "2009/01/23 Warning: careful\n");
    }

    #[test]
    fn short_file_handles_both_separators() {
        assert_eq!(short_file("src/core/format.rs"), "format.rs");
        assert_eq!(short_file("src\\core\\format.rs"), "format.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }
}
