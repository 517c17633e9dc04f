//! Formatting utilities for display values.

/// Format a backend RFC 3339 timestamp for the file table.
///
/// `2025-09-01T10:04:05.123456+02:00` becomes `2025-09-01 10:04:05`. The
/// wall-clock time is shown as sent; input that does not look like a
/// timestamp is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once(['T', ' ']) else {
        return raw.to_string();
    };

    let is_date = date.len() == 10
        && date
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    let clock = time.get(..8).unwrap_or("");
    let is_clock = clock.len() == 8
        && clock
            .char_indices()
            .all(|(i, c)| if i == 2 || i == 5 { c == ':' } else { c.is_ascii_digit() });

    if is_date && is_clock {
        format!("{} {}", date, clock)
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-09-01T10:04:05Z"), "2025-09-01 10:04:05");
        assert_eq!(
            format_timestamp("2025-09-01T10:04:05.123456+02:00"),
            "2025-09-01 10:04:05"
        );
        assert_eq!(format_timestamp("2025-09-01 10:04:05"), "2025-09-01 10:04:05");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp("2025-9-1T10:04"), "2025-9-1T10:04");
    }
}
