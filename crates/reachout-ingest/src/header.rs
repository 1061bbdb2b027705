//! Header-row detection for exports with preamble content

use std::borrow::Cow;

/// Maximum number of leading lines scanned for the header row.
///
/// Bounded so a malformed multi-megabyte file without a header does not
/// cost a full scan; anything past this window falls back to line 0.
const HEADER_SCAN_WINDOW: usize = 10;

/// Drop any metadata lines that precede the real header row.
///
/// Scans at most the first [`HEADER_SCAN_WINDOW`] lines for the first line
/// containing both `"First Name"` and `"Last Name"` and returns the text
/// from that line onward. When no header is found in the window, the text
/// is returned unchanged, the best-effort behavior for already-clean input.
pub(crate) fn strip_preamble(raw_text: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = raw_text.lines().collect();

    let header_row = lines
        .iter()
        .take(HEADER_SCAN_WINDOW)
        .position(|line| line.contains("First Name") && line.contains("Last Name"))
        .unwrap_or(0);

    if header_row == 0 {
        Cow::Borrowed(raw_text)
    } else {
        Cow::Owned(lines[header_row..].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_returned_unchanged() {
        let raw = "First Name,Last Name,Company\nJane,Doe,Acme";
        assert!(matches!(strip_preamble(raw), Cow::Borrowed(_)));
    }

    #[test]
    fn test_preamble_dropped() {
        let raw = "Notes:\n\"When exporting, some fields may be missing\"\n\n\
                   First Name,Last Name,Company\nJane,Doe,Acme";
        let stripped = strip_preamble(raw);
        assert!(stripped.starts_with("First Name"));
        assert!(stripped.contains("Jane,Doe,Acme"));
    }

    #[test]
    fn test_header_past_window_falls_back_to_line_zero() {
        let mut raw = "filler\n".repeat(10);
        raw.push_str("First Name,Last Name\nJane,Doe");
        // Header is on line 10, one past the scan window
        assert!(strip_preamble(&raw).starts_with("filler"));
    }

    #[test]
    fn test_no_header_at_all_falls_back_to_line_zero() {
        let raw = "a,b,c\n1,2,3";
        assert_eq!(strip_preamble(raw), raw);
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "exported on 2025-01-01\r\nFirst Name,Last Name\r\nJane,Doe";
        let stripped = strip_preamble(raw);
        assert!(stripped.starts_with("First Name"));
    }
}
