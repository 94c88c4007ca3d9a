//! Excerpt splitting.
//!
//! Copies a stream line by line up to and including the first line that
//! contains a marker, then stops reading. Used to cut a post's teaser at
//! `<!--more-->`.

use std::io::{self, BufRead, Write};

/// Result of one split run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Lines written, including the marker line.
    pub lines: usize,
    /// Whether the marker was seen.
    pub found: bool,
}

/// Echo `reader` to `writer` until (and including) the first line holding
/// `marker`.
///
/// Lines are copied byte for byte with their terminators, so input that is
/// not UTF-8 or lacks a final newline passes through unchanged. Only one
/// line is buffered at a time. Nothing after the marker line is read.
pub fn split_after<R, W>(mut reader: R, mut writer: W, marker: &str) -> io::Result<SplitOutcome>
where
    R: BufRead,
    W: Write,
{
    let marker = marker.as_bytes();
    let mut line = Vec::new();
    let mut outcome = SplitOutcome {
        lines: 0,
        found: false,
    };

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        writer.write_all(&line)?;
        outcome.lines += 1;

        if contains(&line, marker) {
            outcome.found = true;
            break;
        }
    }

    writer.flush()?;
    Ok(outcome)
}

/// Literal substring test on bytes.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MARKER;
    use std::io::{Cursor, Read};

    fn split(input: &[u8], marker: &str) -> (Vec<u8>, SplitOutcome) {
        let mut output = Vec::new();
        let outcome = split_after(input, &mut output, marker).unwrap();
        (output, outcome)
    }

    #[test]
    fn test_stops_after_marker_line() {
        let (output, outcome) = split(b"a\nb\n<!--more-->\nc\n", DEFAULT_MARKER);
        assert_eq!(output, b"a\nb\n<!--more-->\n");
        assert_eq!(outcome, SplitOutcome { lines: 3, found: true });
    }

    #[test]
    fn test_marker_inside_line() {
        let (output, _) = split(b"intro text <!--more--> tail\nrest\n", DEFAULT_MARKER);
        assert_eq!(output, b"intro text <!--more--> tail\n");
    }

    #[test]
    fn test_without_marker_echoes_everything() {
        let input = b"one\ntwo\nthree";
        let (output, outcome) = split(input, DEFAULT_MARKER);
        assert_eq!(output, input);
        assert_eq!(outcome, SplitOutcome { lines: 3, found: false });
    }

    #[test]
    fn test_first_marker_wins() {
        let (output, _) = split(b"x\n--\ny\n--\nz\n", "--");
        assert_eq!(output, b"x\n--\n");
    }

    #[test]
    fn test_marker_on_last_line_without_newline() {
        let (output, outcome) = split(b"a\nend <!--more-->", DEFAULT_MARKER);
        assert_eq!(output, b"a\nend <!--more-->");
        assert!(outcome.found);
    }

    #[test]
    fn test_crlf_preserved() {
        let (output, _) = split(b"a\r\n<!--more-->\r\nb\r\n", DEFAULT_MARKER);
        assert_eq!(output, b"a\r\n<!--more-->\r\n");
    }

    #[test]
    fn test_non_utf8_passthrough() {
        let (output, _) = split(b"\xff\xfe\n<!--more-->\n\x80\n", DEFAULT_MARKER);
        assert_eq!(output, b"\xff\xfe\n<!--more-->\n");
    }

    #[test]
    fn test_empty_input() {
        let (output, outcome) = split(b"", DEFAULT_MARKER);
        assert!(output.is_empty());
        assert_eq!(outcome, SplitOutcome { lines: 0, found: false });
    }

    #[test]
    fn test_remaining_input_is_not_consumed() {
        let mut reader = Cursor::new(b"a\n<!--more-->\nleft over\n".to_vec());
        let mut output = Vec::new();
        split_after(&mut reader, &mut output, DEFAULT_MARKER).unwrap();

        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "left over\n");
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"abc", b"bc"));
        assert!(contains(b"abc", b""));
        assert!(!contains(b"ab", b"abc"));
        assert!(!contains(b"abc", b"cb"));
    }
}
