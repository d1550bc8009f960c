use std::borrow::Cow;
use std::io::BufRead;

use crate::error::{Error, Result};

/// Read the next line into `buf`.
///
/// The buffer is cleared first. The line terminator is not stored.
/// Returns `false` when the reader is exhausted.
pub fn read_line_bytes(reader: &mut dyn BufRead, buf: &mut Vec<u8>, desc: &str) -> Result<bool> {
    buf.clear();

    let n = reader
        .read_until(b'\n', buf)
        .map_err(|e| Error::io_error(desc, e))?;
    if n == 0 {
        return Ok(false);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    Ok(true)
}

/// Decode a line as UTF-8.
///
/// `line_no` is only used in the error message.
pub fn decode_line(buf: &[u8], lossy: bool, line_no: usize) -> Result<Cow<'_, str>> {
    if lossy {
        return Ok(String::from_utf8_lossy(buf));
    }

    std::str::from_utf8(buf).map(Cow::Borrowed).map_err(|e| {
        Error::Format(format!("Line {} contains invalid UTF-8: {}", line_no, e))
    })
}

/// The word of a trimmed embedding line, `None` for blank lines.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{decode_line, first_token, read_line_bytes};

    #[test]
    fn read_lines_without_terminator() {
        let mut reader = Cursor::new("one\ntwo\r\nthree");
        let mut buf = Vec::new();

        assert!(read_line_bytes(&mut reader, &mut buf, "test").unwrap());
        assert_eq!(buf, b"one");
        assert!(read_line_bytes(&mut reader, &mut buf, "test").unwrap());
        assert_eq!(buf, b"two\r");
        assert!(read_line_bytes(&mut reader, &mut buf, "test").unwrap());
        assert_eq!(buf, b"three");
        assert!(!read_line_bytes(&mut reader, &mut buf, "test").unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_invalid_utf8() {
        let bytes = b"zee\xebn 0.1";
        assert!(decode_line(bytes, false, 3).is_err());
        assert_eq!(decode_line(bytes, true, 3).unwrap(), "zee\u{fffd}n 0.1");
    }

    #[test]
    fn first_token_of_line() {
        assert_eq!(first_token("foo   1 2 3"), Some("foo"));
        assert_eq!(first_token("foo\t1"), Some("foo"));
        assert_eq!(first_token("foo"), Some("foo"));
        assert_eq!(first_token(""), None);
    }
}
