//! JSON output formatting.
//!
//! Documents are emitted on a single line with `", "` between items and `": "` after keys, and
//! every character outside printable ASCII is written as a `\uXXXX` escape. This keeps the files
//! and stdout produced by `solc-helpers` byte-compatible with the scripts that consumed them
//! before.

use serde::Serialize;
use std::io::{self, Write};

/// A [`serde_json::ser::Formatter`] that writes single line, space separated, ASCII-only JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedAsciiFormatter;

impl serde_json::ser::Formatter for SpacedAsciiFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serializes `value` into `writer` using [`SpacedAsciiFormatter`].
pub fn to_writer<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let mut ser = serde_json::Serializer::with_formatter(writer, SpacedAsciiFormatter);
    value.serialize(&mut ser)
}

/// Serializes `value` into a `String` using [`SpacedAsciiFormatter`].
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    to_writer(&mut buf, value)?;
    // the formatter only ever writes ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
