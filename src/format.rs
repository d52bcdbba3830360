use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::FormatError;
use crate::locate::{line_and_character, offset_for_position};
use crate::options::FormatOptions;

/// Reformats JSON into its canonical tab-indented form.
///
/// A `Formatter` holds a [`FormatOptions`] and exposes the per-source entry
/// points: [`reformat`](Self::reformat) for in-memory text,
/// [`format_stream`](Self::format_stream) for stdin-style sources, and
/// [`format_file`](Self::format_file) for real files (the only place the
/// `write_in_place` option applies).
///
/// # Example
///
/// ```rust
/// use jsonfmt::Formatter;
///
/// let formatter = Formatter::new();
/// let output = formatter.reformat(r#"{"a":1}"#).unwrap();
/// assert_eq!(output, "{\n\t\"a\": 1\n}");
/// ```
#[derive(Debug, Default)]
pub struct Formatter {
    pub options: FormatOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Parses `input` as a single generic JSON value and re-encodes it
    /// canonically: one tab per nesting level, a space after each colon, no
    /// trailing newline. Object keys come out in serde_json's default order,
    /// so the result is a deterministic function of the parsed value and
    /// reformatting canonical text is a no-op.
    ///
    /// # Errors
    ///
    /// [`FormatError::Syntax`] with a resolved (line, character) location for
    /// malformed input; [`FormatError::Serialize`] if re-encoding fails.
    pub fn reformat(&self, input: &str) -> Result<String, FormatError> {
        let value: Value =
            serde_json::from_str(input).map_err(|err| syntax_error(input, err))?;
        let bytes = canonical_bytes(&value)?;
        // Canonical output of a decoded Value is valid UTF-8.
        String::from_utf8(bytes).map_err(|err| {
            FormatError::io(
                "canonical output is not UTF-8",
                std::io::Error::new(std::io::ErrorKind::InvalidData, err),
            )
        })
    }

    /// Formats one stream: reads `source` to the end, reformats, and writes
    /// the canonical bytes to `sink` only when they differ from the input.
    ///
    /// There is no file to rewrite here, so `write_in_place` is deliberately
    /// a no-op for streams.
    pub fn format_stream<R, W>(&self, source: &mut R, sink: &mut W) -> Result<(), FormatError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut src = String::new();
        source
            .read_to_string(&mut src)
            .map_err(|err| FormatError::io("cannot read input", err))?;

        let out = self.reformat(&src)?;
        if out != src {
            sink.write_all(out.as_bytes())
                .map_err(|err| FormatError::io("cannot write output", err))?;
        }
        Ok(())
    }

    /// Formats one file. The file handle is scoped to the read; nothing stays
    /// open across the parse and the compare.
    ///
    /// When the canonical bytes equal the file's current bytes, nothing is
    /// written anywhere. Otherwise the result goes back into the file itself
    /// when `write_in_place` is set, or to `sink` when it is not.
    pub fn format_file<W>(&self, path: &Path, sink: &mut W) -> Result<(), FormatError>
    where
        W: Write + ?Sized,
    {
        let src = fs::read(path)
            .map_err(|err| FormatError::io(format!("cannot read '{}'", path.display()), err))?;

        let text = String::from_utf8_lossy(&src);
        let out = self.reformat(&text)?;

        if out.as_bytes() != src.as_slice() {
            if self.options.write_in_place {
                fs::write(path, out.as_bytes()).map_err(|err| {
                    FormatError::io(format!("cannot write '{}'", path.display()), err)
                })?;
            } else {
                sink.write_all(out.as_bytes())
                    .map_err(|err| FormatError::io("cannot write output", err))?;
            }
        }
        Ok(())
    }
}

/// Serializes any serde value into the canonical form: tab indentation, a
/// space after each colon, no trailing newline.
pub fn canonical_bytes<T>(value: &T) -> Result<Vec<u8>, FormatError>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let pretty = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, pretty);
    value.serialize(&mut ser).map_err(FormatError::Serialize)?;
    Ok(buf)
}

/// Turns a serde_json parse error into a [`FormatError::Syntax`] whose
/// location follows this tool's counting conventions. serde_json reports a
/// 1-based (line, column); that is mapped back to a byte offset and resolved
/// through the offset locator. If the offset can't be resolved, the parser's
/// own line/column stand in so the diagnostic is never lost.
fn syntax_error(input: &str, err: serde_json::Error) -> FormatError {
    let offset = offset_for_position(input, err.line(), err.column());
    let (line, character) =
        line_and_character(input, offset).unwrap_or((err.line(), err.column()));
    FormatError::Syntax {
        line,
        character,
        message: err.to_string(),
    }
}
