use crate::error::FormatError;

/// Resolves a byte offset into a 1-based line number and a character count
/// within that line.
///
/// The conventions follow the diagnostics this tool prints: the first line is
/// line 1; the character count resets to 0 immediately after a line feed and
/// then increments for every character consumed, including the character at
/// the requested offset (so the line feed itself counts as character 1 of the
/// new line).
///
/// # Errors
///
/// Returns [`FormatError::OutOfRange`] when `offset` is past the end of
/// `input`.
pub fn line_and_character(input: &str, offset: usize) -> Result<(usize, usize), FormatError> {
    if offset > input.len() {
        return Err(FormatError::OutOfRange { offset });
    }

    // Humans tend to count from 1.
    let mut line = 1;
    let mut character = 0;

    for (idx, ch) in input.char_indices() {
        if ch == '\n' {
            line += 1;
            character = 0;
        }
        character += 1;
        if idx == offset {
            break;
        }
    }

    Ok((line, character))
}

/// Recovers the byte offset of a 1-based (line, column) position, counting
/// columns in characters. Clamps to the end of input when the position lies
/// beyond it. serde_json reports error positions as line/column, so this is
/// the bridge back to the byte offset [`line_and_character`] consumes.
pub(crate) fn offset_for_position(input: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut cur_line = 1;
    let mut cur_column = 0;

    for (idx, ch) in input.char_indices() {
        cur_column += 1;
        if cur_line == line && cur_column == column {
            return idx;
        }
        if ch == '\n' {
            cur_line += 1;
            cur_column = 0;
        }
    }

    input.len()
}
