use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::FormatError;
use crate::format::Formatter;

/// Recursively formats every eligible JSON file under `root`.
///
/// Eligible means: a regular file whose name ends in `.json` and does not
/// start with a period. Everything else is skipped silently.
///
/// The walk is fail-fast: the first traversal error or per-file formatting
/// error aborts the walk and is returned. Files already visited keep whatever
/// the formatter did to them.
pub fn format_tree<W>(formatter: &Formatter, root: &Path, sink: &mut W) -> Result<(), FormatError>
where
    W: Write + ?Sized,
{
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_visible_json(entry.file_name().to_string_lossy().as_ref()) {
            continue;
        }
        formatter.format_file(entry.path(), sink)?;
    }
    Ok(())
}

fn is_visible_json(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(".json")
}
