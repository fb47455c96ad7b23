//! File name shown in diagnostics.

use std::path::Path;

/// Name reported when source comes from standard input.
pub const DEFAULT_FILENAME: &str = "./main.lua";

/// Name reported for a source file given on the command line.
///
/// Relative paths are shown with a leading `./`; absolute paths verbatim.
pub fn display_filename(path: &Path) -> String {
    if path.is_absolute() || path.starts_with(".") || path.starts_with("..") {
        path.display().to_string()
    } else {
        format!("./{}", path.display())
    }
}
