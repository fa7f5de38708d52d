//! File conversion engine.
//!
//! Reads a dump into memory in one shot, runs the rewriter over it, and
//! writes the result out. SQL dumps fit comfortably in memory, so there is
//! no streaming path.

use std::fs;
use std::path::Path;

use crate::error::{SqlSnakeError, SqlSnakeResult};
use crate::rewriter::rewrite_identifiers;

/// Convert a dump file, writing the rewritten text to `output`.
///
/// The output file is created or overwritten unconditionally. `on_convert`
/// receives each changed identifier in document order.
///
/// # Example
///
/// ```rust,ignore
/// sqlsnake::convert_file("dump.sql", "output.sql", |old, new| {
///     println!("Converted: {old} → {new}");
/// })?;
/// ```
pub fn convert_file<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    on_convert: F,
) -> SqlSnakeResult<()>
where
    F: FnMut(&str, &str),
{
    let input = input.as_ref();
    let output = output.as_ref();

    let sql = fs::read_to_string(input).map_err(|e| SqlSnakeError::read(input, e))?;
    let rewritten = rewrite_identifiers(&sql, on_convert);
    fs::write(output, rewritten).map_err(|e| SqlSnakeError::write(output, e))?;

    Ok(())
}
