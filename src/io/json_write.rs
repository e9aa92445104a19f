use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Writes `records` to `path` as a two-space indented JSON array,
/// replacing any existing file.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json_string = serde_json::to_string_pretty(records)?;
    fs::write(path, json_string)?;
    Ok(())
}
