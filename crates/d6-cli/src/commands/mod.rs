pub mod budget;
pub mod cost;
pub mod format;
pub mod range;
pub mod roll;
pub mod skill;

use std::path::Path;

/// Read a whole file, with the path in the error message.
fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))
}
