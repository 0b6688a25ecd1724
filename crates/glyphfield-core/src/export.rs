use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::field::library::Pattern;
use crate::raster::RenderedGrid;

/// Export naming convention: `pattern-<name>-<unixTimestampMillis>.txt`.
/// Kept stable for consumers that parse exported file names.
pub fn file_name(pattern: Pattern, unix_millis: u128) -> String {
    format!("pattern-{}-{}.txt", pattern.name(), unix_millis)
}

/// Milliseconds since the Unix epoch, for [`file_name`].
pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Write a rendered frame as plain UTF-8 text.
pub fn write_grid<P: AsRef<Path>>(path: P, grid: &RenderedGrid) -> Result<()> {
    fs::write(path, grid.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_follows_the_convention() {
        assert_eq!(
            file_name(Pattern::GoldenSpiral, 1700000000123),
            "pattern-golden_spiral-1700000000123.txt"
        );
    }
}
