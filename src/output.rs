use std::io::Write;
use std::path::Path;

use crate::maze::Grid;

/// Write the textual maze dump: the hex grid (one uppercase digit per cell,
/// N=1/E=2/S=4/W=8), a blank separator line, then entry, exit and the
/// solver's path string, each on its own line.
pub fn write_output_file(
    path: &Path,
    grid: &Grid,
    entry: (u16, u16),
    exit: (u16, u16),
    solution: &str,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", grid.to_hex())?;
    writeln!(file)?;
    writeln!(file, "{},{}", entry.0, entry.1)?;
    writeln!(file, "{},{}", exit.0, exit.1)?;
    writeln!(file, "{solution}")?;
    Ok(())
}
