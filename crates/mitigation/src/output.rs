use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes a two-column CSV with the given header.
pub fn write_csv(path: impl AsRef<Path>, header: [&str; 2], rows: &[(f64, f64)]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "{},{}", header[0], header[1])?;
    for (x, y) in rows {
        writeln!(f, "{},{}", x, y)?;
    }
    f.flush()
}

/// `(depth, mean)` rows for a depth sweep.
pub fn depth_rows(series: &[f64]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(d, &e)| (d as f64, e))
        .collect()
}
