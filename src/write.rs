use sio2_prez::error::{Error, Kind, Result};
use std::{fs, io, path::Path};

const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

/// Decimal size the way file managers print it, `12.3 kB`.
pub fn natural_size(bytes: u64) -> String {
    if bytes == 1 {
        return String::from("1 Byte");
    }
    if bytes < 1000 {
        return format!("{} Bytes", bytes);
    }
    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 1000.0 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Writes the document and returns its size on disk.
pub fn write_presentation(path: &Path, html: &str) -> Result<u64> {
    let describe = |e: io::Error| {
        Error::with_source(Kind::Storage, format!("writing {}", path.display()), e)
    };
    fs::write(path, html).map_err(describe)?;
    Ok(fs::metadata(path).map_err(describe)?.len())
}
