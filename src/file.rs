// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::csv::{parse_rows, rows_to_string};
use crate::events::{self, EventRecord};

const SEP: char = ',';

/// Write records as UTF-8 CSV with the `Teams,Date,Time,Location,Sport`
/// header and no index column. Overwrites `path`.
pub fn write_events_csv(path: &Path, records: &[EventRecord]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = rows_to_string(Some(events::headers().as_slice()), &events::to_rows(records), SEP);
    fs::write(path, contents)?;
    Ok(())
}

/// Load a CSV written by `write_events_csv`.
pub fn read_events_csv(path: &Path) -> Result<Vec<EventRecord>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(events::from_rows(&parse_rows(text, SEP)))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("f");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        assert!(ensure_directory(&dir.path().join("a/b")).is_ok());
    }
}
