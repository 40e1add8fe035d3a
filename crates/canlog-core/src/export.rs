//! Export assembler
//!
//! Materializes stored log content under a shared export directory and
//! bundles `.csv` exports into a zip archive.
//!
//! The export directory is shared scratch space with documented, observable
//! semantics: derived filenames that collide overwrite one another (last
//! write wins), and a bulk archive picks up every `.csv` file present in
//! the directory at archival time, including files left behind by earlier
//! exports.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::Result;
use crate::models::LogContent;

/// Prefix of bulk archive filenames; the suffix is a local wall-clock
/// timestamp, `YYYYMMDD_HHMMSS`.
const ARCHIVE_PREFIX: &str = "can_data_export_";

/// Derive the on-disk export name for a stored filename.
///
/// Path separators are flattened to underscores so every export lands
/// directly in the export directory. With `force_csv`, a `.csv` suffix is
/// appended unless already present.
pub fn derive_export_name(filename: &str, force_csv: bool) -> String {
    let mut name: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if force_csv && !name.ends_with(".csv") {
        name.push_str(".csv");
    }
    name
}

/// Write one entry's content verbatim under the export directory,
/// overwriting any previous file of the same name. Creates the directory
/// on demand. Returns the path written.
pub fn write_export_file(export_dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)?;
    let path = export_dir.join(name);
    fs::write(&path, content)?;
    debug!("Materialized export file {}", path.display());
    Ok(path)
}

/// Materialize every row as a `.csv` export, then bundle all `.csv` files
/// currently in the export directory — stale ones included — into a
/// timestamped archive written alongside them. Returns the archive path.
pub fn bundle_csv_exports(export_dir: &Path, rows: &[LogContent]) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)?;

    for row in rows {
        let name = derive_export_name(&row.filename, true);
        write_export_file(export_dir, &name, &row.content)?;
    }

    let mut csv_files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(export_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map(|ext| ext == "csv").unwrap_or(false) {
            csv_files.push(path);
        }
    }

    let archive_name =
        format!("{}{}.zip", ARCHIVE_PREFIX, Local::now().format("%Y%m%d_%H%M%S"));
    let archive_path = export_dir.join(&archive_name);

    let mut zip = ZipWriter::new(File::create(&archive_path)?);
    let options = SimpleFileOptions::default();
    for path in &csv_files {
        let arcname = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        zip.start_file(arcname, options)?;
        io::copy(&mut File::open(path)?, &mut zip)?;
    }
    zip.finish()?;

    info!(
        "Bundled {} csv export(s) into {}",
        csv_files.len(),
        archive_path.display()
    );
    Ok(archive_path)
}
