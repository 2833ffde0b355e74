//! Map files on disk

use crate::codec::{Codec, MapFormat};
use crate::error::{Error, Result};
use crate::schema::MapInfoRoot;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Format implied by a path's extension
pub fn format_for_path(path: &Path) -> Result<MapFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(MapFormat::from_extension)
        .ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))
}

/// Load a single map file
pub fn load_map(path: impl AsRef<Path>, codec: &Codec) -> Result<MapInfoRoot> {
    let path = path.as_ref();
    let format = format_for_path(path)?;
    let content = fs::read_to_string(path)?;
    let root = codec.decode(&content, format)?;
    info!(
        "loaded map {:?} ({} entries)",
        path,
        root.mapinfo.map_data.len()
    );
    Ok(root)
}

/// Save a map file
///
/// The document is written next to the target and renamed over it, so an
/// existing file is left untouched if encoding or writing fails.
pub fn save_map(path: impl AsRef<Path>, root: &MapInfoRoot, codec: &Codec) -> Result<()> {
    let path = path.as_ref();
    let format = format_for_path(path)?;
    let content = codec.encode(root, format)?;

    let tmp = staging_path(path);
    if let Err(e) = fs::write(&tmp, content.as_bytes()).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!(
        "saved map {:?} ({} entries)",
        path,
        root.mapinfo.map_data.len()
    );
    Ok(())
}

/// Load every map file directly inside a directory, sorted by file name
///
/// Files with other extensions and subdirectories are skipped. The first
/// map that fails to load aborts the whole call.
pub fn load_directory(path: impl AsRef<Path>, codec: &Codec) -> Result<Vec<(PathBuf, MapInfoRoot)>> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Not a directory: {:?}", path),
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let file_path = entry?.path();
        if file_path.is_file() && format_for_path(&file_path).is_ok() {
            files.push(file_path);
        }
    }
    files.sort();

    files
        .into_iter()
        .map(|file| load_map(&file, codec).map(|root| (file, root)))
        .collect()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
