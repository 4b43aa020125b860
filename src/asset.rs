//! Photo blob codec: filesystem path to opaque bytes and back.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::contact::PhotoBlob;

/// Errors surfaced by the codec.
#[derive(Debug)]
pub enum AssetError {
    /// The source file does not exist.
    FileNotFound(PathBuf),
    /// Any other I/O failure while reading or writing.
    Io(io::Error),
}

/// Reads the file at `path` fully into an opaque photo blob.
///
/// A missing file is [`AssetError::FileNotFound`]; callers that want the
/// keep-previous-photo behavior handle that variant themselves.
pub fn encode(path: impl AsRef<Path>) -> Result<PhotoBlob, AssetError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(PhotoBlob { bytes }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AssetError::FileNotFound(path.to_path_buf()))
        }
        Err(err) => Err(AssetError::Io(err)),
    }
}

/// Writes `photo` verbatim to `dir/stem.format`, overwriting any existing
/// file there, and returns the written path.
pub fn decode(
    photo: &PhotoBlob,
    dir: impl AsRef<Path>,
    stem: &str,
    format: &str,
) -> Result<PathBuf, AssetError> {
    let dest = dir.as_ref().join(format!("{stem}.{format}"));
    fs::write(&dest, &photo.bytes).map_err(AssetError::Io)?;
    Ok(dest)
}
