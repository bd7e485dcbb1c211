//! Utility functions

use crate::{
    error::{SolcError, SolcIoError},
    json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::Write,
    path::{Component, Path, PathBuf},
};

/// Canonicalize the path, platform-agnostic.
///
/// On windows this will ensure the path only consists of `/` separators.
pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf, SolcIoError> {
    let path = path.as_ref();
    let res = dunce::canonicalize(path);
    #[cfg(windows)]
    let res = res.map(|p| {
        use path_slash::PathBufExt;
        PathBuf::from(p.to_slash_lossy().as_ref())
    });
    res.map_err(|err| SolcIoError::new(err, path))
}

/// Maximum number of symbolic links followed while resolving a single path.
const MAX_SYMLINK_HOPS: usize = 40;

/// Returns the absolute, normalized form of `path`, whether or not it exists.
///
/// A relative path is interpreted against the current working directory. Components are then
/// resolved from left to right: `.` is dropped, `..` moves to the parent of what has been
/// resolved so far, and every existing symbolic link is replaced by its target before the next
/// component is looked at. Components that do not exist are appended unchanged. Once
/// [`MAX_SYMLINK_HOPS`] links have been followed, the remaining links are kept as they are.
///
/// Only fails if the current working directory cannot be determined.
pub fn absolute_path(path: impl AsRef<Path>) -> Result<PathBuf, SolcIoError> {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|err| SolcIoError::new(err, path))?;
        cwd.join(path)
    };

    let mut resolved = PathBuf::new();
    let mut hops = 0;
    push_resolved(&mut resolved, &absolute, &mut hops);
    Ok(dunce::simplified(&resolved).to_path_buf())
}

/// Appends the components of `path` onto `resolved`, following symbolic links as they are met.
fn push_resolved(resolved: &mut PathBuf, path: &Path, hops: &mut usize) {
    for component in path.components() {
        match component {
            // an absolute link target restarts from its root
            Component::Prefix(..) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            // `resolved` holds no links, so its parent is the real parent. The root is its own
            // parent.
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if *hops >= MAX_SYMLINK_HOPS {
                    continue;
                }
                // fails for anything that is not an existing link
                let Ok(target) = fs::read_link(&resolved) else {
                    continue;
                };
                trace!(link = %resolved.display(), target = %target.display(), "following symlink");
                *hops += 1;
                resolved.pop();
                push_resolved(resolved, &target, hops);
            }
        }
    }
}

/// Returns the path as a string, using `/` separators on every platform.
pub fn path_to_string(path: &Path) -> String {
    #[cfg(windows)]
    {
        use path_slash::PathExt;
        path.to_slash_lossy().into_owned()
    }
    #[cfg(not(windows))]
    {
        path.to_string_lossy().into_owned()
    }
}

/// Reads the json file and deserialize it into the provided type.
#[instrument(level = "debug", skip_all, fields(path = %path.display()), err)]
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, SolcError> {
    let bytes = fs::read(path).map_err(|err| SolcError::io(err, path))?;
    trace!(len = bytes.len(), "read json file");
    serde_json::from_slice(&bytes).map_err(|err| SolcError::parse_json(err, path))
}

/// Serializes the provided value to JSON and writes it to a file, replacing any previous content.
///
/// The file is truncated and written in place.
#[instrument(level = "debug", skip_all, fields(path = %path.display()), err)]
pub fn write_json_file<T: Serialize>(
    value: &T,
    path: &Path,
    capacity: usize,
) -> Result<(), SolcError> {
    let file = fs::File::create(path).map_err(|err| SolcError::io(err, path))?;
    let mut writer = std::io::BufWriter::with_capacity(capacity, file);
    json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| SolcError::io(e, path))
}
