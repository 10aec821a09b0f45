//! Output directory provisioning and per-file writes.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};
use thiserror::Error;

pub const DIR_PREFIX: &str = "dummyfiles";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%Hh%Mm%S";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{}: permission denied, is the file in use?", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: failed to write the file: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub fn path(&self) -> &Path {
        match self {
            WriteError::PermissionDenied { path, .. } | WriteError::Io { path, .. } => path,
        }
    }
}

/// `$HOME/Desktop`, or the current directory when no home is known.
pub fn default_base_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join("Desktop"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_dir_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{DIR_PREFIX}_{}", now.format(TIMESTAMP_FORMAT))
}

/// If `path` names a plain file, returns `path(1)`, `path(2)`, ... using the
/// first suffix that is not itself a plain file. Otherwise `path` unchanged.
pub fn disambiguate(path: PathBuf) -> PathBuf {
    if !path.is_file() {
        return path;
    }
    (1u64..)
        .map(|i| {
            let mut name = OsString::from(path.as_os_str());
            name.push(format!("({i})"));
            PathBuf::from(name)
        })
        .find(|candidate| !candidate.is_file())
        .unwrap_or(path)
}

/// Resolves and creates the run's output directory. An existing directory is
/// reused as is.
pub fn provision_dir<Tz: TimeZone>(
    output: Option<&Path>,
    base_dir: &Path,
    now: &DateTime<Tz>,
) -> io::Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    let target = match output {
        Some(dir) => dir.to_path_buf(),
        None => base_dir.join(default_dir_name(now)),
    };
    let target = disambiguate(std::path::absolute(target)?);
    if !target.is_dir() {
        fs::create_dir_all(&target)?;
    }
    Ok(target)
}

pub fn file_name(size: usize, index: usize) -> String {
    format!("size{size:011}_{index:04}.dat")
}

/// Creates or truncates `path` and writes `data`. A failure may leave the
/// file partially written.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), WriteError> {
    fs::write(path, data).map_err(|source| match source.kind() {
        io::ErrorKind::PermissionDenied => WriteError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        },
        _ => WriteError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
