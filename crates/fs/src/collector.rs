use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::{
    error::ListError,
    mode::Mode,
    provider::MetadataProvider,
    record::{FileKind, FileRecord},
};

/// Turns entry names into [`FileRecord`]s through a [`MetadataProvider`].
pub struct Collector<'p, P: MetadataProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: MetadataProvider + ?Sized> Collector<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Collect one entry. `name` is resolved against `base` when given and
    /// becomes the record's display name as-is (lossily, if it is not UTF-8).
    ///
    /// An entry that disappeared since it was listed yields `NotFound`.
    pub fn collect(
        &self,
        name: impl AsRef<OsStr>,
        base: Option<&Path>,
    ) -> Result<FileRecord, ListError> {
        let name = name.as_ref();
        let path = match base {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };

        let raw = self
            .provider
            .symlink_metadata(&path)
            .map_err(|e| ListError::from_io(path.to_string_lossy(), &e))?;

        let symlink_target = if raw.kind == FileKind::Symlink {
            match self.provider.read_link(&path) {
                Ok(target) => Some(target.to_string_lossy().into_owned()),
                Err(e) => {
                    warn!("[collect] read_link({:?}) failed: {e}", path);
                    None
                }
            }
        } else {
            None
        };

        let owner = self
            .provider
            .user_name(raw.uid)
            .unwrap_or_else(|| raw.uid.to_string());
        let group = self
            .provider
            .group_name(raw.gid)
            .unwrap_or_else(|| raw.gid.to_string());

        debug!(
            "[collect] {:?}: {:?} mode={:o} size={}",
            path, raw.kind, raw.mode, raw.size
        );

        Ok(FileRecord {
            name: name.to_string_lossy().into_owned(),
            kind: raw.kind,
            mode: Mode::from_raw(raw.mode),
            nlink: raw.nlink,
            owner,
            group,
            size: raw.size,
            blocks: raw.blocks,
            device: raw.device,
            mtime: DateTime::<Local>::from(raw.mtime),
            symlink_target,
            path,
        })
    }

    /// Collect every name, splitting successes from per-entry failures.
    /// Input order is preserved in both outputs.
    pub fn collect_all<S: AsRef<OsStr>>(
        &self,
        names: &[S],
        base: Option<&Path>,
    ) -> (Vec<FileRecord>, Vec<ListError>) {
        let mut records = Vec::with_capacity(names.len());
        let mut errors = Vec::new();

        for name in names {
            match self.collect(name, base) {
                Ok(rec) => records.push(rec),
                Err(e) => {
                    warn!("[collect] skipping {:?}: {e}", name.as_ref());
                    errors.push(e);
                }
            }
        }

        (records, errors)
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
