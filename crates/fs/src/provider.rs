use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use log::warn;
use users::{Groups, Users, UsersCache};

use crate::record::{DeviceId, FileKind};

/// Plain stat result, detached from any platform type.
#[derive(Debug, Clone)]
pub struct RawMetadata {
    pub kind: FileKind,
    /// Raw `st_mode`; only the permission and special bits are read.
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub blocks: u64,
    pub device: Option<DeviceId>,
    pub mtime: SystemTime,
}

/// Everything the listing needs from the operating system.
pub trait MetadataProvider {
    /// lstat: symlinks are reported as symlinks, never followed.
    fn symlink_metadata(&self, path: &Path) -> io::Result<RawMetadata>;

    /// stat: symlinks are followed to whatever they point at.
    fn metadata(&self, path: &Path) -> io::Result<RawMetadata>;

    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Names of the immediate children of `dir`, in no particular order.
    /// `.` and `..` are never included. Names keep their raw bytes.
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    fn user_name(&self, uid: u32) -> Option<String>;

    fn group_name(&self, gid: u32) -> Option<String>;
}

/// [`MetadataProvider`] backed by the real filesystem and the passwd/group databases.
pub struct OsMetadataProvider {
    ids: UsersCache,
}

impl OsMetadataProvider {
    pub fn new() -> Self {
        Self {
            ids: UsersCache::new(),
        }
    }
}

impl Default for OsMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for OsMetadataProvider {
    fn symlink_metadata(&self, path: &Path) -> io::Result<RawMetadata> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(raw_from_std(&metadata))
    }

    fn metadata(&self, path: &Path) -> io::Result<RawMetadata> {
        let metadata = fs::metadata(path)?;
        Ok(raw_from_std(&metadata))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();

        for entry_res in fs::read_dir(dir)? {
            let entry = match entry_res {
                Ok(e) => e,
                Err(e) => {
                    warn!("[provider] error reading entry in {:?}: {e}", dir);
                    continue;
                }
            };
            names.push(entry.file_name());
        }

        Ok(names)
    }

    fn user_name(&self, uid: u32) -> Option<String> {
        self.ids
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.ids
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
    }
}

fn kind_of(file_type: fs::FileType) -> FileKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_block_device() {
        FileKind::BlockDevice
    } else if file_type.is_char_device() {
        FileKind::CharDevice
    } else if file_type.is_fifo() {
        FileKind::Fifo
    } else if file_type.is_socket() {
        FileKind::Socket
    } else {
        FileKind::Regular
    }
}

fn raw_from_std(metadata: &fs::Metadata) -> RawMetadata {
    use std::os::unix::fs::MetadataExt;

    let kind = kind_of(metadata.file_type());
    let device = kind.is_device().then(|| device_id(metadata.rdev()));

    RawMetadata {
        kind,
        mode: metadata.mode(),
        nlink: metadata.nlink(),
        uid: metadata.uid(),
        gid: metadata.gid(),
        size: metadata.size(),
        blocks: metadata.blocks(),
        device,
        // mtime is always available from lstat on unix; fall back to the epoch otherwise.
        mtime: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    }
}

fn device_id(rdev: u64) -> DeviceId {
    let dev = rdev as libc::dev_t;
    DeviceId {
        major: libc::major(dev) as u32,
        minor: libc::minor(dev) as u32,
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
