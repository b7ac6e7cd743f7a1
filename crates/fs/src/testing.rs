//! In-memory [`MetadataProvider`] for tests.
//!
//! Paths are stored exactly as they will be queried (`"dir/a"`, `"file"`),
//! so tests should build the tree with the same spelling the listing uses.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use crate::provider::{MetadataProvider, RawMetadata};
use crate::record::{DeviceId, FileKind};

pub const FAKE_UID: u32 = 501;
pub const FAKE_GID: u32 = 20;
pub const FAKE_USER: &str = "alice";
pub const FAKE_GROUP: &str = "staff";

const MAX_LINK_HOPS: usize = 8;

pub struct FakeProvider {
    nodes: BTreeMap<PathBuf, RawMetadata>,
    links: HashMap<PathBuf, PathBuf>,
    /// Listed by their parent but gone by the time they are stat'ed.
    vanished: HashSet<PathBuf>,
    /// lstat works, read_dir fails with EACCES.
    unreadable: HashSet<PathBuf>,
    /// lstat itself fails with EACCES.
    denied: HashSet<PathBuf>,
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            links: HashMap::new(),
            vanished: HashSet::new(),
            unreadable: HashSet::new(),
            denied: HashSet::new(),
            users: HashMap::from([(FAKE_UID, FAKE_USER.to_owned())]),
            groups: HashMap::from([(FAKE_GID, FAKE_GROUP.to_owned())]),
        }
    }
}

/// Stat skeleton: owned by alice:staff, one link, mtime 1_700_000_000.
pub fn raw(kind: FileKind, mode: u32) -> RawMetadata {
    RawMetadata {
        kind,
        mode,
        nlink: 1,
        uid: FAKE_UID,
        gid: FAKE_GID,
        size: 0,
        blocks: 0,
        device: None,
        mtime: SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000),
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, mode: u32, size: u64) -> Self {
        let mut meta = raw(FileKind::Regular, mode);
        meta.size = size;
        meta.blocks = size.div_ceil(4096) * 8;
        self.nodes.insert(PathBuf::from(path), meta);
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        let mut meta = raw(FileKind::Directory, 0o755);
        meta.nlink = 2;
        meta.size = 64;
        self.nodes.insert(PathBuf::from(path), meta);
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        let mut meta = raw(FileKind::Symlink, 0o755);
        meta.size = target.len() as u64;
        self.nodes.insert(PathBuf::from(path), meta);
        self.links.insert(PathBuf::from(path), PathBuf::from(target));
        self
    }

    pub fn device(mut self, path: &str, kind: FileKind, major: u32, minor: u32) -> Self {
        let mut meta = raw(kind, 0o660);
        meta.device = Some(DeviceId { major, minor });
        self.nodes.insert(PathBuf::from(path), meta);
        self
    }

    /// Insert or replace a node with fully custom metadata.
    pub fn node(mut self, path: &str, meta: RawMetadata) -> Self {
        self.nodes.insert(PathBuf::from(path), meta);
        self
    }

    pub fn vanished(mut self, path: &str) -> Self {
        self.vanished.insert(PathBuf::from(path));
        self
    }

    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn denied(mut self, path: &str) -> Self {
        self.denied.insert(PathBuf::from(path));
        self
    }

    /// `./name` is stored as `name`; `.` itself stays `.`.
    fn key(path: &Path) -> &Path {
        match path.strip_prefix(".") {
            Ok(rest) if !rest.as_os_str().is_empty() => rest,
            _ => path,
        }
    }

    fn is_child_of(path: &Path, dir: &Path) -> bool {
        match path.parent() {
            Some(parent) if parent == dir => true,
            // Top-level names have an empty parent; treat them as children of ".".
            Some(parent) => parent.as_os_str().is_empty() && dir == Path::new("."),
            None => false,
        }
    }
}

impl MetadataProvider for FakeProvider {
    fn symlink_metadata(&self, path: &Path) -> io::Result<RawMetadata> {
        let path = Self::key(path);
        if self.denied.contains(path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        // `dir/.` compares equal to `dir`; `dir/..` needs a stand-in.
        if path.components().next_back() == Some(std::path::Component::ParentDir) {
            let mut meta = raw(FileKind::Directory, 0o755);
            meta.nlink = 3;
            return Ok(meta);
        }
        self.nodes
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn metadata(&self, path: &Path) -> io::Result<RawMetadata> {
        let mut path = Self::key(path).to_path_buf();
        for _ in 0..MAX_LINK_HOPS {
            let meta = self.symlink_metadata(&path)?;
            if meta.kind != FileKind::Symlink {
                return Ok(meta);
            }
            let target = self.read_link(&path)?;
            path = match path.parent() {
                Some(parent) if !target.is_absolute() => parent.join(target),
                _ => target,
            };
        }
        Err(io::Error::other("Too many levels of symbolic links"))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.links
            .get(Self::key(path))
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::InvalidInput))
    }

    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let dir = Self::key(dir);
        if self.unreadable.contains(dir) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        match self.nodes.get(dir) {
            Some(meta) if meta.kind == FileKind::Directory => {}
            Some(_) => return Err(io::Error::other("Not a directory")),
            None => return Err(io::Error::from(io::ErrorKind::NotFound)),
        }

        let names = self
            .nodes
            .keys()
            .chain(self.vanished.iter())
            .chain(self.denied.iter())
            .filter(|p| Self::is_child_of(p, dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_os_string())
            .collect::<HashSet<_>>();

        Ok(names.into_iter().collect())
    }

    fn user_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).cloned()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups.get(&gid).cloned()
    }
}
