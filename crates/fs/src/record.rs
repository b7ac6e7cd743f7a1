use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::mode::Mode;

/// Display format of the modification time: space-padded month and day, 11 chars.
const MTIME_FORMAT: &str = "%_m %_d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
}

impl FileKind {
    /// Leading character of the long-format mode column.
    pub fn type_char(self) -> char {
        match self {
            FileKind::Regular => '-',
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::Fifo => 'p',
            FileKind::Socket => 's',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
        }
    }

    #[inline]
    pub fn is_device(self) -> bool {
        matches!(self, FileKind::BlockDevice | FileKind::CharDevice)
    }
}

/// Major/minor pair of a block or character device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Not real hex: the digits are decimal, wrapped the way BSD ls prints them.
        write!(f, "0x{}00000{}", self.major, self.minor)
    }
}

/// One filesystem entry as seen at listing time. Never mutated after collection.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path handed to lstat (base directory joined with `name`).
    pub path: PathBuf,
    /// Display name and sort key
    pub name: String,
    pub kind: FileKind,
    pub mode: Mode,
    pub nlink: u64,
    /// Owner name, or the numeric uid when it has no passwd entry.
    pub owner: String,
    /// Group name, or the numeric gid when it has no group entry.
    pub group: String,
    /// Byte size
    pub size: u64,
    /// Allocated 512-byte blocks
    pub blocks: u64,
    /// Set only for block and character devices.
    pub device: Option<DeviceId>,
    pub mtime: DateTime<Local>,
    /// Raw link text, set only for symlinks whose target could be read.
    pub symlink_target: Option<String>,
}

impl FileRecord {
    /// Type character followed by the permission string, always 10 chars.
    pub fn permissions(&self) -> String {
        let mut out = String::with_capacity(10);
        out.push(self.kind.type_char());
        out.push_str(&self.mode.permission_string());
        out
    }

    /// The size column: device numbers for devices, byte count otherwise.
    pub fn size_field(&self) -> String {
        match self.device {
            Some(dev) if self.kind.is_device() => dev.to_string(),
            _ => self.size.to_string(),
        }
    }

    pub fn mtime_field(&self) -> String {
        self.mtime.format(MTIME_FORMAT).to_string()
    }

    /// Name as shown in long format: symlinks gain ` -> target`.
    pub fn name_field(&self) -> String {
        match (&self.kind, &self.symlink_target) {
            (FileKind::Symlink, Some(target)) => format!("{} -> {}", self.name, target),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
