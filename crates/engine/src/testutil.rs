use std::path::PathBuf;

use chrono::{Local, TimeZone};
use lister_fs::{FileKind, FileRecord, Mode};

/// A `-rw-r--r--` regular file owned by alice:staff, modified 2024-03-07 09:05.
pub fn record(name: &str) -> FileRecord {
    FileRecord {
        path: PathBuf::from(name),
        name: name.to_owned(),
        kind: FileKind::Regular,
        mode: Mode::from_raw(0o644),
        nlink: 1,
        owner: "alice".into(),
        group: "staff".into(),
        size: 0,
        blocks: 0,
        device: None,
        mtime: Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 0)
            .single()
            .expect("valid local time"),
        symlink_target: None,
    }
}

pub fn records(names: &[&str]) -> Vec<FileRecord> {
    names.iter().map(|n| record(n)).collect()
}

pub fn names(records: &[FileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
