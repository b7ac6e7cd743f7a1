use lister_fs::FileRecord;

/// A group of records rendered together, optionally under a `<label>:` line.
#[derive(Debug, Clone)]
pub struct DirectoryBlock {
    pub label: Option<String>,
    pub records: Vec<FileRecord>,
    /// Contents of an expanded directory (long format adds `total N`),
    /// as opposed to files named on the command line.
    pub expanded: bool,
}

impl DirectoryBlock {
    /// The unlabeled block of plain files named as arguments.
    pub fn files(records: Vec<FileRecord>) -> Self {
        Self {
            label: None,
            records,
            expanded: false,
        }
    }

    pub fn directory(label: Option<String>, records: Vec<FileRecord>) -> Self {
        Self {
            label,
            records,
            expanded: true,
        }
    }
}
