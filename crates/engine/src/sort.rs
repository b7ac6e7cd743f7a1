use lister_fs::FileRecord;

/// Sort by name, byte-wise ascending, then flip the result when `reverse`.
///
/// Reversal happens after sorting instead of through a descending
/// comparator, so `-r` output is exactly the forward output backwards.
pub fn sort_records(mut records: Vec<FileRecord>, reverse: bool) -> Vec<FileRecord> {
    records.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    if reverse {
        records.reverse();
    }
    records
}

/// Same ordering rule for bare names, used for directory arguments.
pub fn sort_names(mut names: Vec<String>, reverse: bool) -> Vec<String> {
    names.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    if reverse {
        names.reverse();
    }
    names
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
