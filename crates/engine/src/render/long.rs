use lister_fs::FileRecord;

/// Pre-rendered columns of one long-format row.
struct Row {
    permissions: String,
    nlink: String,
    owner: String,
    group: String,
    size: String,
    mtime: String,
    name: String,
}

impl Row {
    fn new(rec: &FileRecord) -> Self {
        Self {
            permissions: rec.permissions(),
            nlink: rec.nlink.to_string(),
            owner: rec.owner.clone(),
            group: rec.group.clone(),
            size: rec.size_field(),
            mtime: rec.mtime_field(),
            name: rec.name_field(),
        }
    }
}

#[derive(Default)]
struct Widths {
    nlink: usize,
    owner: usize,
    group: usize,
    size: usize,
}

impl Widths {
    fn of(rows: &[Row]) -> Self {
        rows.iter().fold(Widths::default(), |w, r| Widths {
            nlink: w.nlink.max(r.nlink.len()),
            owner: w.owner.max(r.owner.chars().count()),
            group: w.group.max(r.group.chars().count()),
            size: w.size.max(r.size.len()),
        })
    }
}

/// Sum of allocated blocks, as shown on the `total` line.
pub fn total_blocks(records: &[FileRecord]) -> u64 {
    records.iter().map(|r| r.blocks).sum()
}

/// One detailed row per record; column widths are local to `records`.
///
/// `with_total` prefixes the `total N` line used for directory contents.
pub fn render_long(records: &[FileRecord], with_total: bool) -> String {
    let rows: Vec<Row> = records.iter().map(Row::new).collect();
    let w = Widths::of(&rows);

    let mut out = String::new();
    if with_total {
        out.push_str(&format!("total {}\n", total_blocks(records)));
    }

    for r in &rows {
        out.push_str(&format!(
            "{}  {:>nlink$} {:<owner$}  {:<group$}  {:>size$} {} {}\n",
            r.permissions,
            r.nlink,
            r.owner,
            r.group,
            r.size,
            r.mtime,
            r.name,
            nlink = w.nlink,
            owner = w.owner,
            group = w.group,
            size = w.size,
        ));
    }

    out
}

#[cfg(test)]
#[path = "long_tests.rs"]
mod tests;
