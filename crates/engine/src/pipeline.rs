use std::path::Path;

use lister_fs::{Collector, ListError, MetadataProvider, list_children, resolve_args};
use log::{debug, warn};

use crate::{
    block::DirectoryBlock,
    options::ListingOptions,
    render::render_blocks,
    sort::{sort_names, sort_records},
};

/// Everything one invocation produces, before it is written anywhere.
#[derive(Debug)]
pub struct Listing {
    /// Files block first (if any), then one block per directory argument.
    pub blocks: Vec<DirectoryBlock>,
    /// Missing arguments in ascending order, then per-entry and
    /// per-directory failures in the order they were hit.
    pub diagnostics: Vec<ListError>,
}

impl Listing {
    pub fn render(&self, opts: &ListingOptions, console_width: usize) -> String {
        render_blocks(&self.blocks, opts, console_width)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Resolve `args`, collect and sort every entry, and group them into blocks.
///
/// No failure is fatal: each one lands in [`Listing::diagnostics`] and the
/// rest of the listing carries on.
pub fn list<P, S>(provider: &P, args: &[S], opts: &ListingOptions) -> Listing
where
    P: MetadataProvider + ?Sized,
    S: AsRef<str>,
{
    let resolution = resolve_args(provider, args);
    let collector = Collector::new(provider);

    let mut diagnostics = resolution.missing;
    let mut blocks = Vec::new();

    debug!(
        "[list] {} files, {} dirs, {} missing",
        resolution.files.len(),
        resolution.dirs.len(),
        diagnostics.len()
    );

    if !resolution.files.is_empty() {
        let (records, errors) = collector.collect_all(resolution.files.as_slice(), None);
        diagnostics.extend(errors);
        if !records.is_empty() {
            blocks.push(DirectoryBlock::files(sort_records(
                records,
                opts.reverse_sort,
            )));
        }
    }

    let labeled = resolution.arg_count > 1 || resolution.dirs.len() > 1;

    for dir in sort_names(resolution.dirs, opts.reverse_sort) {
        let base = Path::new(&dir);

        let names = match list_children(provider, base, opts.show_hidden) {
            Ok(names) => names,
            Err(e) => {
                warn!("[list] cannot read {dir:?}: {e}");
                diagnostics.push(e);
                continue;
            }
        };

        let (records, errors) = collector.collect_all(names.as_slice(), Some(base));
        diagnostics.extend(errors);

        let label = labeled.then(|| dir.clone());
        blocks.push(DirectoryBlock::directory(
            label,
            sort_records(records, opts.reverse_sort),
        ));
    }

    Listing {
        blocks,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
