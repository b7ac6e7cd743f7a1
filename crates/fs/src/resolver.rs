use std::{ffi::OsString, path::Path};

use lister_runtime::{HIDDEN_PREFIX, PARENT_ENTRY, SELF_ENTRY};
use log::debug;

use crate::{error::ListError, provider::MetadataProvider, record::FileKind};

/// Command-line arguments split by what they turned out to be.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Number of path arguments after defaulting (at least 1).
    pub arg_count: usize,
    /// Existing non-directory arguments, in argument order.
    pub files: Vec<String>,
    /// Existing directory arguments, in argument order.
    pub dirs: Vec<String>,
    /// Arguments that could not be stat'ed, sorted by path.
    pub missing: Vec<ListError>,
}

/// Classify each argument with an lstat. No arguments means `.`.
///
/// A failed lookup never stops the remaining arguments from resolving. A
/// symlink argument is followed once more: if it leads to a directory it is
/// expanded like one, otherwise (dangling included) it is listed as an entry.
pub fn resolve_args<P, S>(provider: &P, args: &[S]) -> Resolution
where
    P: MetadataProvider + ?Sized,
    S: AsRef<str>,
{
    let defaulted = [SELF_ENTRY];
    let args: Vec<&str> = if args.is_empty() {
        defaulted.to_vec()
    } else {
        args.iter().map(AsRef::as_ref).collect()
    };

    let mut resolution = Resolution {
        arg_count: args.len(),
        ..Resolution::default()
    };

    for arg in args {
        match provider.symlink_metadata(Path::new(arg)) {
            Ok(meta) if meta.kind == FileKind::Directory => resolution.dirs.push(arg.to_owned()),
            Ok(meta) if meta.kind == FileKind::Symlink && leads_to_dir(provider, arg) => {
                resolution.dirs.push(arg.to_owned())
            }
            Ok(_) => resolution.files.push(arg.to_owned()),
            Err(e) => {
                debug!("[resolve] {arg:?}: {e}");
                resolution.missing.push(ListError::from_io(arg, &e));
            }
        }
    }

    // Errors are always reported in ascending order, whatever `-r` says.
    resolution
        .missing
        .sort_by(|a, b| a.path().cmp(b.path()));

    resolution
}

fn leads_to_dir<P>(provider: &P, arg: &str) -> bool
where
    P: MetadataProvider + ?Sized,
{
    match provider.metadata(Path::new(arg)) {
        Ok(meta) => meta.kind == FileKind::Directory,
        Err(e) => {
            debug!("[resolve] {arg:?} does not resolve: {e}");
            false
        }
    }
}

/// Names of the immediate children of `dir`, unsorted.
///
/// Hidden names are dropped unless `show_hidden`, in which case the
/// synthetic `.` and `..` entries are added as well. Subdirectories are
/// not descended into.
pub fn list_children<P>(
    provider: &P,
    dir: &Path,
    show_hidden: bool,
) -> Result<Vec<OsString>, ListError>
where
    P: MetadataProvider + ?Sized,
{
    let mut names = provider
        .read_dir_names(dir)
        .map_err(|e| ListError::from_io(dir.to_string_lossy(), &e))?;

    if show_hidden {
        names.push(SELF_ENTRY.into());
        names.push(PARENT_ENTRY.into());
    } else {
        names.retain(|n| !n.to_string_lossy().starts_with(HIDDEN_PREFIX));
    }

    debug!("[resolve] {:?}: {} entries", dir, names.len());
    Ok(names)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
