use std::io::{Stderr, Stdout};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use lister_engine::{ListingOptions, list};
use lister_fs::{MetadataProvider, OsMetadataProvider};
use lister_runtime::{DIAGNOSTIC_PREFIX, console_width};
use log::{debug, error};

use crate::printer::{ListingPrinter, Printer};

/// Exit status when at least one path could not be listed.
const EXIT_PARTIAL: u8 = 1;
/// Exit status when the output itself could not be written.
const EXIT_FATAL: u8 = 2;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include entries starting with `.`, plus `.` and `..`
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Reverse the order of the listing
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Use the long listing format
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Files or directories to list (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl ListArgs {
    pub fn options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.all,
            reverse_sort: self.reverse,
            long_format: self.long,
        }
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("[list] {e:#}");
            eprintln!("{DIAGNOSTIC_PREFIX}: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn execute(args: &ListArgs) -> Result<ExitCode> {
    let width = console_width();
    let provider = OsMetadataProvider::new();
    let mut printer = ListingPrinter::<Stdout, Stderr>::stdout();

    let clean = run_listing(&provider, args, width, &mut printer)?;

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_PARTIAL)
    })
}

/// Produce the listing for `args` and hand it to `printer`.
///
/// Returns `true` when every path was listed without a diagnostic.
pub(crate) fn run_listing<P, Pr>(
    provider: &P,
    args: &ListArgs,
    console_width: usize,
    printer: &mut Pr,
) -> Result<bool>
where
    P: MetadataProvider + ?Sized,
    Pr: Printer,
{
    let opts = args.options();
    debug!("[list] {:?} width={console_width} paths={:?}", opts, args.paths);

    let listing = list(provider, args.paths.as_slice(), &opts);

    for diag in &listing.diagnostics {
        printer
            .diagnostic(diag)
            .context("failed to write diagnostics")?;
    }

    printer
        .listing(&listing.render(&opts, console_width))
        .context("failed to write listing")?;

    Ok(!listing.has_errors())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
