use std::io::{self, Write};

use lister_fs::ListError;
use lister_runtime::DIAGNOSTIC_PREFIX;

/// Sink for everything a listing run prints.
pub trait Printer {
    /// One `ls: <path>: <reason>` line on the error stream.
    fn diagnostic(&mut self, err: &ListError) -> io::Result<()>;

    /// The rendered listing, written verbatim to the output stream.
    fn listing(&mut self, text: &str) -> io::Result<()>;
}

/// Printer over an output and an error writer.
pub struct ListingPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> ListingPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Create a printer that writes to stdout and stderr.
    pub fn stdout() -> ListingPrinter<io::Stdout, io::Stderr> {
        ListingPrinter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Printer for ListingPrinter<W, E> {
    fn diagnostic(&mut self, err: &ListError) -> io::Result<()> {
        writeln!(self.err, "{DIAGNOSTIC_PREFIX}: {err}")
    }

    fn listing(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
