mod grid;
mod long;
mod width;

pub use grid::{column_count, render_grid};
pub use long::{render_long, total_blocks};
pub use width::{display_width, pad_to};

use crate::{block::DirectoryBlock, options::ListingOptions};

/// Render a single block: optional label line, then grid or long rows.
pub fn render_block(block: &DirectoryBlock, opts: &ListingOptions, console_width: usize) -> String {
    let mut out = String::new();

    if let Some(label) = &block.label {
        out.push_str(label);
        out.push_str(":\n");
    }

    if opts.long_format {
        out.push_str(&render_long(&block.records, block.expanded));
    } else {
        out.push_str(&render_grid(&block.records, console_width));
    }

    out
}

/// Render every block, separated by exactly one blank line.
///
/// Blocks that render to nothing (an unlabeled empty directory) take no
/// space and add no separator.
pub fn render_blocks(blocks: &[DirectoryBlock], opts: &ListingOptions, console_width: usize) -> String {
    blocks
        .iter()
        .map(|b| render_block(b, opts, console_width))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
