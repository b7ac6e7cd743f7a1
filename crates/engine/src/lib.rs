mod block;
mod options;
mod pipeline;
pub mod render;
mod sort;

#[cfg(test)]
mod testutil;

pub use block::DirectoryBlock;
pub use options::ListingOptions;
pub use pipeline::{Listing, list};
pub use render::{render_block, render_blocks};
pub use sort::{sort_names, sort_records};
