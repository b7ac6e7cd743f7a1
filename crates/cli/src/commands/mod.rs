pub mod list;

pub use list::ListArgs;
