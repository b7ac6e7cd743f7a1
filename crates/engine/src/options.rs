/// Flags fixed at argument-parsing time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// `-a`: dotfiles plus synthetic `.` and `..`.
    pub show_hidden: bool,
    /// `-r`: reverse the sorted order.
    pub reverse_sort: bool,
    /// `-l`: one detailed row per entry.
    pub long_format: bool,
}
