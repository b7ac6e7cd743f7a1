use unicode_width::UnicodeWidthChar;

/// Terminal columns taken by `s`: wide (CJK, full-width) chars count 2,
/// every other char counts 1, including ones Unicode calls zero-width.
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(1).max(1)).sum()
}

/// Left-justify `s` to `width` display columns. Never truncates.
pub fn pad_to(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}
