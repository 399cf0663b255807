//! Identifier and indentation helpers shared by every renderer

/// Largest arity the single-letter naming scheme supports (`A..=Z`).
pub const MAX_ARITY: usize = 26;

/// Generic type parameter name for an argument position: `A`, `B`, `C`, ...
pub fn type_label(index: usize) -> char {
    debug_assert!(index < MAX_ARITY);
    (b'A' + index as u8) as char
}

/// Closure variable name for an argument position: `a`, `b`, `c`, ...
pub fn var_label(index: usize) -> char {
    debug_assert!(index < MAX_ARITY);
    (b'a' + index as u8) as char
}

/// Indent every line of `text` by one `unit`.
///
/// Empty lines are dropped, so nested blocks never carry whitespace-only lines.
pub fn indent_block(text: &str, unit: &str) -> String {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| format!("{unit}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
