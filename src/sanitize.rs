/// Turns file names into identifiers the generated C++ can use.
///
/// "Alphanumeric" here is the Unicode class used by `char::is_alphanumeric`
/// (Alphabetic + Numeric), so `café.js` keeps its `é`. Everything else becomes
/// an underscore. Only an ASCII digit `0-9` in first position gets an underscore
/// in front; other numeric characters such as `½` or `Ⅻ` are left alone.
///
/// The input must not be empty. Debug builds assert on it; release builds hand
/// the empty string back unchanged.
pub fn sanitize_identifier(raw: &str) -> String {
    debug_assert!(!raw.is_empty(), "cannot build an identifier from an empty name");
    let ident: String = raw
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '_' })
        .collect();
    match ident.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{}", ident),
        _ => ident,
    }
}

/// Identifier for a file with the given stem and extension (no leading dot).
pub fn identifier_for(stem: &str, extension: &str) -> String {
    sanitize_identifier(&format!("{}_{}", stem, extension))
}
