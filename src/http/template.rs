//! Literal token substitution for served text files.
//!
//! Tokens are plain marker strings replaced with computed values while a
//! file is streamed out. No escaping, no recursive expansion.

/// Replaced with the current date
pub const DATE_TOKEN: &str = "<cs371date>";
/// Replaced with the configured server name
pub const SERVER_TOKEN: &str = "<cs371server>";

/// Applies each `(token, value)` pair to the line in order, replacing
/// every occurrence. Lines without tokens come back unchanged.
pub fn expand_line(line: &str, substitutions: &[(&str, &str)]) -> String {
    let mut expanded = line.to_string();

    for (token, value) in substitutions {
        if expanded.contains(token) {
            expanded = expanded.replace(token, value);
        }
    }

    expanded
}
