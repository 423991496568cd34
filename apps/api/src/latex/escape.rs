//! Text Sanitizer — escapes LaTeX-significant characters in plain text.
//!
//! Every leaf value spliced into the document source passes through here
//! exactly once. Escaping is a single pass over the characters, so one call
//! can never double-escape its own output within that call.

/// Escapes the ten LaTeX special characters: `\ & % $ # _ { } ~ ^`.
///
/// Backslash becomes `\textbackslash `, tilde and caret become their named
/// symbol commands, the rest get a leading escape backslash.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash "),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde "),
            '^' => out.push_str("\\textasciicircum "),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes an optional value. `None` renders as the empty string, never errors.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}
