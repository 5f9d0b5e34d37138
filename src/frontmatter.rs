/// Delimiter closing a TOML frontmatter block.
const MARKER: &str = "+++";

/// Everything after the last frontmatter marker.
///
/// The cut skips the marker plus one whole character, consuming the
/// newline that ends the marker line. Input without a marker passes
/// through whole, and a marker at the very end of the input yields an
/// empty body.
pub fn strip(input: &str) -> &str {
    match input.rfind(MARKER) {
        Some(idx) => {
            let mut rest = input[idx + MARKER.len()..].chars();
            rest.next();
            rest.as_str()
        }
        None => input,
    }
}
