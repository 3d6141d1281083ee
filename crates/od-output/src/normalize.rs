//! Name clean-up for comma-separated output.

/// Replace every comma, together with any whitespace directly around it, by
/// one space.
///
/// `"Main St, Suite 2"` becomes `"Main St Suite 2"`; `"a , , b"` becomes
/// `"a  b"` (one space per comma).  Names without commas pass through
/// unchanged, including their outer whitespace.
pub fn normalize_csv_name(name: &str) -> String {
    if !name.contains(',') {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut pieces = name.split(',').peekable();
    let mut first = true;

    while let Some(piece) = pieces.next() {
        let is_last = pieces.peek().is_none();
        let piece = match (first, is_last) {
            (true, _) => piece.trim_end(),
            (false, true) => piece.trim_start(),
            (false, false) => piece.trim(),
        };
        if !first {
            out.push(' ');
        }
        out.push_str(piece);
        first = false;
    }
    out
}
