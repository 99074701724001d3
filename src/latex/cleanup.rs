//! Whitespace normalisation of transpiled math.

/// Collapse whitespace runs to one space and drop the padding just inside
/// braces, e.g. `\frac{ a }{b}` → `\frac{a}{b}`.
///
/// Escaped braces (`\{`, `\}`) and control spaces (`\ `) are left alone.
/// Empty groups are kept since they carry meaning (`{}_{a}X`, `\frac{}{b}`).
pub fn clean_latex(latex: &str) -> String {
    let collapsed = latex.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    let mut escaped = false;
    while let Some(c) = chars.next() {
        match c {
            ' ' if !escaped && (chars.peek() == Some(&'}') || ends_with_open_group(&out)) => {}
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out.trim().to_string()
}

/// Whether `s` ends with a `{` that opens a group (is not `\{`).
fn ends_with_open_group(s: &str) -> bool {
    let Some(before) = s.strip_suffix('{') else {
        return false;
    };
    let backslashes = before.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}
