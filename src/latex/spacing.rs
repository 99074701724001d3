//! Joining of emitted fragments.
//!
//! LaTeX reads `\alpha` followed by `beta` as the single (undefined) command
//! `\alphabeta`. Fragments are produced independently, so the join has to
//! decide where a separating space is needed. This is a heuristic over the
//! emitted text, not a parser: it looks at the last backslash of the left
//! fragment only.

/// Whether `fragment` ends inside a command word, e.g. `x+\alpha` but not
/// `\frac{a}{b}` or `\left(`.
pub fn ends_with_command_word(fragment: &str) -> bool {
    let Some(idx) = fragment.rfind('\\') else {
        return false;
    };
    let command = &fragment[idx + 1..];
    command.chars().next_back().is_some_and(char::is_alphabetic)
        && !command.contains(['{', '}', '[', ']'])
}

fn starts_with_letter(fragment: &str) -> bool {
    fragment.chars().next().is_some_and(char::is_alphabetic)
}

/// Whether a space must go between `prev` and `next`.
pub fn needs_space(prev: &str, next: &str) -> bool {
    ends_with_command_word(prev) && starts_with_letter(next)
}

/// Concatenate fragments, inserting a space wherever [`needs_space`] holds.
pub fn join<S: AsRef<str>>(parts: &[S]) -> String {
    join_by(parts, needs_space)
}

pub(crate) fn join_by<S, F>(parts: &[S], separate: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> bool,
{
    let mut out = String::new();
    let mut prev: Option<&str> = None;
    for part in parts {
        let part: &str = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if prev.is_some_and(|prev| separate(prev, part)) {
            out.push(' ');
        }
        out.push_str(part);
        prev = Some(part);
    }
    out
}
