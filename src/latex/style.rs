use crate::model::{RunStyle, ScriptKind, WeightKind};

use super::spacing;
use super::symbols::map_char;

/// Opening and closing text of a math alphabet command such as `\mathbb{`…`}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleWrapper {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl StyleWrapper {
    const fn command(prefix: &'static str) -> Self {
        StyleWrapper {
            prefix,
            suffix: "}",
        }
    }

    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}

fn script_wrapper(script: ScriptKind) -> Option<StyleWrapper> {
    match script {
        ScriptKind::Script => Some(StyleWrapper::command("\\mathcal{")),
        ScriptKind::Fraktur => Some(StyleWrapper::command("\\mathfrak{")),
        ScriptKind::DoubleStruck => Some(StyleWrapper::command("\\mathbb{")),
        ScriptKind::SansSerif => Some(StyleWrapper::command("\\mathsf{")),
        ScriptKind::Monospace => Some(StyleWrapper::command("\\mathtt{")),
        ScriptKind::Roman => None,
    }
}

fn weight_wrapper(weight: WeightKind) -> Option<StyleWrapper> {
    match weight {
        WeightKind::Bold => Some(StyleWrapper::command("\\mathbf{")),
        WeightKind::Italic => Some(StyleWrapper::command("\\mathit{")),
        WeightKind::BoldItalic => Some(StyleWrapper::command("\\boldsymbol{")),
        WeightKind::Plain => None,
    }
}

impl RunStyle {
    /// The alphabet command for this run. A script wrapper wins over a weight
    /// wrapper.
    pub fn wrapper(&self) -> Option<StyleWrapper> {
        self.script
            .and_then(script_wrapper)
            .or_else(|| self.weight.and_then(weight_wrapper))
    }
}

/// Apply `prefix`…`suffix` to the letters of `text` only.
///
/// Consecutive letters are buffered and wrapped together; anything that maps
/// to a command or is not a letter ends the span and is emitted unstyled, so
/// double-struck `∈R` becomes `\in \mathbb{R}`.
pub fn apply_style_smartly(text: &str, prefix: &str, suffix: &str) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut letters = String::new();

    let flush = |letters: &mut String, pieces: &mut Vec<String>| {
        if !letters.is_empty() {
            pieces.push(format!("{prefix}{letters}{suffix}"));
            letters.clear();
        }
    };

    for c in text.chars() {
        let mapped = map_char(c);
        if mapped.starts_with('\\') || !c.is_alphabetic() {
            flush(&mut letters, &mut pieces);
            if !mapped.is_empty() {
                pieces.push(mapped.into_owned());
            }
        } else {
            letters.push(c);
        }
    }
    flush(&mut letters, &mut pieces);

    if pieces.len() > 1 {
        spacing::join_by(&pieces, |prev, next| {
            spacing::needs_space(prev, next)
                || (spacing::ends_with_command_word(prev) && next.starts_with('\\'))
        })
    } else {
        pieces.concat()
    }
}
