pub mod cleanup;
pub mod spacing;
pub mod style;
pub mod symbols;

use std::fmt::Write;

use crate::model::{FractionKind, LimitLocation, MathNode, Position, RunStyle, Slot};

use self::style::apply_style_smartly;
use self::symbols::{
    get_function_latex, get_nary_latex, is_function_name, left_delimiter, map_text,
    right_delimiter,
};

const DEFAULT_NARY: &str = "∫";
const DEFAULT_ACCENT: &str = "\u{0302}";
const OVER_BRACE: &str = "⏞";
const UNDER_BRACE: &str = "⏟";

/// Operand length (in characters) above which a fraction is set with `\dfrac`.
const DISPLAY_FRACTION_THRESHOLD: usize = 5;

/// Style commands ignored when deciding whether an accent covers one symbol.
const ACCENT_TRANSPARENT_COMMANDS: [&str; 3] = ["\\mathit", "\\mathrm", "\\mathbf"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Deepest node nesting that is transpiled. A formula nested deeper than
    /// this converts to an empty string.
    pub max_depth: usize,
    /// Normalise whitespace in the result (see [`cleanup::clean_latex`]).
    pub cleanup: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            max_depth: 200,
            cleanup: true,
        }
    }
}

impl TranspileOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }
}

#[derive(Debug)]
struct DepthExceeded;

type Fragment = Result<String, DepthExceeded>;

/// Transpile a math tree with the default options.
pub fn transpile(node: &MathNode) -> String {
    transpile_with(node, &TranspileOptions::default())
}

/// Transpile a math tree to LaTeX math-mode markup (without `$` delimiters).
///
/// Never fails: missing slots become empty strings and unknown glyphs fall
/// back to defaults. A tree deeper than `options.max_depth` yields `""`.
pub fn transpile_with(node: &MathNode, options: &TranspileOptions) -> String {
    let transpiler = Transpiler {
        max_depth: options.max_depth,
    };
    match transpiler.node(node, 0) {
        Ok(latex) => latex,
        Err(DepthExceeded) => {
            log::warn!(
                "Formula nested deeper than {} levels, substituting empty math",
                options.max_depth
            );
            String::new()
        }
    }
}

struct Transpiler {
    max_depth: usize,
}

impl Transpiler {
    fn node(&self, node: &MathNode, depth: usize) -> Fragment {
        if depth > self.max_depth {
            return Err(DepthExceeded);
        }
        let d = depth + 1;
        match node {
            MathNode::Root(children) | MathNode::Other(children) | MathNode::Box(children) => {
                self.slot(children, d)
            }
            MathNode::Run { style, text } => Ok(self.run(style, text)),
            MathNode::Text(text) => Ok(map_text(text)),
            MathNode::Fraction {
                kind,
                numerator,
                denominator,
            } => {
                let num = self.slot(numerator, d)?;
                let den = self.slot(denominator, d)?;
                Ok(fraction(*kind, &num, &den))
            }
            MathNode::Radical {
                degree,
                degree_hidden,
                base,
            } => {
                let base = self.slot(base, d)?;
                if !degree_hidden && !degree.is_empty() {
                    let degree = self.slot(degree, d)?;
                    if !degree.trim().is_empty() {
                        return Ok(format!("\\sqrt[{degree}]{{{base}}}"));
                    }
                }
                Ok(format!("\\sqrt{{{base}}}"))
            }
            MathNode::Subscript { base, subscript } => {
                let base = script_base(self.slot(base, d)?);
                let sub = self.slot(subscript, d)?;
                Ok(format!("{base}_{{{sub}}}"))
            }
            MathNode::Superscript { base, superscript } => {
                let base = script_base(self.slot(base, d)?);
                let sup = self.slot(superscript, d)?;
                Ok(format!("{base}^{{{sup}}}"))
            }
            MathNode::SubSup {
                base,
                subscript,
                superscript,
            } => {
                let base = script_base(self.slot(base, d)?);
                let sub = self.slot(subscript, d)?;
                let sup = self.slot(superscript, d)?;
                Ok(format!("{base}_{{{sub}}}^{{{sup}}}"))
            }
            MathNode::PreScript {
                base,
                subscript,
                superscript,
            } => {
                let base = self.slot(base, d)?;
                let sub = self.slot(subscript, d)?;
                let sup = self.slot(superscript, d)?;
                Ok(format!("{{}}_{{{sub}}}^{{{sup}}}{base}"))
            }
            MathNode::NaryOp {
                glyph,
                limit_location,
                subscript,
                superscript,
                base,
            } => {
                let op = get_nary_latex(glyph.as_deref().unwrap_or(DEFAULT_NARY));
                let sub = self.slot(subscript, d)?;
                let sup = self.slot(superscript, d)?;
                let base = self.slot(base, d)?;
                Ok(nary(op, *limit_location, &sub, &sup, &base))
            }
            MathNode::LowerLimit { base, limit } => {
                let base = self.slot(base, d)?;
                let limit = self.slot(limit, d)?;
                Ok(format!("\\underset{{{limit}}}{{{base}}}"))
            }
            MathNode::UpperLimit { base, limit } => {
                let base = self.slot(base, d)?;
                let limit = self.slot(limit, d)?;
                Ok(format!("\\overset{{{limit}}}{{{base}}}"))
            }
            MathNode::Matrix { rows } => {
                let mut lines = Vec::with_capacity(rows.len());
                for row in rows {
                    let cells = row
                        .iter()
                        .map(|cell| self.slot(cell, d))
                        .collect::<Result<Vec<_>, _>>()?;
                    lines.push(cells.join(" & "));
                }
                Ok(format!("\\begin{{matrix}} {} \\end{{matrix}}", lines.join(" \\\\ ")))
            }
            MathNode::Delimiter {
                begin,
                end,
                separator,
                items,
            } => {
                let items = items
                    .iter()
                    .map(|item| self.slot(item, d))
                    .collect::<Result<Vec<_>, _>>()?;
                let content = match separator.as_deref() {
                    Some(sep) if !sep.is_empty() => items.join(sep),
                    _ => items.concat(),
                };
                let left = left_delimiter(begin.as_deref().unwrap_or("("));
                let right = right_delimiter(end.as_deref().unwrap_or(")"));
                match (left, right) {
                    ("", "") => Ok(content),
                    // `.` is the null delimiter: `\left` and `\right` must pair up.
                    (left, right) => Ok(format!(
                        "\\left{} {content} \\right{}",
                        or_null(left),
                        or_null(right)
                    )),
                }
            }
            MathNode::EquationArray { rows } => {
                let rows = rows
                    .iter()
                    .map(|row| self.slot(row, d))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!(
                    "\\begin{{aligned}} {} \\end{{aligned}}",
                    rows.join(" \\\\ ")
                ))
            }
            MathNode::Bar { position, base } => {
                let base = self.slot(base, d)?;
                match position {
                    Some(Position::Bottom) => Ok(format!("\\underline{{{base}}}")),
                    _ => Ok(format!("\\overline{{{base}}}")),
                }
            }
            MathNode::Accent { glyph, base } => {
                let base = self.slot(base, d)?;
                let cmd = accent_command(
                    glyph.as_deref().unwrap_or(DEFAULT_ACCENT),
                    is_multi_char(&base),
                );
                Ok(format!("{cmd}{{{base}}}"))
            }
            MathNode::Function { name, argument } => {
                let name = self.slot(name, d)?;
                let arg = self.slot(argument, d)?;
                let clean = name.trim();
                if is_function_name(clean) {
                    Ok(format!("{} {arg}", get_function_latex(clean)))
                } else {
                    Ok(format!("{name} {arg}"))
                }
            }
            MathNode::GroupChar {
                glyph,
                position,
                base,
            } => {
                let base = self.slot(base, d)?;
                let glyph = glyph.as_deref().unwrap_or(UNDER_BRACE);
                if glyph == OVER_BRACE || *position == Some(Position::Top) {
                    Ok(format!("\\overbrace{{{base}}}"))
                } else {
                    Ok(format!("\\underbrace{{{base}}}"))
                }
            }
            MathNode::BorderBox(children) => Ok(format!("\\boxed{{{}}}", self.slot(children, d)?)),
            MathNode::Phantom(children) => Ok(format!("\\phantom{{{}}}", self.slot(children, d)?)),
        }
    }

    /// Transpile sibling nodes and join them with [`spacing::join`].
    fn slot(&self, nodes: &Slot, depth: usize) -> Fragment {
        let parts = nodes
            .iter()
            .map(|n| self.node(n, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(spacing::join(&parts))
    }

    fn run(&self, style: &RunStyle, text: &str) -> String {
        let wrapper = style.wrapper();
        if is_function_name(text) {
            let cmd = get_function_latex(text);
            return match wrapper {
                Some(w) => w.wrap(&cmd),
                None => cmd,
            };
        }
        match wrapper {
            Some(w) => apply_style_smartly(text, w.prefix, w.suffix),
            None => map_text(text),
        }
    }
}

fn or_null(delimiter: &str) -> &str {
    if delimiter.is_empty() { "." } else { delimiter }
}

fn fraction(kind: FractionKind, num: &str, den: &str) -> String {
    match kind {
        FractionKind::NoBar => format!("\\binom{{{num}}}{{{den}}}"),
        FractionKind::Skewed | FractionKind::Linear => format!("{{{num}}}/{{{den}}}"),
        FractionKind::Bar => {
            let long = num.chars().count() > DISPLAY_FRACTION_THRESHOLD
                || den.chars().count() > DISPLAY_FRACTION_THRESHOLD;
            if long {
                format!("\\dfrac{{{num}}}{{{den}}}")
            } else {
                format!("\\frac{{{num}}}{{{den}}}")
            }
        }
    }
}

/// Braces a script base unless it is a single character or starts with a
/// command, so `x^{2}` and `\alpha^{2}` stay bare but `{xy}^{2}` does not.
fn script_base(base: String) -> String {
    if base.chars().count() > 1 && !base.starts_with('\\') {
        format!("{{{base}}}")
    } else {
        base
    }
}

fn nary(op: &str, limit_location: LimitLocation, sub: &str, sup: &str, base: &str) -> String {
    let mut out = op.to_string();
    // TODO: stacked \limits placement for UnderOver once display-style output is wanted;
    // both locations currently render as ordinary scripts.
    match limit_location {
        LimitLocation::UnderOver | LimitLocation::SubSup => {
            if !sub.is_empty() {
                let _ = write!(out, "_{{{sub}}}");
            }
            if !sup.is_empty() {
                let _ = write!(out, "^{{{sup}}}");
            }
        }
    }
    out.push(' ');
    out.push_str(base);
    out
}

fn is_multi_char(base: &str) -> bool {
    let mut stripped = base.to_string();
    for cmd in ACCENT_TRANSPARENT_COMMANDS {
        stripped = stripped.replace(cmd, "");
    }
    stripped.chars().filter(|c| !matches!(c, '{' | '}')).count() > 1
}

fn accent_command(glyph: &str, wide: bool) -> &'static str {
    let (narrow, wide_cmd) = match glyph {
        "\u{0302}" | "^" => ("\\hat", "\\widehat"),
        "\u{0303}" | "~" => ("\\tilde", "\\widetilde"),
        "\u{0304}" => ("\\bar", "\\overline"),
        "\u{0307}" => ("\\dot", "\\dot"),
        "\u{0308}" => ("\\ddot", "\\ddot"),
        "\u{20D7}" | "→" => ("\\vec", "\\overrightarrow"),
        "\u{0306}" => ("\\breve", "\\breve"),
        "\u{030C}" => ("\\check", "\\check"),
        "\u{030A}" => ("\\mathring", "\\mathring"),
        "⏞" => ("\\overbrace", "\\overbrace"),
        "⏟" => ("\\underbrace", "\\underbrace"),
        _ => ("\\hat", "\\widehat"),
    };
    if wide { wide_cmd } else { narrow }
}
