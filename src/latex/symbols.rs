//! Unicode → LaTeX math lookup tables.
//!
//! Every table is a compile-time `phf` map; lookups are total and fall back to
//! passing the input through unchanged.

use std::borrow::Cow;

use phf::{phf_map, phf_set};

/// Greek letters, operators, relations, arrows and script digits.
///
/// Capital Greek letters that look like Latin capitals map to the Latin
/// letter, since LaTeX has no separate command for them.
static SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    // Greek, lowercase
    'α' => "\\alpha",
    'β' => "\\beta",
    'γ' => "\\gamma",
    'δ' => "\\delta",
    'ε' => "\\varepsilon",
    'ϵ' => "\\epsilon",
    'ζ' => "\\zeta",
    'η' => "\\eta",
    'θ' => "\\theta",
    'ϑ' => "\\vartheta",
    'ι' => "\\iota",
    'κ' => "\\kappa",
    'ϰ' => "\\varkappa",
    'λ' => "\\lambda",
    'μ' => "\\mu",
    'ν' => "\\nu",
    'ξ' => "\\xi",
    'π' => "\\pi",
    'ϖ' => "\\varpi",
    'ρ' => "\\rho",
    'ϱ' => "\\varrho",
    'σ' => "\\sigma",
    'ς' => "\\varsigma",
    'τ' => "\\tau",
    'υ' => "\\upsilon",
    'φ' => "\\varphi",
    'ϕ' => "\\phi",
    'χ' => "\\chi",
    'ψ' => "\\psi",
    'ω' => "\\omega",

    // Greek, uppercase
    'Α' => "A",
    'Β' => "B",
    'Γ' => "\\Gamma",
    'Δ' => "\\Delta",
    'Ε' => "E",
    'Ζ' => "Z",
    'Η' => "H",
    'Θ' => "\\Theta",
    'Ι' => "I",
    'Κ' => "K",
    'Λ' => "\\Lambda",
    'Μ' => "M",
    'Ν' => "N",
    'Ξ' => "\\Xi",
    'Ο' => "O",
    'Π' => "\\Pi",
    'Ρ' => "P",
    'Σ' => "\\Sigma",
    'Τ' => "T",
    'Υ' => "\\Upsilon",
    'Φ' => "\\Phi",
    'Χ' => "X",
    'Ψ' => "\\Psi",
    'Ω' => "\\Omega",

    // Reserved in LaTeX
    '%' => "\\%",
    '#' => "\\#",
    '&' => "\\&",
    '$' => "\\$",
    '_' => "\\_",

    // Arithmetic
    '−' => "-",
    '×' => "\\times",
    '÷' => "\\div",
    '±' => "\\pm",
    '∓' => "\\mp",
    '·' => "\\cdot",
    '∗' => "\\ast",
    '⋆' => "\\star",
    '∘' => "\\circ",
    '•' => "\\bullet",

    // Relations
    '≠' => "\\neq",
    '≤' => "\\leq",
    '≥' => "\\geq",
    '≪' => "\\ll",
    '≫' => "\\gg",
    '≈' => "\\approx",
    '≃' => "\\simeq",
    '≅' => "\\cong",
    '≡' => "\\equiv",
    '∼' => "\\sim",
    '∝' => "\\propto",
    '≺' => "\\prec",
    '≻' => "\\succ",
    '⪯' => "\\preceq",
    '⪰' => "\\succeq",

    // Arrows
    '→' => "\\rightarrow",
    '←' => "\\leftarrow",
    '↔' => "\\leftrightarrow",
    '⇒' => "\\Rightarrow",
    '⇐' => "\\Leftarrow",
    '⇔' => "\\Leftrightarrow",
    '↦' => "\\mapsto",
    '↑' => "\\uparrow",
    '↓' => "\\downarrow",
    '⇑' => "\\Uparrow",
    '⇓' => "\\Downarrow",
    '↗' => "\\nearrow",
    '↘' => "\\searrow",
    '↙' => "\\swarrow",
    '↖' => "\\nwarrow",
    '⟵' => "\\longleftarrow",
    '⟶' => "\\longrightarrow",
    '⟷' => "\\longleftrightarrow",
    '⟹' => "\\Longrightarrow",
    '⟸' => "\\Longleftarrow",
    '⟺' => "\\Longleftrightarrow",

    // Sets
    '∈' => "\\in",
    '∉' => "\\notin",
    '∋' => "\\ni",
    '⊂' => "\\subset",
    '⊃' => "\\supset",
    '⊆' => "\\subseteq",
    '⊇' => "\\supseteq",
    '⊊' => "\\subsetneq",
    '⊋' => "\\supsetneq",
    '∪' => "\\cup",
    '∩' => "\\cap",
    '∅' => "\\emptyset",
    '⊕' => "\\oplus",
    '⊗' => "\\otimes",
    '⊖' => "\\ominus",
    '⊘' => "\\oslash",

    // Logic
    '∧' => "\\land",
    '∨' => "\\lor",
    '¬' => "\\neg",
    '∀' => "\\forall",
    '∃' => "\\exists",
    '∄' => "\\nexists",
    '⊢' => "\\vdash",
    '⊣' => "\\dashv",
    '⊤' => "\\top",
    '⊨' => "\\models",

    // Calculus
    '∂' => "\\partial",
    '∞' => "\\infty",
    '∇' => "\\nabla",
    '√' => "\\sqrt",
    '∫' => "\\int",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '∮' => "\\oint",
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∐' => "\\coprod",

    // Miscellaneous
    '°' => "^{\\circ}",
    '′' => "'",
    '″' => "''",
    '‴' => "'''",
    'ℓ' => "\\ell",
    'ℏ' => "\\hbar",
    'ℜ' => "\\Re",
    'ℑ' => "\\Im",
    '℘' => "\\wp",
    'ℵ' => "\\aleph",
    '∠' => "\\angle",
    '∡' => "\\measuredangle",
    '⊥' => "\\perp",
    '∥' => "\\parallel",
    '⋮' => "\\vdots",
    '⋯' => "\\cdots",
    '⋱' => "\\ddots",
    '…' => "\\ldots",
    '□' => "\\square",
    '△' => "\\triangle",
    '▽' => "\\triangledown",
    '★' => "\\bigstar",
    '♠' => "\\spadesuit",
    '♥' => "\\heartsuit",
    '♦' => "\\diamondsuit",
    '♣' => "\\clubsuit",

    // Superscript glyphs
    '⁰' => "^{0}",
    '¹' => "^{1}",
    '²' => "^{2}",
    '³' => "^{3}",
    '⁴' => "^{4}",
    '⁵' => "^{5}",
    '⁶' => "^{6}",
    '⁷' => "^{7}",
    '⁸' => "^{8}",
    '⁹' => "^{9}",
    '⁺' => "^{+}",
    '⁻' => "^{-}",
    '⁼' => "^{=}",
    '⁽' => "^{(}",
    '⁾' => "^{)}",
    'ⁿ' => "^{n}",
    'ⁱ' => "^{i}",

    // Subscript glyphs
    '₀' => "_{0}",
    '₁' => "_{1}",
    '₂' => "_{2}",
    '₃' => "_{3}",
    '₄' => "_{4}",
    '₅' => "_{5}",
    '₆' => "_{6}",
    '₇' => "_{7}",
    '₈' => "_{8}",
    '₉' => "_{9}",
    '₊' => "_{+}",
    '₋' => "_{-}",
    '₌' => "_{=}",
    '₍' => "_{(}",
    '₎' => "_{)}",
};

static NARY_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "∑" => "\\sum",
    "∏" => "\\prod",
    "∐" => "\\coprod",
    "∫" => "\\int",
    "∬" => "\\iint",
    "∭" => "\\iiint",
    "∮" => "\\oint",
    "⋀" => "\\bigwedge",
    "⋁" => "\\bigvee",
    "⋂" => "\\bigcap",
    "⋃" => "\\bigcup",
    "⨁" => "\\bigoplus",
    "⨂" => "\\bigotimes",
    "⨀" => "\\bigodot",
    "⨄" => "\\biguplus",
    "⨆" => "\\bigsqcup",
};

/// Lowercase function names recognised in math runs and `m:func` names.
static FUNCTION_NAMES: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "sinh", "cosh", "tanh", "coth", "sech", "csch",
    "arcsin", "arccos", "arctan", "arccot",
    "asin", "acos", "atan", "acot",
    "exp", "log", "ln", "lg",
    "lim", "liminf", "limsup",
    "max", "min", "sup", "inf",
    "arg", "det", "dim", "gcd", "hom", "ker", "deg",
    "pr", "mod",
};

/// Functions LaTeX (with amsmath) provides a command for.
static FUNCTION_COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    "sin" => "\\sin",
    "cos" => "\\cos",
    "tan" => "\\tan",
    "cot" => "\\cot",
    "sec" => "\\sec",
    "csc" => "\\csc",
    "sinh" => "\\sinh",
    "cosh" => "\\cosh",
    "tanh" => "\\tanh",
    "coth" => "\\coth",
    "arcsin" => "\\arcsin",
    "arccos" => "\\arccos",
    "arctan" => "\\arctan",
    "exp" => "\\exp",
    "log" => "\\log",
    "ln" => "\\ln",
    "lg" => "\\lg",
    "lim" => "\\lim",
    "liminf" => "\\liminf",
    "limsup" => "\\limsup",
    "max" => "\\max",
    "min" => "\\min",
    "sup" => "\\sup",
    "inf" => "\\inf",
    "arg" => "\\arg",
    "det" => "\\det",
    "dim" => "\\dim",
    "gcd" => "\\gcd",
    "hom" => "\\hom",
    "ker" => "\\ker",
    "deg" => "\\deg",
    "pr" => "\\Pr",
};

static LEFT_DELIMITERS: phf::Map<&'static str, &'static str> = phf_map! {
    "(" => "(",
    "[" => "[",
    "{" => "\\{",
    "|" => "|",
    "‖" => "\\|",
    "⟨" => "\\langle",
    "⌈" => "\\lceil",
    "⌊" => "\\lfloor",
};

static RIGHT_DELIMITERS: phf::Map<&'static str, &'static str> = phf_map! {
    ")" => ")",
    "]" => "]",
    "}" => "\\}",
    "|" => "|",
    "‖" => "\\|",
    "⟩" => "\\rangle",
    "⌉" => "\\rceil",
    "⌋" => "\\rfloor",
};

/// Opening glyph → the glyph that closes it.
static BRACKET_PAIRS: phf::Map<&'static str, &'static str> = phf_map! {
    "(" => ")",
    "[" => "]",
    "{" => "}",
    "⟨" => "⟩",
    "|" => "|",
    "‖" => "‖",
    "⌈" => "⌉",
    "⌊" => "⌋",
};

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Map one character to its LaTeX math form.
pub fn map_char(c: char) -> Cow<'static, str> {
    if is_invisible(c) {
        return Cow::Borrowed("");
    }
    match SYMBOLS.get(&c) {
        Some(latex) => Cow::Borrowed(latex),
        None => Cow::Owned(c.to_string()),
    }
}

/// Map every character of `text`, keeping a command such as `\alpha` from
/// running into a following letter.
pub fn map_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mapped = map_char(c);
        out.push_str(&mapped);
        let ends_in_command = mapped.starts_with('\\')
            && mapped.chars().next_back().is_some_and(char::is_alphabetic);
        if ends_in_command && chars.peek().is_some_and(|next| next.is_alphabetic()) {
            out.push(' ');
        }
    }
    out
}

pub fn is_function_name(name: &str) -> bool {
    FUNCTION_NAMES.contains(name.to_lowercase().as_str())
}

/// `\sin`-style command where LaTeX has one, `\operatorname{...}` otherwise.
pub fn get_function_latex(name: &str) -> String {
    match FUNCTION_COMMANDS.get(name.to_lowercase().as_str()) {
        Some(cmd) => (*cmd).to_string(),
        None => format!("\\operatorname{{{name}}}"),
    }
}

pub fn get_nary_latex(glyph: &str) -> &str {
    NARY_OPERATORS.get(glyph).copied().unwrap_or(glyph)
}

pub fn left_delimiter(glyph: &str) -> &str {
    LEFT_DELIMITERS.get(glyph).copied().unwrap_or(glyph)
}

pub fn right_delimiter(glyph: &str) -> &str {
    RIGHT_DELIMITERS.get(glyph).copied().unwrap_or(glyph)
}

/// `\left`/`\right` pair for an opening bracket glyph, e.g. `{` gives
/// `("\left\{", "\right\}")`.
pub fn get_bracket_pair(open: &str) -> Option<(String, String)> {
    let close = BRACKET_PAIRS.get(open)?;
    Some((
        format!("\\left{}", left_delimiter(open)),
        format!("\\right{}", right_delimiter(close)),
    ))
}
