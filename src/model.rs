/// A child slot of a math construct (`m:e`, `m:num`, `m:sub`, ...).
/// A slot that is absent in the source is simply empty.
pub type Slot = Vec<MathNode>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FractionKind {
    #[default]
    Bar,
    NoBar,
    Skewed,
    Linear,
}

impl FractionKind {
    pub fn from_omml(val: &str) -> Self {
        match val {
            "noBar" => FractionKind::NoBar,
            "skw" => FractionKind::Skewed,
            "lin" => FractionKind::Linear,
            _ => FractionKind::Bar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LimitLocation {
    UnderOver,
    #[default]
    SubSup,
}

impl LimitLocation {
    pub fn from_omml(val: &str) -> Self {
        match val {
            "undOvr" => LimitLocation::UnderOver,
            _ => LimitLocation::SubSup,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    pub fn from_omml(val: &str) -> Option<Self> {
        match val {
            "top" => Some(Position::Top),
            "bot" => Some(Position::Bottom),
            _ => None,
        }
    }
}

/// `m:scr`: the alphabet a run is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptKind {
    Roman,
    Script,
    Fraktur,
    DoubleStruck,
    SansSerif,
    Monospace,
}

impl ScriptKind {
    pub fn from_omml(val: &str) -> Option<Self> {
        match val {
            "roman" => Some(ScriptKind::Roman),
            "script" => Some(ScriptKind::Script),
            "fraktur" => Some(ScriptKind::Fraktur),
            "double-struck" => Some(ScriptKind::DoubleStruck),
            "sans-serif" => Some(ScriptKind::SansSerif),
            "monospace" => Some(ScriptKind::Monospace),
            _ => None,
        }
    }
}

/// `m:sty`: plain, bold, italic or bold-italic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightKind {
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl WeightKind {
    pub fn from_omml(val: &str) -> Option<Self> {
        match val {
            "p" => Some(WeightKind::Plain),
            "b" => Some(WeightKind::Bold),
            "i" => Some(WeightKind::Italic),
            "bi" => Some(WeightKind::BoldItalic),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RunStyle {
    pub script: Option<ScriptKind>,
    pub weight: Option<WeightKind>,
}

/// How a converted formula is embedded in the surrounding document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MathMode {
    #[default]
    Inline,
    Display,
    Equation,
}

impl MathMode {
    pub fn wrap(self, latex: &str) -> String {
        match self {
            MathMode::Inline => format!("${latex}$"),
            MathMode::Display => format!("\\[\n{latex}\n\\]"),
            MathMode::Equation => format!("\\begin{{equation}}\n{latex}\n\\end{{equation}}"),
        }
    }
}

/// One node of an Office Math tree.
///
/// Glyph-valued properties are kept as written in the source (`None` when the
/// property element is absent); defaults are applied when the node is
/// transpiled.
#[derive(Clone, Debug, PartialEq)]
pub enum MathNode {
    Root(Vec<MathNode>),
    Run {
        style: RunStyle,
        text: String,
    },
    Text(String),
    Fraction {
        kind: FractionKind,
        numerator: Slot,
        denominator: Slot,
    },
    Radical {
        degree: Slot,
        degree_hidden: bool,
        base: Slot,
    },
    Subscript {
        base: Slot,
        subscript: Slot,
    },
    Superscript {
        base: Slot,
        superscript: Slot,
    },
    SubSup {
        base: Slot,
        subscript: Slot,
        superscript: Slot,
    },
    PreScript {
        base: Slot,
        subscript: Slot,
        superscript: Slot,
    },
    NaryOp {
        glyph: Option<String>,
        limit_location: LimitLocation,
        subscript: Slot,
        superscript: Slot,
        base: Slot,
    },
    LowerLimit {
        base: Slot,
        limit: Slot,
    },
    UpperLimit {
        base: Slot,
        limit: Slot,
    },
    Matrix {
        rows: Vec<Vec<Slot>>,
    },
    Delimiter {
        begin: Option<String>,
        end: Option<String>,
        separator: Option<String>,
        items: Vec<Slot>,
    },
    EquationArray {
        rows: Vec<Slot>,
    },
    Bar {
        position: Option<Position>,
        base: Slot,
    },
    Accent {
        glyph: Option<String>,
        base: Slot,
    },
    Box(Slot),
    Function {
        name: Slot,
        argument: Slot,
    },
    GroupChar {
        glyph: Option<String>,
        position: Option<Position>,
        base: Slot,
    },
    BorderBox(Slot),
    Phantom(Slot),
    /// Any element without a dedicated handler; its children are kept.
    Other(Vec<MathNode>),
}

impl MathNode {
    /// An unstyled run of text.
    pub fn run(text: impl Into<String>) -> Self {
        MathNode::Run {
            style: RunStyle::default(),
            text: text.into(),
        }
    }

    pub fn styled_run(text: impl Into<String>, style: RunStyle) -> Self {
        MathNode::Run {
            style,
            text: text.into(),
        }
    }
}
