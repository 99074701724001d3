use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Error;
use crate::model::{
    FractionKind, LimitLocation, MathNode, Position, RunStyle, ScriptKind, Slot, WeightKind,
};

pub(crate) const MATH_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// Element nesting the reader accepts. Tree building recurses once per
/// element, so this stays well inside a 2 MiB thread stack in debug builds.
const MAX_NESTING: usize = 64;

/// Parse an `m:oMath` (or `m:oMathPara`, or any single OMML element) into a
/// [`MathNode::Root`].
pub fn parse(xml: &str) -> Result<MathNode, Error> {
    check_nesting(xml)?;
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();
    if !is_math_element(root) {
        return Err(Error::NotMath(root.tag_name().name().to_string()));
    }
    match read_node(root)? {
        Some(node @ MathNode::Root(_)) => Ok(node),
        Some(node) => Ok(MathNode::Root(vec![node])),
        None => Ok(MathNode::Root(Vec::new())),
    }
}

/// Parse an `m:oMathPara` into one [`MathNode::Root`] per `m:oMath` it holds.
/// A bare `m:oMath` gives a single root.
pub fn parse_paragraph(xml: &str) -> Result<Vec<MathNode>, Error> {
    check_nesting(xml)?;
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();
    if !is_math_element(root) {
        return Err(Error::NotMath(root.tag_name().name().to_string()));
    }
    if root.tag_name().name() != "oMathPara" {
        return Ok(vec![MathNode::Root(read_children(root)?)]);
    }
    let mut blocks = Vec::new();
    for omath in root.descendants().filter(|n| is_math(*n, "oMath")) {
        blocks.push(MathNode::Root(read_children(omath)?));
    }
    Ok(blocks)
}

/// Streams the markup once and fails with [`Error::TooDeep`] when elements
/// nest deeper than [`MAX_NESTING`]. Runs before `roxmltree` builds the tree.
///
/// Syntax errors are left for `roxmltree` to report; every element seen up to
/// that point has already passed the check.
fn check_nesting(xml: &str) -> Result<(), Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;
    let mut depth = 0usize;
    loop {
        let level = match reader.read_event() {
            Ok(Event::Start(_)) => {
                depth += 1;
                depth
            }
            Ok(Event::Empty(_)) => depth + 1,
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Ok(Event::Eof) | Err(_) => return Ok(()),
            Ok(_) => continue,
        };
        if level > MAX_NESTING {
            log::debug!("Math markup nested deeper than {MAX_NESTING} elements, rejecting");
            return Err(Error::TooDeep(MAX_NESTING));
        }
    }
}

fn is_math_element(node: roxmltree::Node) -> bool {
    node.is_element() && node.tag_name().namespace().is_none_or(|ns| ns == MATH_NS)
}

fn is_math(node: roxmltree::Node, name: &str) -> bool {
    is_math_element(node) && node.tag_name().name() == name
}

/// First direct child `m:<name>`.
fn math<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children().find(|n| is_math(*n, name))
}

/// `m:val` of the direct child `m:<child>`. Unprefixed `val` is accepted too.
fn math_val<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    math(node, child).and_then(|n| n.attribute((MATH_NS, "val")).or_else(|| n.attribute("val")))
}

/// OMML on/off toggle: present with no val, or a val other than off/0/false.
fn math_bool(node: roxmltree::Node, child: &str) -> bool {
    match math(node, child) {
        Some(n) => n
            .attribute((MATH_NS, "val"))
            .or_else(|| n.attribute("val"))
            .is_none_or(|v| !matches!(v, "0" | "off" | "false")),
        None => false,
    }
}

fn prop<'a>(
    node: roxmltree::Node<'a, 'a>,
    container: &str,
    child: &str,
) -> Option<&'a str> {
    math(node, container).and_then(|pr| math_val(pr, child))
}

fn read_children(node: roxmltree::Node) -> Result<Vec<MathNode>, Error> {
    let mut out = Vec::new();
    for child in node.children() {
        if let Some(n) = read_node(child)? {
            out.push(n);
        }
    }
    Ok(out)
}

/// Contents of the direct child slot `m:<name>`, empty when absent.
fn slot(node: roxmltree::Node, name: &str) -> Result<Slot, Error> {
    match math(node, name) {
        Some(n) => read_children(n),
        None => Ok(Vec::new()),
    }
}

/// Contents of every direct child `m:<name>`, in document order.
fn slots(node: roxmltree::Node, name: &str) -> Result<Vec<Slot>, Error> {
    node.children()
        .filter(|n| is_math(*n, name))
        .map(|n| read_children(n))
        .collect()
}

fn run_text(node: roxmltree::Node) -> String {
    node.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "t")
        .filter_map(|n| n.text())
        .collect()
}

fn run_style(node: roxmltree::Node) -> RunStyle {
    let Some(rpr) = math(node, "rPr") else {
        return RunStyle::default();
    };
    RunStyle {
        script: math_val(rpr, "scr").and_then(ScriptKind::from_omml),
        weight: math_val(rpr, "sty").and_then(WeightKind::from_omml),
    }
}

fn read_node(node: roxmltree::Node) -> Result<Option<MathNode>, Error> {
    if !node.is_element() {
        return Ok(None);
    }
    let name = node.tag_name().name();
    // Property containers (m:rPr, m:fPr, m:ctrlPr, w:rPr, ...) are read by
    // their owning element and never produce content.
    if name.ends_with("Pr") {
        return Ok(None);
    }
    if !is_math_element(node) {
        log::debug!("Skipping non-math element <{name}> inside formula");
        return Ok(None);
    }
    let parsed = match name {
        "oMath" | "oMathPara" => MathNode::Root(read_children(node)?),
        "r" => MathNode::Run {
            style: run_style(node),
            text: run_text(node),
        },
        "t" => MathNode::Text(node.text().unwrap_or_default().to_string()),
        "f" => MathNode::Fraction {
            kind: prop(node, "fPr", "type")
                .map(FractionKind::from_omml)
                .unwrap_or_default(),
            numerator: slot(node, "num")?,
            denominator: slot(node, "den")?,
        },
        "rad" => MathNode::Radical {
            degree: slot(node, "deg")?,
            degree_hidden: math(node, "radPr").is_some_and(|pr| math_bool(pr, "degHide")),
            base: slot(node, "e")?,
        },
        "sSub" => MathNode::Subscript {
            base: slot(node, "e")?,
            subscript: slot(node, "sub")?,
        },
        "sSup" => MathNode::Superscript {
            base: slot(node, "e")?,
            superscript: slot(node, "sup")?,
        },
        "sSubSup" => MathNode::SubSup {
            base: slot(node, "e")?,
            subscript: slot(node, "sub")?,
            superscript: slot(node, "sup")?,
        },
        "sPre" => MathNode::PreScript {
            base: slot(node, "e")?,
            subscript: slot(node, "sub")?,
            superscript: slot(node, "sup")?,
        },
        "nary" => MathNode::NaryOp {
            glyph: prop(node, "naryPr", "chr").map(str::to_string),
            limit_location: prop(node, "naryPr", "limLoc")
                .map(LimitLocation::from_omml)
                .unwrap_or_default(),
            subscript: slot(node, "sub")?,
            superscript: slot(node, "sup")?,
            base: slot(node, "e")?,
        },
        "limLow" => MathNode::LowerLimit {
            base: slot(node, "e")?,
            limit: slot(node, "lim")?,
        },
        "limUpp" => MathNode::UpperLimit {
            base: slot(node, "e")?,
            limit: slot(node, "lim")?,
        },
        "m" => {
            let mut rows = Vec::new();
            for mr in node.children().filter(|n| is_math(*n, "mr")) {
                rows.push(slots(mr, "e")?);
            }
            MathNode::Matrix { rows }
        }
        "d" => MathNode::Delimiter {
            begin: prop(node, "dPr", "begChr").map(str::to_string),
            end: prop(node, "dPr", "endChr").map(str::to_string),
            separator: prop(node, "dPr", "sepChr").map(str::to_string),
            items: slots(node, "e")?,
        },
        "eqArr" => MathNode::EquationArray {
            rows: slots(node, "e")?,
        },
        "bar" => MathNode::Bar {
            position: prop(node, "barPr", "pos").and_then(Position::from_omml),
            base: slot(node, "e")?,
        },
        "acc" => MathNode::Accent {
            glyph: prop(node, "accPr", "chr").map(str::to_string),
            base: slot(node, "e")?,
        },
        "box" => MathNode::Box(slot(node, "e")?),
        "func" => MathNode::Function {
            name: slot(node, "fName")?,
            argument: slot(node, "e")?,
        },
        "groupChr" => MathNode::GroupChar {
            glyph: prop(node, "groupChrPr", "chr").map(str::to_string),
            position: prop(node, "groupChrPr", "pos").and_then(Position::from_omml),
            base: slot(node, "e")?,
        },
        "borderBox" => MathNode::BorderBox(slot(node, "e")?),
        "phant" => MathNode::Phantom(slot(node, "e")?),
        other => {
            log::debug!("Unhandled OMML element <m:{other}>, keeping its children");
            MathNode::Other(read_children(node)?)
        }
    };
    Ok(Some(parsed))
}
