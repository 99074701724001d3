#![allow(dead_code)]

use omml2latex::MathNode;
use omml2latex::model::{RunStyle, ScriptKind, WeightKind};

pub const MATH_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `<m:oMath>` with the math namespace declared around `inner`.
pub fn omath(inner: &str) -> String {
    format!(r#"<m:oMath xmlns:m="{MATH_NS}">{inner}</m:oMath>"#)
}

/// `<m:r><m:t>text</m:t></m:r>`
pub fn r(text: &str) -> String {
    format!("<m:r><m:t>{text}</m:t></m:r>")
}

/// A math run with `m:scr` / `m:sty` properties.
pub fn styled_r(text: &str, scr: Option<&str>, sty: Option<&str>) -> String {
    let mut rpr = String::new();
    if let Some(scr) = scr {
        rpr.push_str(&format!(r#"<m:scr m:val="{scr}"/>"#));
    }
    if let Some(sty) = sty {
        rpr.push_str(&format!(r#"<m:sty m:val="{sty}"/>"#));
    }
    format!("<m:r><m:rPr>{rpr}</m:rPr><m:t>{text}</m:t></m:r>")
}

/// `<m:tag>inner</m:tag>`
pub fn el(tag: &str, inner: &str) -> String {
    format!("<m:{tag}>{inner}</m:{tag}>")
}

/// `<m:tag m:val="val"/>`
pub fn val(tag: &str, val: &str) -> String {
    format!(r#"<m:{tag} m:val="{val}"/>"#)
}

pub fn run(text: &str) -> MathNode {
    MathNode::run(text)
}

pub fn root(children: Vec<MathNode>) -> MathNode {
    MathNode::Root(children)
}

pub fn double_struck(text: &str) -> MathNode {
    MathNode::styled_run(
        text,
        RunStyle {
            script: Some(ScriptKind::DoubleStruck),
            weight: None,
        },
    )
}

pub fn bold(text: &str) -> MathNode {
    MathNode::styled_run(
        text,
        RunStyle {
            script: None,
            weight: Some(WeightKind::Bold),
        },
    )
}

/// A chain of `depth` nested boxes around a single run.
pub fn nested_boxes(depth: usize) -> MathNode {
    let mut node = run("x");
    for _ in 0..depth {
        node = MathNode::Box(vec![node]);
    }
    root(vec![node])
}

/// Run `f` on a thread with a 64 MiB stack, for trees deeper than a default
/// test thread can recurse through in debug builds.
pub fn with_big_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .expect("spawn test thread")
        .join()
        .expect("test thread panicked")
}

/// `depth` nested `m:box` elements around a single run, as OMML markup.
pub fn nested_box_xml(depth: usize) -> String {
    omath(&format!(
        "{}{}{}",
        "<m:box><m:e>".repeat(depth),
        r("x"),
        "</m:e></m:box>".repeat(depth)
    ))
}
