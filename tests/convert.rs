mod common;

use common::{MATH_NS, el, nested_box_xml, omath, r, styled_r, val};
use omml2latex::{
    Error, MathMode, REQUIRED_PACKAGES, TranspileOptions, convert_omml, convert_omml_lossy,
    convert_omml_with, omml, transpile,
};

fn inline(inner: &str) -> String {
    common::init_logging();
    let xml = omath(inner);
    let latex = convert_omml(&xml, MathMode::Inline).expect("convert");
    latex
        .strip_prefix('$')
        .and_then(|s| s.strip_suffix('$'))
        .expect("inline delimiters")
        .to_string()
}

#[test]
fn math_modes() {
    let xml = omath(&r("x"));
    assert_eq!(convert_omml(&xml, MathMode::Inline).unwrap(), "$x$");
    assert_eq!(convert_omml(&xml, MathMode::Display).unwrap(), "\\[\nx\n\\]");
    assert_eq!(
        convert_omml(&xml, MathMode::Equation).unwrap(),
        "\\begin{equation}\nx\n\\end{equation}"
    );
    assert_eq!(REQUIRED_PACKAGES, ["amsmath", "amssymb", "mathtools"]);
}

#[test]
fn quadratic_formula() {
    let radical = el(
        "rad",
        &format!(
            "{}{}{}",
            el("radPr", &val("degHide", "1")),
            el("deg", ""),
            el(
                "e",
                &format!(
                    "{}{}",
                    el("sSup", &format!("{}{}", el("e", &r("b")), el("sup", &r("2")))),
                    r("−4ac")
                )
            )
        ),
    );
    let fraction = el(
        "f",
        &format!(
            "{}{}",
            el("num", &format!("{}{}", r("−b±"), radical)),
            el("den", &r("2a"))
        ),
    );
    assert_eq!(
        inline(&format!("{}{}", r("x="), fraction)),
        "x=\\dfrac{-b\\pm\\sqrt{b^{2}-4ac}}{2a}"
    );
}

#[test]
fn sums_and_integrals() {
    let sum = el(
        "nary",
        &format!(
            "{}{}{}{}",
            el("naryPr", &format!("{}{}", val("chr", "∑"), val("limLoc", "undOvr"))),
            el("sub", &r("i=1")),
            el("sup", &r("n")),
            el("e", &r("i"))
        ),
    );
    assert_eq!(inline(&sum), "\\sum_{i=1}^{n} i");

    let integral = el(
        "nary",
        &format!(
            "{}{}{}",
            el("sub", &r("0")),
            el("sup", &r("1")),
            el("e", &r("f(x)dx"))
        ),
    );
    assert_eq!(inline(&integral), "\\int_{0}^{1} f(x)dx");
}

#[test]
fn bracketed_matrix() {
    let row = |a: &str, b: &str| el("mr", &format!("{}{}", el("e", &r(a)), el("e", &r(b))));
    let matrix = el("m", &format!("{}{}", row("1", "0"), row("0", "1")));
    let bracketed = el(
        "d",
        &format!(
            "{}{}",
            el("dPr", &format!("{}{}", val("begChr", "["), val("endChr", "]"))),
            el("e", &matrix)
        ),
    );
    assert_eq!(
        inline(&bracketed),
        "\\left[ \\begin{matrix} 1 & 0 \\\\ 0 & 1 \\end{matrix} \\right]"
    );
}

#[test]
fn delimiter_content_comes_from_direct_slots_only() {
    let squared = el("sSup", &format!("{}{}", el("e", &r("x")), el("sup", &r("2"))));
    let parens = el("d", &el("e", &squared));
    assert_eq!(inline(&parens), "\\left( x^{2} \\right)");

    let set = el(
        "d",
        &format!(
            "{}{}{}",
            el(
                "dPr",
                &format!("{}{}{}", val("begChr", "{"), val("sepChr", ","), val("endChr", "}"))
            ),
            el("e", &r("a")),
            el("e", &r("b"))
        ),
    );
    assert_eq!(inline(&set), "\\left\\{ a,b \\right\\}");
}

#[test]
fn functions_and_limits() {
    let sine = el(
        "func",
        &format!("{}{}", el("fName", &r("sin")), el("e", &r("θ"))),
    );
    assert_eq!(inline(&sine), "\\sin \\theta");

    let limit = el(
        "func",
        &format!(
            "{}{}",
            el(
                "fName",
                &el("limLow", &format!("{}{}", el("e", &r("lim")), el("lim", &r("n→∞"))))
            ),
            el("e", &r("a"))
        ),
    );
    assert_eq!(inline(&limit), "\\underset{n\\rightarrow\\infty}{\\lim} a");
}

#[test]
fn run_styles() {
    assert_eq!(
        inline(&format!("{}{}", r("x"), styled_r("∈R", Some("double-struck"), None))),
        "x\\in \\mathbb{R}"
    );
    assert_eq!(inline(&styled_r("F", Some("script"), Some("b"))), "\\mathcal{F}");
    assert_eq!(inline(&styled_r("g", Some("fraktur"), None)), "\\mathfrak{g}");
    assert_eq!(inline(&styled_r("v", None, Some("b"))), "\\mathbf{v}");
    assert_eq!(inline(&styled_r("v", None, Some("bi"))), "\\boldsymbol{v}");
    assert_eq!(inline(&styled_r("v", Some("roman"), Some("p"))), "v");
    assert_eq!(inline(&styled_r("v", Some("unknown"), None)), "v");
}

#[test]
fn accents_bars_and_boxes() {
    let tilde = el(
        "acc",
        &format!("{}{}", el("accPr", &val("chr", "\u{0303}")), el("e", &r("a"))),
    );
    assert_eq!(inline(&tilde), "\\tilde{a}");

    let hat = el("acc", &el("e", &r("xy")));
    assert_eq!(inline(&hat), "\\widehat{xy}");

    let under = el(
        "bar",
        &format!("{}{}", el("barPr", &val("pos", "bot")), el("e", &r("x"))),
    );
    assert_eq!(inline(&under), "\\underline{x}");

    let brace = el(
        "groupChr",
        &format!(
            "{}{}",
            el("groupChrPr", &format!("{}{}", val("chr", "⏞"), val("pos", "top"))),
            el("e", &r("a+b"))
        ),
    );
    assert_eq!(inline(&brace), "\\overbrace{a+b}");

    assert_eq!(inline(&el("borderBox", &el("e", &r("E")))), "\\boxed{E}");
    assert_eq!(inline(&el("phant", &el("e", &r("x")))), "\\phantom{x}");
    assert_eq!(inline(&el("box", &el("e", &r("dx")))), "dx");
}

#[test]
fn prescripts_and_equation_arrays() {
    let pre = el(
        "sPre",
        &format!(
            "{}{}{}",
            el("sub", &r("6")),
            el("sup", &r("14")),
            el("e", &r("C"))
        ),
    );
    assert_eq!(inline(&pre), "{}_{6}^{14}C");

    let arr = el("eqArr", &format!("{}{}", el("e", &r("x=1")), el("e", &r("y=2"))));
    assert_eq!(
        inline(&arr),
        "\\begin{aligned} x=1 \\\\ y=2 \\end{aligned}"
    );
}

#[test]
fn fraction_types() {
    let frac = |kind: Option<&str>| {
        let props = kind.map(|k| el("fPr", &val("type", k))).unwrap_or_default();
        el(
            "f",
            &format!("{}{}{}", props, el("num", &r("a")), el("den", &r("b"))),
        )
    };
    assert_eq!(inline(&frac(None)), "\\frac{a}{b}");
    assert_eq!(inline(&frac(Some("bar"))), "\\frac{a}{b}");
    assert_eq!(inline(&frac(Some("noBar"))), "\\binom{a}{b}");
    assert_eq!(inline(&frac(Some("skw"))), "{a}/{b}");
    assert_eq!(inline(&frac(Some("lin"))), "{a}/{b}");
}

#[test]
fn unknown_and_foreign_elements() {
    assert_eq!(inline(&el("futureThing", &r("a"))), "a");
    let bookmark = r#"<w:bookmarkStart xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" w:id="0" w:name="eq"/>"#;
    assert_eq!(inline(&format!("{bookmark}{}", r("y"))), "y");
    assert_eq!(inline(&format!("{}{}", el("ctrlPr", ""), r("z"))), "z");
}

#[test]
fn whitespace_cleanup() {
    let spaced = omath(&r("a  +  b"));
    assert_eq!(convert_omml(&spaced, MathMode::Inline).unwrap(), "$a + b$");

    let padded = omath(&el(
        "f",
        &format!("{}{}", el("num", &r(" a ")), el("den", &r("b"))),
    ));
    assert_eq!(convert_omml(&padded, MathMode::Inline).unwrap(), "$\\frac{a}{b}$");

    let raw = TranspileOptions::default().with_cleanup(false);
    assert_eq!(
        convert_omml_with(&padded, MathMode::Inline, &raw).unwrap(),
        "$\\frac{ a }{b}$"
    );
}

#[test]
fn unreadable_formulas() {
    common::init_logging();
    assert!(matches!(
        convert_omml("<m:oMath", MathMode::Inline),
        Err(Error::Xml(_))
    ));
    let paragraph = r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
    assert!(matches!(
        convert_omml(paragraph, MathMode::Inline),
        Err(Error::NotMath(_))
    ));
    assert_eq!(convert_omml_lossy("<m:oMath", MathMode::Inline), "$$");
    assert_eq!(convert_omml_lossy("not xml", MathMode::Display), "\\[\n\n\\]");
    assert_eq!(convert_omml_lossy(&omath(&r("x")), MathMode::Inline), "$x$");
}

#[test]
fn unprefixed_fragments_are_accepted() {
    let xml = "<oMath><f><num><r><t>1</t></r></num><den><r><t>2</t></r></den></f></oMath>";
    assert_eq!(convert_omml(xml, MathMode::Inline).unwrap(), "$\\frac{1}{2}$");
}

#[test]
fn display_paragraph_splits_into_blocks() {
    let xml = format!(
        r#"<m:oMathPara xmlns:m="{MATH_NS}"><m:oMathParaPr/><m:oMath>{}</m:oMath><m:oMath>{}</m:oMath></m:oMathPara>"#,
        r("a=1"),
        r("b=2")
    );
    let blocks = omml::parse_paragraph(&xml).unwrap();
    let latex: Vec<String> = blocks.iter().map(transpile).collect();
    assert_eq!(latex, ["a=1", "b=2"]);

    let single = omml::parse_paragraph(&omath(&r("c"))).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(transpile(&single[0]), "c");
}

#[test]
fn deeply_nested_formulas_degrade_to_empty_math() {
    common::init_logging();
    let xml = nested_box_xml(300);
    assert!(matches!(
        convert_omml(&xml, MathMode::Inline),
        Err(Error::TooDeep(_))
    ));
    assert_eq!(convert_omml_lossy(&xml, MathMode::Inline), "$$");

    let hostile = nested_box_xml(5000);
    assert_eq!(convert_omml_lossy(&hostile, MathMode::Display), "\\[\n\n\\]");
    assert!(matches!(
        omml::parse_paragraph(&hostile),
        Err(Error::TooDeep(_))
    ));
}

#[test]
fn transpile_depth_cap_applies_to_readable_formulas() {
    common::init_logging();
    let xml = nested_box_xml(20);
    assert_eq!(convert_omml(&xml, MathMode::Inline).unwrap(), "$x$");

    let shallow = TranspileOptions::default().with_max_depth(10);
    assert_eq!(
        convert_omml_with(&xml, MathMode::Inline, &shallow).unwrap(),
        "$$"
    );
}
