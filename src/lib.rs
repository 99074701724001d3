mod error;
pub mod latex;
pub mod model;
pub mod omml;

pub use error::Error;
pub use latex::{TranspileOptions, transpile, transpile_with};
pub use model::{MathMode, MathNode};

use std::time::Instant;

/// LaTeX packages the emitted math relies on (`\binom`, `\mathbb`,
/// `\boxed`, `\underset`, ...). The document writer should load all of them.
pub const REQUIRED_PACKAGES: [&str; 3] = ["amsmath", "amssymb", "mathtools"];

/// Convert one OMML formula to LaTeX wrapped for `mode`.
pub fn convert_omml(xml: &str, mode: MathMode) -> Result<String, Error> {
    convert_omml_with(xml, mode, &TranspileOptions::default())
}

/// [`convert_omml`] with explicit `options` (transpile depth cap, cleanup).
pub fn convert_omml_with(
    xml: &str,
    mode: MathMode,
    options: &TranspileOptions,
) -> Result<String, Error> {
    let t0 = Instant::now();

    let tree = omml::parse(xml)?;
    let t_parse = t0.elapsed();

    let mut math = transpile_with(&tree, options);
    if options.cleanup {
        math = latex::cleanup::clean_latex(&math);
    }
    let t_total = t0.elapsed();

    log::debug!(
        "Timing: parse={:.3}ms, transpile={:.3}ms, total={:.3}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_total - t_parse).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        math.len(),
    );

    Ok(mode.wrap(&math))
}

/// Like [`convert_omml`], but a formula that cannot be read is reported as a
/// warning and replaced by empty math instead of failing the document.
pub fn convert_omml_lossy(xml: &str, mode: MathMode) -> String {
    match convert_omml(xml, mode) {
        Ok(latex) => latex,
        Err(e) => {
            log::warn!("OMML conversion failed: {e}, substituting empty math");
            mode.wrap("")
        }
    }
}
