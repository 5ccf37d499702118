//! Ordered Concatenation
//!
//! Produces `index.js` and `index.css` from the manifest's source lists.
//! Scripts are joined in literal list order inside a single
//! immediately-invoked wrapper; each source's own `DOMContentLoaded`
//! opener is stripped by text substitution first, since every file carries
//! its own startup listener and the bundle must register none of them.
//! A footer then exposes the configured entry points on `window`, guarded
//! so a missing function degrades to a console warning.
//!
//! Listed files that do not exist are skipped with a warning, never an
//! error; the web flavor's pages differ in which scripts they ship.

use std::fs;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::fonts;
use crate::manifest::BundleManifest;
use crate::minify;

const BUNDLE_HEADER: &str = "// Bajeti Application Bundle\n(function() {\n\n";
const OPENER_REPLACEMENT: &str = "// DOMContentLoaded removed for bundling";

/// Matches a `document.addEventListener("DOMContentLoaded", ... {` opener
/// up to and including its body brace, on one line.
fn dom_ready_opener() -> &'static Regex {
    static OPENER: OnceLock<Regex> = OnceLock::new();
    OPENER.get_or_init(|| {
        Regex::new(r#"document\.addEventListener\s*\(\s*["']DOMContentLoaded["'].*?\{"#).unwrap()
    })
}

/// Counts from one bundle build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub scripts_bundled: usize,
    pub scripts_skipped: usize,
    pub styles_bundled: usize,
    pub styles_skipped: usize,
    pub fonts_copied: usize,
}

/// Build the whole bundle: scripts, stylesheets and fonts.
pub fn build(manifest: &BundleManifest, minified: bool) -> Result<BundleReport> {
    fs::create_dir_all(&manifest.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            manifest.output_dir.display()
        )
    })?;

    let mut report = BundleReport::default();

    let script_bundle = concat_scripts(manifest, &mut report)?;
    let script_bundle = if minified {
        minify::minify_js(&script_bundle)
    } else {
        script_bundle
    };
    let js_path = manifest.bundled_js();
    fs::write(&js_path, script_bundle)
        .with_context(|| format!("Failed to write {}", js_path.display()))?;

    let style_bundle = concat_styles(manifest, &mut report)?;
    let style_bundle = if minified {
        minify::minify_css(&style_bundle)
    } else {
        style_bundle
    };
    let css_path = manifest.bundled_css();
    fs::write(&css_path, style_bundle)
        .with_context(|| format!("Failed to write {}", css_path.display()))?;

    report.fonts_copied = fonts::copy_fonts(manifest)?;

    info!(
        "Bundle written to {} ({} scripts, {} stylesheets, {} fonts)",
        manifest.output_dir.display(),
        report.scripts_bundled,
        report.styles_bundled,
        report.fonts_copied
    );

    Ok(report)
}

fn concat_scripts(manifest: &BundleManifest, report: &mut BundleReport) -> Result<String> {
    let mut bundle = String::from(BUNDLE_HEADER);

    for name in &manifest.scripts {
        let path = manifest.script_path(name);
        if !path.exists() {
            warn!("Skipping missing script {}", path.display());
            report.scripts_skipped += 1;
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let cleaned = dom_ready_opener().replace_all(&content, OPENER_REPLACEMENT);
        bundle.push_str(&cleaned);
        bundle.push_str("\n\n");
        report.scripts_bundled += 1;
        debug!("Bundled script {}", path.display());
    }

    bundle.push_str(&window_exports(&manifest.globals));
    Ok(bundle)
}

fn concat_styles(manifest: &BundleManifest, report: &mut BundleReport) -> Result<String> {
    let mut bundle = String::new();

    for name in &manifest.styles {
        let path = manifest.style_path(name);
        if !path.exists() {
            warn!("Skipping missing stylesheet {}", path.display());
            report.styles_skipped += 1;
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;
        bundle.push_str(&content);
        bundle.push_str("\n\n");
        report.styles_bundled += 1;
        debug!("Bundled stylesheet {}", path.display());
    }

    Ok(bundle)
}

/// The wrapper footer: each entry point is attached to `window` behind a
/// `typeof` guard, then the wrapper is closed and invoked.
fn window_exports(globals: &[String]) -> String {
    let mut footer = String::from("\n// Make functions globally available\n");

    for name in globals {
        footer.push_str(&format!(
            "window.{name} = typeof {name} !== 'undefined' ? {name} : function() {{ console.warn('{name} not found') }};\n"
        ));
    }

    footer.push_str(
        "\nconsole.log('Bajeti bundle loaded - functions attached to window');\n})(); // End IIFE\n",
    );
    footer
}
