//! Bundle Manifest
//!
//! What gets bundled and where it lives. The defaults mirror the product's
//! static tree (`app/static` with `js/`, `css/` and `fonts/` subtrees,
//! output under `app/static/dist`); a `bundle.toml` can override any field
//! and inherits the defaults for the rest.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "bundle.toml";

/// Source lists and paths for one bundle build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleManifest {
    /// Directory holding the `js/`, `css/` and `fonts/` subtrees
    pub source_root: PathBuf,

    /// Directory receiving `index.js`, `index.css` and `fonts/`
    pub output_dir: PathBuf,

    /// Script files bundled in this exact order, relative to `<source_root>/js`
    pub scripts: Vec<String>,

    /// Stylesheets bundled in this exact order, relative to `<source_root>/css`
    pub styles: Vec<String>,

    /// Function names the bundle footer exposes on `window`
    pub globals: Vec<String>,
}

impl Default for BundleManifest {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("app/static"),
            output_dir: PathBuf::from("app/static/dist"),
            scripts: [
                "main.js",
                "home.js",
                "bajeti.js",
                "forgot_password.js",
                "login.js",
                "profile.js",
                "register.js",
            ]
            .map(String::from)
            .to_vec(),
            styles: [
                "font.css",
                "alert.css",
                "analytics.css",
                "forgot_password.css",
                "home.css",
                "login.css",
                "main.css",
                "modal.css",
                "palette.css",
                "profile.css",
                "register.css",
            ]
            .map(String::from)
            .to_vec(),
            globals: [
                "launchNav",
                "closeNav",
                "generateModal",
                "showAlert",
                "showConfirm",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl BundleManifest {
    /// Parse a manifest file. Fields the file omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
        info!("Loaded bundle manifest from {}", path.display());
        Ok(manifest)
    }

    /// Load the manifest if the file exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No manifest at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn script_path(&self, name: &str) -> PathBuf {
        self.source_root.join("js").join(name)
    }

    pub fn style_path(&self, name: &str) -> PathBuf {
        self.source_root.join("css").join(name)
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.source_root.join("fonts")
    }

    pub fn bundled_js(&self) -> PathBuf {
        self.output_dir.join("index.js")
    }

    pub fn bundled_css(&self) -> PathBuf {
        self.output_dir.join("index.css")
    }

    pub fn output_fonts_dir(&self) -> PathBuf {
        self.output_dir.join("fonts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_lists() {
        let manifest = BundleManifest::default();
        assert_eq!(manifest.scripts.first().map(String::as_str), Some("main.js"));
        assert_eq!(manifest.scripts.len(), 7);
        assert_eq!(manifest.styles.len(), 11);
        assert!(manifest.globals.contains(&"generateModal".to_string()));
        assert_eq!(manifest.bundled_js(), PathBuf::from("app/static/dist/index.js"));
    }

    #[test]
    fn test_partial_manifest_keeps_default_lists() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"build/out\"").unwrap();

        let manifest = BundleManifest::load(file.path()).unwrap();
        assert_eq!(manifest.output_dir, PathBuf::from("build/out"));
        // Unset fields inherit the defaults, not empty lists
        assert_eq!(manifest.scripts.len(), 7);
        assert_eq!(manifest.source_root, PathBuf::from("app/static"));
    }

    #[test]
    fn test_full_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "source_root = \"web\"\noutput_dir = \"web/dist\"\nscripts = [\"app.js\"]\nstyles = [\"app.css\"]\nglobals = []"
        )
        .unwrap();

        let manifest = BundleManifest::load(file.path()).unwrap();
        assert_eq!(manifest.scripts, vec!["app.js".to_string()]);
        assert_eq!(manifest.script_path("app.js"), PathBuf::from("web/js/app.js"));
        assert!(manifest.globals.is_empty());
    }

    #[test]
    fn test_missing_manifest_falls_back_to_defaults() {
        let manifest =
            BundleManifest::load_or_default(Path::new("/nonexistent/bundle.toml")).unwrap();
        assert_eq!(manifest, BundleManifest::default());
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "scripts = \"not-a-list\"").unwrap();
        assert!(BundleManifest::load(file.path()).is_err());
    }
}
