//! Bajeti Asset Bundler
//!
//! Builds the static bundle consumed by the Bajeti web flavor: a fixed,
//! ordered list of JavaScript sources concatenated inside one
//! immediately-invoked wrapper (`dist/index.js`), the stylesheets
//! concatenated into `dist/index.css`, and font assets copied alongside.
//!
//! `ENVIRONMENT=development` selects watch mode, rebuilding unminified
//! output on every source change; any other value produces a one-shot
//! minified production build. File lists and paths default to the
//! product's static-tree conventions and can be overridden through a
//! `bundle.toml` manifest.
//!
//! There is deliberately no dependency resolution, tree shaking or
//! incremental compilation; sources are bundled in the literal order the
//! manifest lists them, and listed files that do not exist are skipped.

pub mod concat;
pub mod fonts;
pub mod manifest;
pub mod minify;
pub mod watch;

pub use concat::{build, BundleReport};
pub use manifest::{BundleManifest, MANIFEST_FILE};
