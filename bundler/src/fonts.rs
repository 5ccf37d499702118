//! Font passthrough.
//!
//! Fonts are never concatenated; the whole `fonts/` tree is mirrored into
//! the output directory so `@font-face` declarations in the bundled CSS
//! keep resolving. An absent source tree is not an error.

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::manifest::BundleManifest;

/// Mirror `fonts/` under the output directory, returning the number of
/// files copied.
pub fn copy_fonts(manifest: &BundleManifest) -> Result<usize> {
    let source = manifest.fonts_dir();
    if !source.is_dir() {
        debug!("No fonts directory at {}", source.display());
        return Ok(0);
    }

    let destination = manifest.output_fonts_dir();
    let mut copied = 0;

    for entry in WalkDir::new(&source)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&source)
            .with_context(|| format!("Font path escapes {}", source.display()))?;
        let target = destination.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy font to {}", target.display()))?;
        debug!("Copied font {}", relative.display());
        copied += 1;
    }

    Ok(copied)
}
