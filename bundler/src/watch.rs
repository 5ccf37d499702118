//! Development watch mode.
//!
//! Watches the source root and rebuilds the unminified bundle whenever a
//! script, stylesheet or font changes. Editors fire bursts of events for a
//! single save, so events are debounced into one rebuild per burst. A
//! failed rebuild is logged and the loop keeps running; watch mode should
//! survive a half-saved file.

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::concat;
use crate::manifest::BundleManifest;

const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// True for event kinds that change file contents. Access and metadata
/// events would otherwise trigger rebuild storms on some platforms.
fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}

/// True when the path has an extension the bundle is built from.
fn is_bundle_source(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(
            ext.to_ascii_lowercase().as_str(),
            "js" | "css" | "woff" | "woff2" | "ttf" | "otf" | "eot"
        ),
        None => false,
    }
}

/// Watch the manifest's source root and rebuild on change. Blocks until
/// the watcher channel closes.
pub fn watch_and_rebuild(manifest: &BundleManifest) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            if is_content_change(&event.kind) && event.paths.iter().any(|p| is_bundle_source(p)) {
                let _ = tx.send(());
            }
        }
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(&manifest.source_root, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", manifest.source_root.display()))?;

    info!("Watching {} for changes", manifest.source_root.display());

    while rx.recv().is_ok() {
        // Drain the rest of the burst before rebuilding once.
        while rx.recv_timeout(DEBOUNCE_WINDOW).is_ok() {}
        debug!("Change detected, rebuilding");

        match concat::build(manifest, false) {
            Ok(report) => info!(
                "Rebuilt bundle ({} scripts, {} stylesheets)",
                report.scripts_bundled, report.styles_bundled
            ),
            Err(err) => warn!("Rebuild failed: {:#}", err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::path::PathBuf;

    #[test]
    fn test_only_modify_and_create_events_count() {
        assert!(is_content_change(&EventKind::Modify(ModifyKind::Any)));
        assert!(is_content_change(&EventKind::Create(CreateKind::Any)));
        assert!(!is_content_change(&EventKind::Access(AccessKind::Any)));
        assert!(!is_content_change(&EventKind::Any));
    }

    #[test]
    fn test_bundle_source_extensions() {
        assert!(is_bundle_source(&PathBuf::from("app/static/js/main.js")));
        assert!(is_bundle_source(&PathBuf::from("app/static/css/Main.CSS")));
        assert!(is_bundle_source(&PathBuf::from("fonts/rubik.woff2")));
        assert!(!is_bundle_source(&PathBuf::from("app/templates/home.html")));
        assert!(!is_bundle_source(&PathBuf::from("app/static/js")));
    }
}
