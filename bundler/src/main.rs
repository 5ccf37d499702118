//! Bundler command line entry point.
//!
//! `ENVIRONMENT` selects the mode the same way the web flavor's build
//! does: `development` (the default) produces an unminified bundle and
//! stays resident watching for changes; any other value produces a
//! minified bundle and exits.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bajeti_bundler::{concat, watch, BundleManifest, MANIFEST_FILE};

#[derive(Debug, Parser)]
#[command(name = "bajeti-bundler")]
#[command(about = "Bundles Bajeti's scripts, stylesheets and fonts for the web flavor")]
struct Args {
    /// Manifest file describing sources and output
    #[arg(short, long, default_value = MANIFEST_FILE)]
    manifest: PathBuf,

    /// Override the manifest's source root
    #[arg(long)]
    root: Option<PathBuf>,

    /// Override the manifest's output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Override the ENVIRONMENT variable
    #[arg(short, long)]
    environment: Option<String>,

    /// Build once in development mode without watching
    #[arg(long)]
    no_watch: bool,
}

/// Flag beats environment variable beats the development default.
fn resolve_environment(flag: Option<&str>, variable: Option<&str>) -> String {
    flag.or(variable).unwrap_or("development").to_string()
}

fn run(args: Args) -> Result<()> {
    let environment = resolve_environment(
        args.environment.as_deref(),
        std::env::var("ENVIRONMENT").ok().as_deref(),
    );

    let mut manifest = BundleManifest::load_or_default(&args.manifest)?;
    if let Some(root) = args.root {
        manifest.source_root = root;
    }
    if let Some(output) = args.output {
        manifest.output_dir = output;
    }

    if environment == "development" {
        let report = concat::build(&manifest, false)?;
        info!(
            "Initial bundle complete ({} scripts, {} stylesheets, {} fonts)",
            report.scripts_bundled, report.styles_bundled, report.fonts_copied
        );
        if args.no_watch {
            return Ok(());
        }
        watch::watch_and_rebuild(&manifest)
    } else {
        let report = concat::build(&manifest, true)?;
        info!(
            "Production build complete ({} scripts, {} stylesheets, {} fonts)",
            report.scripts_bundled, report.styles_bundled, report.fonts_copied
        );
        Ok(())
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run(args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["bajeti-bundler"]).unwrap();
        assert_eq!(args.manifest, PathBuf::from("bundle.toml"));
        assert!(args.root.is_none());
        assert!(args.output.is_none());
        assert!(args.environment.is_none());
        assert!(!args.no_watch);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "bajeti-bundler",
            "--manifest",
            "web/bundle.toml",
            "--root",
            "web/static",
            "--environment",
            "production",
            "--no-watch",
        ])
        .unwrap();
        assert_eq!(args.manifest, PathBuf::from("web/bundle.toml"));
        assert_eq!(args.root, Some(PathBuf::from("web/static")));
        assert_eq!(args.environment.as_deref(), Some("production"));
        assert!(args.no_watch);
    }

    #[test]
    fn test_environment_precedence() {
        assert_eq!(
            resolve_environment(Some("production"), Some("development")),
            "production"
        );
        assert_eq!(resolve_environment(None, Some("staging")), "staging");
        assert_eq!(resolve_environment(None, None), "development");
    }
}
