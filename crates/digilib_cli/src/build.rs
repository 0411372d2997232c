//! `digilib build`: synthesize every component declared in a manifest.
//!
//! Components are synthesized in parallel against one shared interner; the
//! report keeps manifest order.

use std::path::Path;

use digilib_common::Interner;
use digilib_config::{LibraryConfig, ResolvedComponent};
use digilib_ir::Component;
use rayon::prelude::*;

use crate::report::{self, ComponentReport};
use crate::{BuildArgs, GlobalArgs, ReportFormat};

/// Runs the `digilib build` command. Returns exit code 0 on success.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load(args.config.as_deref())?;
    let resolved = digilib_config::resolve_components(&config)?;

    if !global.quiet {
        eprintln!(
            "   Building {} v{} ({} components)",
            config.library.name,
            config.library.version,
            resolved.len()
        );
    }
    tracing::info!(
        library = %config.library.name,
        components = resolved.len(),
        "building library"
    );

    let interner = Interner::new();
    let components = synthesize_all(&interner, &resolved)?;

    let format = args
        .format
        .unwrap_or_else(|| ReportFormat::from(config.output.format));
    let reports: Vec<ComponentReport> = components
        .iter()
        .map(|c| ComponentReport::new(c, &interner, config.output.qualify_names))
        .collect();
    let rendered = report::render(&reports, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "wrote report");
            if !global.quiet {
                eprintln!("      Wrote {}", path.display());
            }
        }
        None => print!("{rendered}"),
    }
    Ok(0)
}

/// Loads the manifest from a file, a directory, or the current directory.
fn load(config: Option<&Path>) -> Result<LibraryConfig, Box<dyn std::error::Error>> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let config = if path.is_dir() {
        digilib_config::load_config(&path)?
    } else {
        digilib_config::load_config_file(&path)?
    };
    Ok(config)
}

/// Synthesizes every resolved component, in parallel, preserving order.
pub fn synthesize_all(
    interner: &Interner,
    resolved: &[ResolvedComponent],
) -> digilib_common::LogicResult<Vec<Component>> {
    resolved
        .par_iter()
        .map(|r| digilib_synth::synthesize(interner, &r.name, &r.spec))
        .collect()
}
