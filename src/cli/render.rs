//! Render one route without building the whole site.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::assemble::Assembler;
use crate::config::SiteConfig;
use crate::log;
use crate::render::SniffProbe;
use crate::source::{FsSource, Providers};

/// Render `route` and print the page, or write it to `output`.
pub fn render_route(route: &str, output: Option<&Path>, config: &SiteConfig) -> Result<()> {
    let providers = Providers::new(Arc::new(FsSource::new(&config.build.root)));
    let probe = SniffProbe::new(&config.build.root);
    let assembler = Assembler::new(&providers, config).with_probe(&probe);

    let page = assembler.render_route(route);
    if page.is_error() {
        log!("render"; "{}: {}", route, page.title);
    }
    let html = assembler.document(page);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{html}")?;
        }
    }
    Ok(())
}
