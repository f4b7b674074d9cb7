//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - Clean and create the output directory
//! - **Manifest** - Regenerate `pages/manifest.json` when enabled
//! - **Render** - Every manifest page in parallel
//! - **Listings** - Home, certifications and elements pages
//! - **Assets** - Static files and the default stylesheet

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::assemble::{Assembler, shell};
use crate::config::SiteConfig;
use crate::generator::{assets, manifest};
use crate::listing::{CERTIFICATIONS_PAGE, HOME_PAGE, Listings, elements_page_name};
use crate::logger::ProgressLine;
use crate::page::{Manifest, Route};
use crate::render::SniffProbe;
use crate::source::{FsSource, Providers};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// What one build produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub pages: usize,
    pub failed: usize,
    pub listings: usize,
    pub assets: usize,
}

/// Build the whole site into `build.output`.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildStats> {
    init_output(config)?;

    let providers = Providers::new(Arc::new(FsSource::new(&config.build.root)));
    if config.build.manifest {
        let manifest = manifest::refresh(&config.build.pages_dir())?;
        providers.manifest.invalidate();
        if !quiet {
            log!("manifest"; "{} across {} classes", plural_count(manifest.len(), "page"), manifest.classes().count());
        }
    }

    let probe = SniffProbe::new(&config.build.root);
    let assembler = Assembler::new(&providers, config).with_probe(&probe);

    let manifest = providers.manifest.get();
    if let Err(e) = &manifest {
        log!("warning"; "{}", e);
    }

    let routes = manifest
        .as_deref()
        .map(|m| collect_routes(m, config))
        .unwrap_or_default();
    let listings = listing_pages(config);

    let progress = (!quiet).then(|| {
        ProgressLine::new(&[("pages", routes.len()), ("listings", listings.len())])
    });

    let failed = AtomicUsize::new(0);
    routes.par_iter().try_for_each(|route| -> Result<()> {
        let page = assembler.render(route);
        if page.is_error() {
            failed.fetch_add(1, Ordering::Relaxed);
            log!("warning"; "{}/{}: {}", route.cls, route.id, page.title);
        }
        if let Some(path) = page_output_path(&config.build.output, route) {
            write_file(&path, &assembler.document(page))?;
        }
        if let Some(p) = &progress {
            p.inc("pages");
        }
        Ok(())
    })?;

    let listing_bodies = Listings::new(config, manifest.as_deref());
    for (file, title) in &listings {
        let body = match file.as_str() {
            HOME_PAGE => listing_bodies.home(),
            CERTIFICATIONS_PAGE => listing_bodies.certifications(),
            _ => listing_bodies.elements(),
        };
        let html = shell::document(&config.site, title, body);
        write_file(&config.build.output.join(file), &html)?;
        if let Some(p) = &progress {
            p.inc("listings");
        }
    }

    let assets = assets::copy_static(config, config.build.clean)?;

    if let Some(p) = progress {
        p.finish();
    }

    let stats = BuildStats {
        pages: routes.len(),
        failed: failed.into_inner(),
        listings: listings.len(),
        assets,
    };
    if !quiet {
        log!("build"; "{}, {} failed, {} copied", plural_count(stats.pages, "page"), stats.failed, plural_count(stats.assets, "asset"));
    }
    Ok(stats)
}

fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.output_contains_root() {
        bail!(
            "output directory {} contains the site root {}",
            output.display(),
            config.build.root.display()
        );
    }
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output).with_context(|| format!("Failed to create {}", output.display()))
}

/// Routes for every manifest entry whose class passes the allowlist.
fn collect_routes(manifest: &Manifest, config: &SiteConfig) -> Vec<Route> {
    manifest
        .iter()
        .filter(|(cls, entry)| {
            let allowed = config.site.allows_class(cls);
            if !allowed {
                debug!("build"; "skipping {}/{}: class not in site.classes", cls, entry.id);
            }
            allowed
        })
        .map(|(cls, entry)| Route::new(cls, entry.id.clone()))
        .collect()
}

/// `(file, title)` of every listing page to write.
fn listing_pages(config: &SiteConfig) -> Vec<(String, String)> {
    let mut pages = vec![
        (HOME_PAGE.to_string(), String::new()),
        (
            CERTIFICATIONS_PAGE.to_string(),
            config.listing.certifications.clone(),
        ),
    ];
    let elements = &config.listing.elements;
    if elements.enable {
        pages.push((
            elements_page_name(&elements.class),
            format!("{} Elements", elements.class),
        ));
    }
    pages
}

/// `{output}/{class}/{id}/index.html`, or `None` when a segment would
/// escape the output directory.
pub fn page_output_path(output: &Path, route: &Route) -> Option<PathBuf> {
    let mut path = output.to_path_buf();
    for segment in std::iter::once(route.cls.as_str()).chain(route.id.split('/')) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => path.push(part),
            _ => {
                log!("warning"; "refusing to write {}/{}", route.cls, route.id);
                return None;
            }
        }
    }
    Some(path.join("index.html"))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
