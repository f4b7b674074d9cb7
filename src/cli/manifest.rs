//! `folio manifest`: regenerate the page manifest.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::generator::manifest;
use crate::log;
use crate::utils::plural::plural_count;

pub fn run_manifest(config: &SiteConfig, stdout: bool) -> Result<()> {
    let pages_dir = config.build.pages_dir();

    if stdout {
        println!("{}", manifest::to_json(&manifest::scan(&pages_dir)?)?);
        return Ok(());
    }

    let manifest = manifest::refresh(&pages_dir)?;
    log!(
        "manifest";
        "wrote {} ({} across {} classes)",
        config.build.manifest_path().display(),
        plural_count(manifest.len(), "page"),
        manifest.classes().count()
    );
    Ok(())
}
