//! `folio query`: search the manifest from the terminal.

use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::listing::search::{SearchHit, SearchQuery, search};
use crate::log;
use crate::source::{FsSource, Providers};
use crate::utils::plural::plural_count;

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let providers = Providers::new(Arc::new(FsSource::new(&config.build.root)));
    let manifest = providers.manifest.get().map_err(|e| anyhow!("{e}"))?;

    let query = SearchQuery {
        text: args.text.as_deref(),
        class: args.class.as_deref(),
        kind: args.kind.as_deref(),
        limit: args.limit,
    };
    let hits = search(&manifest, &query, &config.site.base);
    log!("query"; "found {}", plural_count(hits.len(), "result"));

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&hits)?
        } else {
            serde_json::to_string(&hits)?
        };
        println!("{json}");
    } else {
        for hit in &hits {
            println!("{}", text_row(hit));
        }
    }
    Ok(())
}

/// `CLASS/ID  TITLE  [TYPE]  DATE`, skipping empty fields.
fn text_row(hit: &SearchHit) -> String {
    let mut row = format!("{}/{}  {}", hit.cls, hit.entry.id, hit.entry.title);
    if !hit.entry.kind.is_empty() {
        row.push_str(&format!("  [{}]", hit.entry.kind));
    }
    if !hit.entry.date.is_empty() {
        row.push_str(&format!("  {}", hit.entry.date));
    }
    row
}
