//! Files produced around the rendered pages.
//!
//! - **Manifest**: `pages/manifest.json` from the page tree
//! - **Assets**: static files and the default stylesheet

pub mod assets;
pub mod manifest;
