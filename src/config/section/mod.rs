//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section  | Purpose                               |
//! |-----------|---------------|---------------------------------------|
//! | `build`   | `[build]`     | Site root, output, manifest refresh   |
//! | `listing` | `[listing]`   | Home, certifications, elements lists  |
//! | `render`  | `[render]`    | PDF embed defaults                    |
//! | `site`    | `[site]`      | Title, base path, class allowlist     |
//! | `slug`    | `[slug]`      | Anchor slug mode                      |

mod build;
mod listing;
mod render;
mod site;
mod slug;

pub use build::{BuildSectionConfig, MANIFEST_FILE, PAGES_DIR};
pub use listing::ListingSectionConfig;
pub use render::{PdfConfig, RenderSectionConfig};
pub use site::SiteSectionConfig;
pub use slug::{SlugConfig, SlugMode};
