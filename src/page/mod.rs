//! Page data model: manifest summaries, page documents, routes and the
//! per-render context used for template expansion.

mod context;
mod document;
mod route;
mod summary;
pub mod template;

pub use context::RenderContext;
pub use document::PageDocument;
pub use route::Route;
pub use summary::{Manifest, PageSummary};
