//! Core URL helpers shared by routing, rendering and listings.

mod url;

pub use url::{asset_url, decode, encode_component, encode_path, is_http, normalize_base, page_href};
