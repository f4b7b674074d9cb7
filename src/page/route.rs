//! Route parsing: which `(class, id)` a request asks for.
//!
//! Two forms are accepted:
//!
//! ```text
//! ?class=DE&id=1.1.9%20Soldering            query form, both decoded
//! /eng-portfolio/DE/labs/1.1.9%20Soldering  path form, base stripped
//! ```
//!
//! In path form the first segment is the class and the rest, rejoined with
//! `/`, is the id. Full URLs and bare relative paths work too.

use thiserror::Error;
use url::Url;

use crate::core::decode;

/// Placeholder origin for relative inputs; only path and query are read.
const ORIGIN: &str = "http://folio.invalid/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no class/id route in `{input}`")]
    Invalid { input: String },
}

/// A parsed page route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub cls: String,
    pub id: String,
}

impl Route {
    pub fn new(cls: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            cls: cls.into(),
            id: id.into(),
        }
    }

    /// Parse a URL-like route.
    ///
    /// `base` must already be normalized (leading and trailing `/`). When
    /// `allow` is non-empty, a path-form class outside it fails the same way
    /// as a missing route.
    pub fn parse(input: &str, base: &str, allow: &[String]) -> Result<Self, RouteError> {
        let invalid = || RouteError::Invalid {
            input: input.to_string(),
        };

        let url = Url::parse(input)
            .or_else(|_| Url::parse(ORIGIN).and_then(|origin| origin.join(input)))
            .map_err(|_| invalid())?;

        if let Some(route) = Self::from_query(&url) {
            return Ok(route);
        }

        let decoded = decode(url.path());
        let mut path: &str = &decoded;
        if base != "/"
            && let Some(rest) = path.strip_prefix(base)
        {
            path = rest;
        }

        let mut parts = path.trim_matches('/').split('/');
        let cls = parts.next().filter(|c| !c.is_empty()).ok_or_else(invalid)?;
        let id = parts.collect::<Vec<_>>().join("/");
        if id.is_empty() {
            return Err(invalid());
        }
        if !allow.is_empty() && !allow.iter().any(|c| c == cls) {
            return Err(invalid());
        }

        Ok(Self::new(cls, id))
    }

    fn from_query(url: &Url) -> Option<Self> {
        let mut cls = None;
        let mut id = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "class" if cls.is_none() => cls = Some(value.into_owned()),
                "id" if id.is_none() => id = Some(value.into_owned()),
                _ => {}
            }
        }
        match (cls, id) {
            (Some(cls), Some(id)) if !cls.is_empty() && !id.is_empty() => Some(Self::new(cls, id)),
            _ => None,
        }
    }
}
