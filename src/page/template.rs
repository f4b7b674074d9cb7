//! `{key}` placeholder expansion for titles and media paths.
//!
//! Unknown keys are kept verbatim, so `"{foo} {file}"` with only `file`
//! known expands to `"{foo} report"`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Source of placeholder values.
pub trait TemplateVars {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl TemplateVars for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| Cow::Borrowed(*v))
    }
}

impl<const N: usize> TemplateVars for [(&str, &str); N] {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

/// Replace every known `{key}` in `template`.
pub fn expand<V: TemplateVars + ?Sized>(template: &str, vars: &V) -> String {
    if !template.contains('{') {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            vars.lookup(key)
                .map_or_else(|| caps[0].to_string(), Cow::into_owned)
        })
        .into_owned()
}
