//! Video embeds: YouTube player, native `<video>`, or a plain frame.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::html::escape_attr;

static YOUTUBE_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be|youtube\.com").unwrap());
static YOUTUBE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());
static DIRECT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(mp4|webm|ogg)(\?|$)").unwrap());

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// YouTube embed URL for a watch or short link.
pub fn youtube_embed(url: &str) -> Option<String> {
    if !YOUTUBE_HOST.is_match(url) {
        return None;
    }
    let id = YOUTUBE_ID.captures(url)?.get(1)?.as_str();
    Some(format!("https://www.youtube.com/embed/{id}"))
}

pub fn embed(url: &str, title: &str) -> String {
    if YOUTUBE_HOST.is_match(url) {
        let src = youtube_embed(url).unwrap_or_else(|| url.to_string());
        return format!(
            r#"<iframe class="video-frame" src="{}" title="{}" allow="{YOUTUBE_ALLOW}" allowfullscreen></iframe>"#,
            escape_attr(&src),
            escape_attr(title)
        );
    }
    if DIRECT_FILE.is_match(url) {
        return format!(
            r#"<video class="video-frame" controls src="{}"></video>"#,
            escape_attr(url)
        );
    }
    format!(
        r#"<iframe class="video-frame" src="{}" title="{}" allowfullscreen></iframe>"#,
        escape_attr(url),
        escape_attr(title)
    )
}
