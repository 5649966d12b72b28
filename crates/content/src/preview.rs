use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::Project;

const PDF_VIEWER: &str = "https://mozilla.github.io/pdf.js/web/viewer.html";

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]+)")
        .expect("invalid youtube regex")
});

/// How the lightbox presents a preview target (`data-type` on the link).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PreviewKind {
    Video,
    Iframe,
    Image,
}

impl PreviewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewKind::Video => "video",
            PreviewKind::Iframe => "iframe",
            PreviewKind::Image => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub href: String,
    pub kind: PreviewKind,
}

/// Lightbox target for a project, if its media kind is previewable.
///
/// Projects without a URL never preview.
pub fn preview_target(project: &Project) -> Option<PreviewTarget> {
    let url = project.url.as_deref().filter(|u| !u.is_empty())?;
    match project.kind.as_deref()? {
        "video" => Some(PreviewTarget {
            href: youtube_embed_url(url).unwrap_or_else(|| url.to_string()),
            kind: PreviewKind::Video,
        }),
        "pdf" => Some(PreviewTarget {
            href: pdf_viewer_url(url),
            kind: PreviewKind::Iframe,
        }),
        "image" => Some(PreviewTarget {
            href: url.to_string(),
            kind: PreviewKind::Image,
        }),
        _ => None,
    }
}

pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn youtube_embed_url(url: &str) -> Option<String> {
    youtube_video_id(url)
        .map(|id| format!("https://www.youtube.com/embed/{id}?rel=0&modestbranding=1"))
}

/// Characters left as-is by a URI component encoder.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn pdf_viewer_url(url: &str) -> String {
    let encoded = utf8_percent_encode(url, URI_COMPONENT);
    format!("{PDF_VIEWER}?file={encoded}")
}
