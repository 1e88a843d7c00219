//! HTML fragments for gallery cards.

use std::fmt::Write as _;

use pixgallery_core::ImageRecord;

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Photo card: a lightbox anchor around the preview, followed by the counters.
#[must_use]
pub fn render_card(record: &ImageRecord) -> String {
    let mut html = String::with_capacity(512);
    let _ = write!(
        html,
        r#"<div class="photo-card"><a href="{full}"><img src="{preview}" alt="{tags}" loading="lazy" /></a><div class="info">"#,
        full = escape_html(&record.full_url),
        preview = escape_html(&record.preview_url),
        tags = escape_html(&record.tags),
    );
    for (label, value) in [
        ("Likes", record.likes),
        ("Views", record.views),
        ("Comments", record.comments),
        ("Downloads", record.downloads),
    ] {
        let _ = write!(html, r#"<p class="info-item"><b>{label}</b> {value}</p>"#);
    }
    html.push_str("</div></div>");
    html
}
