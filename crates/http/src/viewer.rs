//! Gallery page - server-rendered HTML with a small inline lightbox script.
//!
//! Serves the page at `/` with:
//! - the search form (`searchQuery`)
//! - the gallery cards rendered so far
//! - the load-more button, hidden via `is-hidden` when there is nothing more to load
//! - pending toasts, drained as they are shown
//! - the lightbox index of full-size images
//! - the scroll target of a fresh search, drained as it is rendered

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use pixgallery_gallery::markup::escape_html;
use pixgallery_gallery::{Notification, NotificationKind};

use crate::AppState;

const STYLES: &str = r"
body { font-family: sans-serif; margin: 0; background: #f4f4f4; }
.search-form { position: sticky; top: 0; display: flex; justify-content: center; gap: 8px; padding: 16px; background: #3f51b5; z-index: 2; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; padding: 16px; }
.photo-card { background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.2); }
.photo-card img { width: 100%; height: 200px; object-fit: cover; display: block; }
.info { display: flex; justify-content: space-around; padding: 8px; font-size: 12px; }
.load-more { display: block; margin: 16px auto; padding: 8px 24px; }
.is-hidden { display: none; }
.toasts { position: fixed; top: 80px; right: 16px; z-index: 3; }
.toast { padding: 12px 16px; margin-bottom: 8px; color: #fff; border-radius: 4px; }
.toast-success { background: #32c682; }
.toast-failure { background: #ff5549; }
.lightbox { position: fixed; inset: 0; background: rgba(0,0,0,.85); display: flex; align-items: center; justify-content: center; z-index: 4; }
.lightbox img { max-width: 90vw; max-height: 90vh; }
";

const LIGHTBOX_SCRIPT: &str = r#"
(() => {
  const gallery = document.querySelector('.gallery');
  const target = gallery.dataset.scrollTop;
  if (target !== undefined) {
    sessionStorage.removeItem('pixgallery-scroll');
    window.scrollTo({ top: Number(target), behavior: 'smooth' });
  } else {
    const kept = sessionStorage.getItem('pixgallery-scroll');
    sessionStorage.removeItem('pixgallery-scroll');
    if (kept !== null) window.scrollTo({ top: Number(kept) });
  }
  const more = document.getElementById('load-more-form');
  more.addEventListener('submit', () => {
    sessionStorage.setItem('pixgallery-scroll', String(window.scrollY));
  });
  const links = JSON.parse(document.getElementById('lightbox-index').textContent);
  const overlay = document.querySelector('.lightbox');
  const image = overlay.querySelector('img');
  let current = -1;
  const open = (i) => { current = i; image.src = links[i]; overlay.classList.remove('is-hidden'); };
  const close = () => { current = -1; overlay.classList.add('is-hidden'); };
  document.querySelectorAll('.gallery a').forEach((a) => {
    a.addEventListener('click', (e) => {
      const i = links.indexOf(a.getAttribute('href'));
      if (i < 0) return;
      e.preventDefault();
      open(i);
    });
  });
  overlay.addEventListener('click', close);
  document.addEventListener('keydown', (e) => {
    if (current < 0) return;
    if (e.key === 'Escape') close();
    if (e.key === 'ArrowRight' && current + 1 < links.length) open(current + 1);
    if (e.key === 'ArrowLeft' && current > 0) open(current - 1);
  });
})();
"#;

/// Serve the gallery page.
pub async fn serve_viewer(State(state): State<Arc<AppState>>) -> Response {
    let html = render_page(&state);
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(html))
        .into_response()
}

pub(crate) fn render_page(state: &AppState) -> String {
    let query = state.controller.client().query();
    let toasts = state.notifications.drain();
    let links = serde_json::to_string(&state.lightbox.links())
        .unwrap_or_else(|_| "[]".to_owned())
        .replace("</", "<\\/");

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Image search</title><style>");
    html.push_str(STYLES);
    html.push_str("</style></head><body>");
    let _ = write!(
        html,
        r#"<form class="search-form" id="search-form" action="/search" method="get"><input type="text" name="searchQuery" value="{}" autocomplete="off" autofocus placeholder="Search images..." /><button type="submit">Search</button></form>"#,
        escape_html(&query),
    );
    html.push_str(&render_toasts(&toasts));
    match state.gallery.take_pending_scroll() {
        Some((top, _)) => {
            let _ = write!(html, r#"<div class="gallery" data-scroll-top="{top}">"#);
        },
        None => html.push_str(r#"<div class="gallery">"#),
    }
    html.push_str(&state.gallery.inner_html());
    html.push_str("</div>");
    let _ = write!(
        html,
        r#"<form id="load-more-form" action="/load-more" method="post"><button type="submit" class="{}">Load more</button></form>"#,
        state.load_more.class_list(),
    );
    html.push_str(r#"<div class="lightbox is-hidden"><img alt="" /></div>"#);
    let _ = write!(
        html,
        r#"<script type="application/json" id="lightbox-index">{links}</script><script>{LIGHTBOX_SCRIPT}</script>"#,
    );
    html.push_str("</body></html>");
    html
}

fn render_toasts(toasts: &[Notification]) -> String {
    let mut html = String::from(r#"<div class="toasts">"#);
    for toast in toasts {
        let class = match toast.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Failure => "toast toast-failure",
        };
        let _ = write!(html, r#"<div class="{class}">{}</div>"#, escape_html(&toast.message));
    }
    html.push_str("</div>");
    html
}
