use anyhow::{Result, bail};
use pixgallery_gallery::{
    GalleryContext, LoadMoreButton, LoadMoreControl, SubmitOutcome, ViewController,
};
use std::sync::Arc;

use crate::build_search_client;
use crate::terminal::{TerminalGallery, TerminalLightbox, TerminalNotifier};

pub(crate) async fn run_search(query: &str, pages: u32, json: bool) -> Result<()> {
    let client = build_search_client()?;

    let gallery = Arc::new(TerminalGallery::new(!json));
    let load_more = Arc::new(LoadMoreButton::default());
    let context = GalleryContext {
        gallery: gallery.clone(),
        load_more: load_more.clone(),
        notifier: Arc::new(TerminalNotifier),
        lightbox: Arc::new(TerminalLightbox::new(gallery.clone())),
    };
    let controller = ViewController::new(client, context);

    match controller.submit(query).await? {
        SubmitOutcome::Ignored => bail!("search query must not be blank"),
        SubmitOutcome::NoResults | SubmitOutcome::Loaded(_) | SubmitOutcome::Stale => {},
    }

    let mut loaded = 1;
    while loaded < pages && load_more.is_visible() {
        controller.load_more().await?;
        loaded += 1;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&gallery.records())?);
    } else if load_more.is_visible() {
        eprintln!("More results available, pass --pages {} to load them.", loaded + 1);
    }
    Ok(())
}
