use anyhow::Result;
use pixgallery_gallery::GridLayout;
use pixgallery_http::{AppState, create_router};
use std::sync::Arc;

use crate::build_search_client;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let client = build_search_client()?;
    let state = Arc::new(AppState::new(client, GridLayout::default()));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Serving gallery on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
