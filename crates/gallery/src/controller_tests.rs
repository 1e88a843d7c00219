use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pixgallery_client::{ClientError, ImageSource, SearchClient};
use pixgallery_core::{
    END_OF_RESULTS_MESSAGE, ImageRecord, NO_RESULTS_MESSAGE, SearchResultPage,
};
use tokio::sync::{Notify, oneshot};

use crate::collaborators::{GalleryView, LoadMoreControl, ScrollBehavior};
use crate::controller::{GalleryContext, LoadMoreOutcome, SubmitOutcome, ViewController};
use crate::memory::{HtmlGallery, LightboxIndex, LoadMoreButton, NotificationKind, NotificationLog};

type Key = (String, u32);

#[derive(Default)]
struct ScriptedSource {
    responses: Mutex<HashMap<Key, Result<SearchResultPage, u16>>>,
    gates: Mutex<HashMap<Key, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<(String, u32, u32)>>,
    gated_call_started: Notify,
    /// Hits and total returned for any unscripted query.
    fallback: Option<(usize, u64)>,
}

impl ScriptedSource {
    fn page(self, query: &str, page: u32, hits: usize, total_hits: u64) -> Self {
        let result = SearchResultPage { hits: records(query, page, hits), total_hits };
        self.responses.lock().unwrap().insert((query.to_owned(), page), Ok(result));
        self
    }

    fn failing(self, query: &str, page: u32, status: u16) -> Self {
        self.responses.lock().unwrap().insert((query.to_owned(), page), Err(status));
        self
    }

    fn answering_every_query(mut self, hits: usize, total_hits: u64) -> Self {
        self.fallback = Some((hits, total_hits));
        self
    }

    fn gate(&self, query: &str, page: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert((query.to_owned(), page), rx);
        tx
    }

    fn requested_pages(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().iter().map(|(q, p, _)| (q.clone(), *p)).collect()
    }
}

#[async_trait]
impl ImageSource for ScriptedSource {
    async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResultPage, ClientError> {
        self.calls.lock().unwrap().push((query.to_owned(), page, per_page));
        let key = (query.to_owned(), page);
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            self.gated_call_started.notify_one();
            let _ = gate.await;
        }
        let scripted = self.responses.lock().unwrap().get(&key).cloned();
        match scripted {
            Some(Ok(page)) => Ok(page),
            Some(Err(code)) => Err(ClientError::HttpStatus { code, body: "scripted failure".to_owned() }),
            None => match self.fallback {
                Some((hits, total_hits)) => {
                    tokio::task::yield_now().await;
                    Ok(SearchResultPage { hits: records(query, page, hits), total_hits })
                },
                None => Ok(SearchResultPage::default()),
            },
        }
    }
}

fn records(query: &str, page: u32, n: usize) -> Vec<ImageRecord> {
    (0..n)
        .map(|i| ImageRecord {
            preview_url: format!("https://cdn.example/{query}/{page}/{i}_640.jpg"),
            full_url: format!("https://cdn.example/{query}/{page}/{i}_1280.jpg"),
            tags: format!("{query} {i}"),
            likes: 1,
            views: 2,
            comments: 3,
            downloads: 4,
        })
        .collect()
}

struct Harness {
    controller: ViewController,
    source: Arc<ScriptedSource>,
    gallery: Arc<HtmlGallery>,
    button: Arc<LoadMoreButton>,
    notes: Arc<NotificationLog>,
    lightbox: Arc<LightboxIndex>,
}

impl Harness {
    fn new(source: ScriptedSource, page_size: u32) -> Self {
        let source = Arc::new(source);
        let gallery = Arc::new(HtmlGallery::default());
        let button = Arc::new(LoadMoreButton::default());
        let notes = Arc::new(NotificationLog::default());
        let lightbox = Arc::new(LightboxIndex::new(Arc::clone(&gallery)));
        let context = GalleryContext {
            gallery: gallery.clone(),
            load_more: button.clone(),
            notifier: notes.clone(),
            lightbox: lightbox.clone(),
        };
        let client = SearchClient::new(source.clone(), page_size);
        let controller = ViewController::new(client, context);
        Self { controller, source, gallery, button, notes, lightbox }
    }

    fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.notes.drain().into_iter().map(|n| (n.kind, n.message)).collect()
    }
}

fn success(msg: &str) -> (NotificationKind, String) {
    (NotificationKind::Success, msg.to_owned())
}

fn failure(msg: &str) -> (NotificationKind, String) {
    (NotificationKind::Failure, msg.to_owned())
}

#[tokio::test]
async fn test_cats_scenario_pages_until_exhausted() {
    let source = ScriptedSource::default()
        .page("cats", 1, 12, 40)
        .page("cats", 2, 12, 40)
        .page("cats", 3, 12, 40)
        .page("cats", 4, 4, 40);
    let h = Harness::new(source, 12);
    assert!(!h.button.is_visible());

    let outcome = h.controller.submit("cats").await.unwrap();
    let SubmitOutcome::Loaded(summary) = outcome else { panic!("unexpected {outcome:?}") };
    assert_eq!((summary.page, summary.hits, summary.total_hits), (1, 12, 40));
    assert!(!summary.exhausted);
    assert!(h.button.is_visible());
    assert_eq!(h.messages(), vec![success("Hooray! We found 40 images.")]);

    for expected_page in 2..=3 {
        let outcome = h.controller.load_more().await.unwrap();
        assert!(matches!(outcome, LoadMoreOutcome::Loaded(s) if s.page == expected_page && !s.exhausted));
        assert!(h.button.is_visible());
    }
    assert!(h.messages().is_empty());

    let outcome = h.controller.load_more().await.unwrap();
    assert!(matches!(outcome, LoadMoreOutcome::Loaded(s) if s.page == 4 && s.hits == 4 && s.exhausted));
    assert!(!h.button.is_visible());
    assert_eq!(h.messages(), vec![failure(END_OF_RESULTS_MESSAGE)]);

    assert_eq!(h.gallery.len(), 12 + 12 + 12 + 4);
    assert_eq!(
        h.source.requested_pages(),
        vec![
            ("cats".to_owned(), 1),
            ("cats".to_owned(), 2),
            ("cats".to_owned(), 3),
            ("cats".to_owned(), 4)
        ]
    );
    assert!(h.source.calls.lock().unwrap().iter().all(|(_, _, per_page)| *per_page == 12));
}

#[tokio::test]
async fn test_no_results_hides_control_without_scrolling() {
    let source = ScriptedSource::default().page("zzzzznoresults", 1, 0, 0);
    let h = Harness::new(source, 12);

    let outcome = h.controller.submit("zzzzznoresults").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::NoResults);
    assert!(!h.button.is_visible());
    assert_eq!(h.messages(), vec![failure(NO_RESULTS_MESSAGE)]);
    assert!(h.gallery.scroll_history().is_empty());
    assert!(h.gallery.is_empty());
    assert_eq!(h.lightbox.refresh_count(), 0);
}

#[tokio::test]
async fn test_no_results_after_full_page_hides_visible_control() {
    let source =
        ScriptedSource::default().page("cats", 1, 12, 40).page("zzzzznoresults", 1, 0, 0);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();
    assert!(h.button.is_visible());
    h.messages();

    let outcome = h.controller.submit("zzzzznoresults").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::NoResults);
    assert!(!h.button.is_visible());
    assert!(h.gallery.is_empty());
    assert_eq!(h.messages(), vec![failure(NO_RESULTS_MESSAGE)]);
    assert_eq!(h.gallery.scroll_history().len(), 1);
    assert_eq!(h.controller.load_more().await.unwrap(), LoadMoreOutcome::Unavailable);
}

#[tokio::test]
async fn test_blank_query_is_ignored() {
    let source = ScriptedSource::default().page("cats", 1, 12, 40).page("cats", 2, 12, 40);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();
    h.controller.load_more().await.unwrap();
    h.messages();
    let before_html = h.gallery.inner_html();

    for blank in ["", "   ", "\t\n"] {
        let outcome = h.controller.submit(blank).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }

    assert_eq!(h.source.requested_pages().len(), 2);
    assert_eq!(h.controller.client().page(), 2);
    assert_eq!(h.controller.client().query(), "cats");
    assert_eq!(h.gallery.inner_html(), before_html);
    assert!(!h.button.is_visible());
    assert!(h.messages().is_empty());
}

#[tokio::test]
async fn test_query_is_trimmed_before_search() {
    let source = ScriptedSource::default().page("red fox", 1, 3, 3);
    let h = Harness::new(source, 12);

    h.controller.submit("  red fox \n").await.unwrap();

    assert_eq!(h.source.requested_pages(), vec![("red fox".to_owned(), 1)]);
}

#[tokio::test]
async fn test_short_first_page_reports_total_and_end() {
    let source = ScriptedSource::default().page("owls", 1, 5, 5);
    let h = Harness::new(source, 12);

    let outcome = h.controller.submit("owls").await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Loaded(s) if s.hits == 5 && s.exhausted));
    assert!(!h.button.is_visible());
    assert_eq!(
        h.messages(),
        vec![success("Hooray! We found 5 images."), failure(END_OF_RESULTS_MESSAGE)]
    );
    assert_eq!(h.gallery.scroll_history().len(), 1);
}

#[tokio::test]
async fn test_submit_scrolls_first_card_below_viewport_top() {
    let source = ScriptedSource::default().page("cats", 1, 12, 40).page("cats", 2, 12, 40);
    let h = Harness::new(source, 12);

    h.controller.submit("cats").await.unwrap();

    // default grid: first row sits 96px down, minus 15px padding
    assert_eq!(h.gallery.scroll_history(), vec![(81.0, ScrollBehavior::Smooth)]);

    h.controller.load_more().await.unwrap();
    assert_eq!(h.gallery.scroll_history().len(), 1);
}

#[tokio::test]
async fn test_submit_failure_is_reported_and_returned() {
    let source = ScriptedSource::default().failing("cats", 1, 500);
    let h = Harness::new(source, 12);

    let err = h.controller.submit("cats").await.unwrap_err();

    assert!(err.is_api_error());
    let messages = h.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, NotificationKind::Failure);
    assert!(messages[0].1.contains("500"));
    assert!(!h.button.is_visible());
    assert!(!h.controller.is_fetching());
}

#[tokio::test]
async fn test_load_more_failure_keeps_previous_items() {
    let source = ScriptedSource::default().page("cats", 1, 12, 40).failing("cats", 2, 400);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();
    h.messages();

    let err = h.controller.load_more().await.unwrap_err();

    assert!(err.to_string().contains("400"));
    assert_eq!(h.gallery.len(), 12);
    assert!(!h.button.is_visible());
    assert_eq!(h.messages().len(), 1);
    assert!(!h.controller.is_fetching());
}

#[tokio::test]
async fn test_load_more_without_visible_control_is_unavailable() {
    let h = Harness::new(ScriptedSource::default(), 12);

    let outcome = h.controller.load_more().await.unwrap();

    assert_eq!(outcome, LoadMoreOutcome::Unavailable);
    assert!(h.source.requested_pages().is_empty());
    assert_eq!(h.controller.client().page(), 1);
}

#[tokio::test]
async fn test_empty_follow_up_page_ends_results() {
    let source = ScriptedSource::default().page("cats", 1, 12, 12).page("cats", 2, 0, 12);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();
    h.messages();

    let outcome = h.controller.load_more().await.unwrap();

    assert!(matches!(outcome, LoadMoreOutcome::Loaded(s) if s.hits == 0 && s.exhausted));
    assert!(!h.button.is_visible());
    assert_eq!(h.messages(), vec![failure(END_OF_RESULTS_MESSAGE)]);
}

#[tokio::test]
async fn test_new_search_replaces_gallery() {
    let source = ScriptedSource::default()
        .page("cats", 1, 12, 40)
        .page("cats", 2, 12, 40)
        .page("dogs", 1, 3, 3);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();
    h.controller.load_more().await.unwrap();
    assert_eq!(h.gallery.len(), 24);

    h.controller.submit("dogs").await.unwrap();

    assert_eq!(h.gallery.len(), 3);
    assert_eq!(h.controller.client().page(), 1);
    assert!(h.gallery.links().iter().all(|l| l.contains("/dogs/")));
    assert_eq!(h.lightbox.links(), h.gallery.links());
}

#[tokio::test]
async fn test_lightbox_refreshed_after_each_append() {
    let source = ScriptedSource::default()
        .page("cats", 1, 12, 40)
        .page("cats", 2, 12, 40)
        .page("cats", 3, 12, 40);
    let h = Harness::new(source, 12);

    h.controller.submit("cats").await.unwrap();
    h.controller.load_more().await.unwrap();
    h.controller.load_more().await.unwrap();

    assert_eq!(h.lightbox.refresh_count(), 3);
    assert_eq!(h.lightbox.links().len(), 36);
}

#[tokio::test]
async fn test_stale_search_response_is_discarded() {
    let source = ScriptedSource::default().page("cats", 1, 12, 40).page("dogs", 1, 2, 2);
    let release_cats = source.gate("cats", 1);
    let h = Harness::new(source, 12);

    let (cats, dogs) = tokio::join!(h.controller.submit("cats"), async {
        h.source.gated_call_started.notified().await;
        let outcome = h.controller.submit("dogs").await;
        let _ = release_cats.send(());
        outcome
    });

    assert_eq!(cats.unwrap(), SubmitOutcome::Stale);
    assert!(matches!(dogs.unwrap(), SubmitOutcome::Loaded(s) if s.hits == 2));
    assert_eq!(h.gallery.len(), 2);
    assert!(h.gallery.links().iter().all(|l| l.contains("/dogs/")));
    assert_eq!(
        h.messages(),
        vec![success("Hooray! We found 2 images."), failure(END_OF_RESULTS_MESSAGE)]
    );
    assert!(!h.controller.is_fetching());
}

#[tokio::test]
async fn test_stale_load_more_page_is_discarded() {
    let source = ScriptedSource::default()
        .page("cats", 1, 12, 40)
        .page("cats", 2, 12, 40)
        .page("dogs", 1, 12, 30);
    let release_page_two = source.gate("cats", 2);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();

    let (more, dogs) = tokio::join!(h.controller.load_more(), async {
        h.source.gated_call_started.notified().await;
        let outcome = h.controller.submit("dogs").await;
        let _ = release_page_two.send(());
        outcome
    });

    assert_eq!(more.unwrap(), LoadMoreOutcome::Stale);
    assert!(matches!(dogs.unwrap(), SubmitOutcome::Loaded(s) if !s.exhausted));
    assert_eq!(h.gallery.len(), 12);
    assert!(h.button.is_visible());
    assert_eq!(h.controller.client().page(), 1);
}

#[tokio::test]
async fn test_load_more_while_fetching_is_busy() {
    let source = ScriptedSource::default().page("cats", 1, 12, 40).page("cats", 2, 12, 40);
    let release_page_two = source.gate("cats", 2);
    let h = Harness::new(source, 12);
    h.controller.submit("cats").await.unwrap();

    let (first, second) = tokio::join!(h.controller.load_more(), async {
        h.source.gated_call_started.notified().await;
        assert!(h.controller.is_fetching());
        let outcome = h.controller.load_more().await;
        let _ = release_page_two.send(());
        outcome
    });

    assert!(matches!(first.unwrap(), LoadMoreOutcome::Loaded(s) if s.page == 2));
    assert_eq!(second.unwrap(), LoadMoreOutcome::Busy);
    assert_eq!(h.source.requested_pages().len(), 2);
    assert_eq!(h.gallery.len(), 24);
}

#[tokio::test]
async fn test_rendered_count_matches_page_sums() {
    let counts = [7_usize, 7, 7, 3];
    let mut source = ScriptedSource::default();
    for (i, n) in counts.iter().enumerate() {
        source = source.page("birds", u32::try_from(i).unwrap() + 1, *n, 24);
    }
    let h = Harness::new(source, 7);

    h.controller.submit("birds").await.unwrap();
    let mut loads = 0;
    while h.button.is_visible() {
        h.controller.load_more().await.unwrap();
        loads += 1;
    }

    assert_eq!(loads, 3);
    assert_eq!(h.gallery.len(), counts.iter().sum::<usize>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_searches_request_consecutive_pages() {
    let source = ScriptedSource::default().answering_every_query(12, 1_000);
    let h = Arc::new(Harness::new(source, 12));

    let mut tasks = Vec::new();
    for i in 0..8 {
        let h = Arc::clone(&h);
        tasks.push(tokio::spawn(async move {
            let query = format!("q{i}");
            let _ = h.controller.submit(&query).await;
            for _ in 0..5 {
                let _ = h.controller.load_more().await;
                tokio::task::yield_now().await;
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let mut pages: HashMap<String, Vec<u32>> = HashMap::new();
    for (query, page) in h.source.requested_pages() {
        pages.entry(query).or_default().push(page);
    }
    assert_eq!(pages.len(), 8);
    for (query, requested) in pages {
        let expected: Vec<u32> = (1..=u32::try_from(requested.len()).unwrap()).collect();
        assert_eq!(requested, expected, "pages requested for {query}");
    }
    assert!(!h.controller.is_fetching());
}
