//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use itempanel::config::PanelConfig;
use itempanel::fetch::{canned_items, CannedSource, FetchError, FetchFuture, Item, ItemSource};
use itempanel::notify::{EventListener, Notifier, OutboundEvent, Toast, ToastSink, ToastVariant};
use itempanel::ui::panel::Panel;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

// -- Notification recording ---------------------------------------------------

/// Records every toast and event in arrival order.
#[derive(Default)]
pub struct Recorder {
    toasts: Mutex<Vec<Toast>>,
    events: Mutex<Vec<OutboundEvent>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn events(&self) -> Vec<OutboundEvent> {
        self.events.lock().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(OutboundEvent::name).collect()
    }

    pub fn toast_messages(&self, variant: ToastVariant) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .filter(|t| t.variant == variant)
            .map(|t| t.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.toasts.lock().clear();
        self.events.lock().clear();
    }
}

impl ToastSink for Recorder {
    fn show_toast(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}

impl EventListener for Recorder {
    fn on_event(&self, event: &OutboundEvent) {
        self.events.lock().push(event.clone());
    }
}

pub fn recording_notifier(recorder: &Arc<Recorder>) -> Notifier {
    Notifier::new(recorder.clone()).subscribe(recorder.clone())
}

// -- Item sources ---------------------------------------------------------------

/// Source that rejects every fetch.
pub struct FailingSource;

impl ItemSource for FailingSource {
    fn fetch_items(&self, _query: &str) -> FetchFuture {
        Box::pin(async { Err(FetchError::Unavailable("backend down".to_string())) })
    }
}

/// Source that refuses every query it is given.
pub struct RejectingSource {
    pub reason: String,
}

impl ItemSource for RejectingSource {
    fn fetch_items(&self, query: &str) -> FetchFuture {
        let err = FetchError::Rejected {
            query: query.to_string(),
            reason: self.reason.clone(),
        };
        Box::pin(async move { Err(err) })
    }
}

type Gate = oneshot::Sender<Result<Vec<Item>, FetchError>>;

/// Source whose fetches stay pending until the test resolves them.
#[derive(Default)]
pub struct GatedSource {
    pending: Mutex<VecDeque<(String, Gate)>>,
}

impl GatedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Yield to spawned tasks until `count` fetches are waiting.
    pub async fn wait_for_pending(&self, count: usize) {
        for _ in 0..1000 {
            if self.pending_count() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!(
            "expected {} pending fetches, found {}",
            count,
            self.pending_count()
        );
    }

    /// Resolve the oldest pending fetch and return its query.
    pub fn resolve_oldest(&self, result: Result<Vec<Item>, FetchError>) -> String {
        let (query, gate) = self
            .pending
            .lock()
            .pop_front()
            .expect("no pending fetch");
        let _ = gate.send(result);
        query
    }

    /// Resolve the newest pending fetch and return its query.
    pub fn resolve_newest(&self, result: Result<Vec<Item>, FetchError>) -> String {
        let (query, gate) = self
            .pending
            .lock()
            .pop_back()
            .expect("no pending fetch");
        let _ = gate.send(result);
        query
    }
}

impl ItemSource for GatedSource {
    fn fetch_items(&self, query: &str) -> FetchFuture {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push_back((query.to_string(), tx));
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Unavailable("gate dropped".to_string())))
        })
    }
}

// -- Panel builders -------------------------------------------------------------

pub fn instant_source() -> Arc<CannedSource> {
    Arc::new(CannedSource::with_delay(Duration::ZERO))
}

pub fn make_panel(source: Arc<dyn ItemSource>) -> (Panel, Arc<Recorder>) {
    make_panel_with(source, PanelConfig::default(), false)
}

pub fn make_panel_with(
    source: Arc<dyn ItemSource>,
    config: PanelConfig,
    load_on_mount: bool,
) -> (Panel, Arc<Recorder>) {
    let recorder = Recorder::new();
    let panel = Panel::builder(source)
        .config(config)
        .notifier(recording_notifier(&recorder))
        .load_on_mount(load_on_mount)
        .build();
    (panel, recorder)
}

pub fn custom_items() -> Vec<Item> {
    vec![Item::new("x", "Custom", "Custom item")]
}
