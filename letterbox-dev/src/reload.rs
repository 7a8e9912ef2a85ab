//! Page reload signal over server-sent events.
//!
//! Pages subscribe with `new EventSource("http://<listen>/__letterbox/reload")`
//! (see `letterbox_web::connect_reload`) and reload on each `reload` event.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::scheduler::ReloadSink;

pub const RELOAD_PATH: &str = "/__letterbox/reload";

#[derive(Debug)]
pub struct ReloadBroadcaster {
    tx: broadcast::Sender<u64>,
    sent: AtomicU64,
}

impl Default for ReloadBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadBroadcaster {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(16);
        Self {
            tx,
            sent: AtomicU64::new(0),
        }
    }

    /// Reload signals sent so far.
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<u64> {
        self.tx.subscribe()
    }

    /// `GET /__letterbox/reload` as an event stream; everything else is 404.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(RELOAD_PATH, get(reload_events))
            .with_state(self)
    }

    /// Serve page connections until the listener fails.
    pub async fn serve(self: Arc<Self>, listener: TcpListener) {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("reload endpoint at http://{addr}{RELOAD_PATH}");
        }
        if let Err(err) = axum::serve(listener, self.router()).await {
            tracing::error!("reload server failed: {err}");
        }
    }
}

async fn reload_events(State(reload): State<Arc<ReloadBroadcaster>>) -> impl IntoResponse {
    // Subscribed before the first byte goes out, so no reload after
    // `connected` is lost.
    let rx = reload.subscribe();
    tracing::debug!("page connected for reloads");

    let updates = BroadcastStream::new(rx).map(move |msg| {
        let seq = match msg {
            Ok(seq) => seq,
            // Missed a few; one reload covers them all.
            Err(BroadcastStreamRecvError::Lagged(_)) => reload.sent(),
        };
        Ok::<_, Infallible>(Event::default().event("reload").data(seq.to_string()))
    });
    let events = tokio_stream::once(Ok(Event::default().comment("connected"))).chain(updates);

    (
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Sse::new(events).keep_alive(KeepAlive::default()),
    )
}

impl ReloadSink for ReloadBroadcaster {
    fn reload(&self) {
        let seq = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        match self.tx.send(seq) {
            Ok(pages) => tracing::info!(pages, "reload signal sent"),
            Err(_) => tracing::info!("reload signal sent (no pages connected)"),
        }
    }
}
