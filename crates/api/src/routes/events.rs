//! Server-Sent Events stream of registry changes.
//!
//! Presentation layers subscribe here to refresh their job list whenever
//! the registry mutates, instead of the registry knowing about any UI.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::state::AppState;

/// GET /api/events -- one SSE event per registry mutation.
async fn job_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.registry.subscribe();

    // Lagged receivers just skip ahead; a job list refresh is cheap.
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        result.ok().and_then(|event| {
            serde_json::to_string(&event)
                .ok()
                .map(|data| Ok(Event::default().data(data)))
        })
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

/// Mount the event stream route.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(job_events))
}
