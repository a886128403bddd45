use crate::portfolio::application::services::ProviderState;
use crate::portfolio::domain::entities::PortfolioDocument;
use crate::portfolio::domain::public_view::PublicPortfolio;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use futures::Stream;
use tokio::sync::watch;
use tracing::{debug, error};

/// One server-sent event carrying the public view of the document.
fn render_event(document: &PortfolioDocument) -> Option<web::Bytes> {
    match serde_json::to_string(&PublicPortfolio::from(document)) {
        Ok(json) => Some(web::Bytes::from(format!("event: portfolio\ndata: {json}\n\n"))),
        Err(e) => {
            error!("Failed to encode portfolio event: {}", e);
            None
        }
    }
}

/// The current document first, then one event per change. `Loading` states
/// are skipped. Ends when the provider goes away.
fn document_events(
    mut rx: watch::Receiver<ProviderState>,
) -> impl Stream<Item = Result<web::Bytes, actix_web::Error>> {
    rx.mark_changed();

    futures::stream::unfold(rx, |mut rx| async move {
        loop {
            if rx.changed().await.is_err() {
                debug!("Provider dropped, closing event stream");
                return None;
            }
            let state = rx.borrow_and_update().clone();
            if let Some(bytes) = state.document().and_then(|doc| render_event(doc)) {
                return Some((Ok(bytes), rx));
            }
        }
    })
}

/// Live document updates
///
/// `text/event-stream` of `portfolio` events. The first event is the current
/// document; later ones follow every local write and remote push.
#[utoipa::path(
    get,
    path = "/api/portfolio/events",
    tag = "portfolio",
    responses(
        (status = 200, description = "Event stream", content_type = "text/event-stream", body = String),
    )
)]
#[get("/api/portfolio/events")]
pub async fn stream_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(document_events(data.provider.watch()))
}
