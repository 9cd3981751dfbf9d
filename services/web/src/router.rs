use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use readygate_core::error::{method_not_allowed, not_found};
use readygate_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::config::ReadinessTrigger;
use crate::handlers::{health::health, index::index, readiness::readiness};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        // Probes
        .route("/health", get(health))
        .route("/readiness", get(readiness))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    let router = match state.trigger {
        ReadinessTrigger::FirstRequest => router.layer(middleware::from_fn_with_state(
            state.clone(),
            mark_ready_on_request,
        )),
        ReadinessTrigger::Startup => router,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

/// Marks the gate ready before the request reaches its handler, so the very
/// first request already observes the ready flag.
async fn mark_ready_on_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.gate.mark_ready();
    next.run(request).await
}
