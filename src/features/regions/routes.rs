use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionDirectory;

/// Create routes for the regions feature
pub fn routes(directory: Arc<RegionDirectory>) -> Router {
    Router::new()
        .route("/regions/countries", get(handlers::list_countries))
        .route(
            "/regions/countries/{country}/states",
            get(handlers::list_states),
        )
        .route("/regions/validate", get(handlers::validate_state))
        .with_state(directory)
}
