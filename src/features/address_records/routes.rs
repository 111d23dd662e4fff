use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::address_records::handlers;
use crate::features::address_records::services::AddressRecordService;

/// Create routes for the address records feature
///
/// Every operation takes its input from query parameters and answers both
/// GET and POST, matching the contract existing clients are written against.
pub fn routes(service: Arc<AddressRecordService>) -> Router {
    Router::new()
        .route(
            "/address_records/create",
            get(handlers::create_record).post(handlers::create_record),
        )
        .route(
            "/address_records/find",
            get(handlers::find_records).post(handlers::find_records),
        )
        .route(
            "/address_records/get",
            get(handlers::get_record).post(handlers::get_record),
        )
        .route(
            "/address_records/update",
            get(handlers::update_record).post(handlers::update_record),
        )
        .route(
            "/address_records/delete",
            get(handlers::delete_record).post(handlers::delete_record),
        )
        .with_state(service)
}
