// Route table and shared handler helpers.
//
// Paths mirror the orchestrator's driver contract verbatim; changing them
// breaks the northbound integration, not just this service.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;

use southbridge_core::ResultRsp;

use crate::state::AppState;

pub mod ipsec;
pub mod vxlan;
pub mod wan;

/// Build the orchestrator-facing router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/svc/sbiadp/controller/:ctrluuid/v1/vxlan/device/:deviceid/vtep",
            get(vxlan::query_vtep),
        )
        .route(
            "/svc/sbiadp/controller/:ctrluuid/v1/vxlan/batch-create-vxlan",
            post(vxlan::create_vxlan),
        )
        .route(
            "/svc/sbiadp/controller/:ctrluuid/v1/vxlan/instance/:instanceid",
            delete(vxlan::delete_vxlan),
        )
        .route(
            "/svc/sbiadp/controller/:ctrluuid/v1/overlay/batch-create-ipsecs",
            post(ipsec::create_ipsec),
        )
        .route(
            "/svc/sbiadp/controller/:ctrluuid/v1/overlay/ipsec/:ipsecconnectionid",
            delete(ipsec::delete_ipsec),
        )
        .route(
            "/sbi-waninterface/v1/overlay/device/:deviceid/wan-sub-interfaces",
            get(wan::query_wan_interfaces),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) fn is_valid_uuid(raw: &str) -> bool {
    uuid::Uuid::parse_str(raw).is_ok()
}

/// Reject malformed input before anything goes southbound.
pub(crate) fn bad_request<T>(message: impl Into<String>) -> (StatusCode, Json<ResultRsp<T>>) {
    (StatusCode::BAD_REQUEST, Json(ResultRsp::failed(message)))
}
