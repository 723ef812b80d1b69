// WAN sub-interface endpoint.
//
// Unlike the controller-scoped routes, the orchestrator sends the
// controller id in the `X-Driver-Parameter: extSysID={uuid}` header here —
// a wire convention inherited from the northbound driver manager.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use serde::Deserialize;
use tracing::warn;

use southbridge_core::{ResultRsp, WanSubInterface, WanUsedType};

use crate::routes::{bad_request, is_valid_uuid};
use crate::state::AppState;

const DRIVER_PARAMETER_HEADER: &str = "x-driver-parameter";

#[derive(Debug, Deserialize)]
pub struct WanQuery {
    /// Overlay role filter: `GRE`, `VXLAN`, or `IPSEC`.
    #[serde(rename = "type")]
    pub used_type: String,
}

/// Query a device's WAN sub-interfaces for one overlay role.
pub async fn query_wan_interfaces(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    Query(query): Query<WanQuery>,
    headers: HeaderMap,
) -> (StatusCode, Json<ResultRsp<Vec<WanSubInterface>>>) {
    let ctrl_uuid = headers
        .get(DRIVER_PARAMETER_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| raw.split_once('=').map(|(_, id)| id.to_owned()));

    let Some(ctrl_uuid) = ctrl_uuid else {
        warn!("queryWanInterface failed, X-Driver-Parameter header is missing");
        return bad_request("queryWanInterface failed, X-Driver-Parameter header is missing");
    };
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("queryWanInterface failed, controller uuid is invalid");
        return bad_request("queryWanInterface failed, controller uuid is invalid");
    }
    if !is_valid_uuid(&device_id) {
        warn!("queryWanInterface failed, device id is invalid");
        return bad_request("queryWanInterface failed, device id is invalid");
    }
    let Some(used_type) = WanUsedType::parse(&query.used_type) else {
        warn!(raw = %query.used_type, "queryWanInterface failed, query parameter type is error");
        return bad_request("queryWanInterface failed, query parameter type is error");
    };

    match state
        .wan
        .query_wan_interfaces(&ctrl_uuid, &device_id, used_type)
        .await
    {
        Ok(wans) => (StatusCode::OK, Json(ResultRsp::ok(wans))),
        Err(e) => {
            warn!(device = %device_id, error = %e, "queryWanInterface failed in service");
            (StatusCode::OK, Json(ResultRsp::failed(e.to_string())))
        }
    }
}
