// IPSec endpoints: batch create, connection delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, warn};

use southbridge_core::{IpsecConnection, ResultRsp, convert};

use crate::routes::{bad_request, is_valid_uuid};
use crate::state::AppState;

/// Create a batch of IPSec connections, fanned out per network element.
pub async fn create_ipsec(
    State(state): State<AppState>,
    Path(ctrl_uuid): Path<String>,
    Json(connections): Json<Vec<IpsecConnection>>,
) -> (StatusCode, Json<ResultRsp<Vec<IpsecConnection>>>) {
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("createIpsec failed, controller uuid is invalid");
        return bad_request("createIpsec failed, controller uuid is invalid");
    }
    if connections.is_empty() {
        warn!("createIpsec failed, connection list is empty");
        return bad_request("createIpsec failed, connection list is empty");
    }
    for connection in &connections {
        if connection.peer_address.is_empty() || connection.source_address.is_empty() {
            warn!(connection = %connection.uuid, "createIpsec failed, tunnel addresses are missing");
            return bad_request("createIpsec failed, tunnel addresses are missing");
        }
    }

    let by_device = convert::ipsec_device_models(&connections);
    for (device_id, models) in &by_device {
        if let Err(e) = state.ipsec.create_ipsec(&ctrl_uuid, device_id, models).await {
            warn!(device = %device_id, error = %e, "createIpsec failed in service");
            return (
                StatusCode::OK,
                Json(ResultRsp::failed_with(e.to_string(), connections)),
            );
        }
    }

    info!(count = connections.len(), "createIpsec succeeded");
    (StatusCode::OK, Json(ResultRsp::ok(connections)))
}

/// Delete one IPSec connection.
pub async fn delete_ipsec(
    State(state): State<AppState>,
    Path((ctrl_uuid, connection_id)): Path<(String, String)>,
) -> (StatusCode, Json<ResultRsp<String>>) {
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("deleteIpsec failed, controller uuid is invalid");
        return bad_request("deleteIpsec failed, controller uuid is invalid");
    }
    if !is_valid_uuid(&connection_id) {
        warn!("deleteIpsec failed, connection id is invalid");
        return bad_request("deleteIpsec failed, connection id is invalid");
    }

    match state.ipsec.delete_ipsec(&ctrl_uuid, &connection_id).await {
        Ok(()) => (StatusCode::OK, Json(ResultRsp::ok(connection_id))),
        Err(e) => {
            warn!(connection = %connection_id, error = %e, "deleteIpsec failed in service");
            (StatusCode::OK, Json(ResultRsp::failed(e.to_string())))
        }
    }
}
