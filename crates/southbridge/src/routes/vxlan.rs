// VxLAN endpoints: VTEP query, batch create, instance delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, warn};

use southbridge_core::{ResultRsp, Vtep, VxlanInstance, WanUsedType, convert};

use crate::routes::{bad_request, is_valid_uuid};
use crate::state::AppState;

/// Derive the VTEP endpoint of a device from its VxLAN-capable WAN
/// sub-interface.
pub async fn query_vtep(
    State(state): State<AppState>,
    Path((ctrl_uuid, device_id)): Path<(String, String)>,
) -> (StatusCode, Json<ResultRsp<Vtep>>) {
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("queryVtep failed, controller uuid is invalid");
        return bad_request("queryVtep failed, controller uuid is invalid");
    }
    if !is_valid_uuid(&device_id) {
        warn!("queryVtep failed, device id is invalid");
        return bad_request("queryVtep failed, device id is invalid");
    }

    match state
        .wan
        .query_wan_interfaces(&ctrl_uuid, &device_id, WanUsedType::Vxlan)
        .await
    {
        Ok(wans) => {
            let Some(ip) = wans.into_iter().find_map(|w| w.ip_address) else {
                return (
                    StatusCode::OK,
                    Json(ResultRsp::failed(
                        "queryVtep failed, can't get WAN sub-interface",
                    )),
                );
            };
            (StatusCode::OK, Json(ResultRsp::ok(Vtep::new(device_id, ip))))
        }
        Err(e) => {
            warn!(error = %e, "queryVtep failed in service");
            (StatusCode::OK, Json(ResultRsp::failed(e.to_string())))
        }
    }
}

/// Create a batch of VxLAN instances, fanned out per network element.
///
/// The first failing element short-circuits the batch; the orchestrator
/// gets its input list echoed back either way.
pub async fn create_vxlan(
    State(state): State<AppState>,
    Path(ctrl_uuid): Path<String>,
    Json(instances): Json<Vec<VxlanInstance>>,
) -> (StatusCode, Json<ResultRsp<Vec<VxlanInstance>>>) {
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("createVxlan failed, controller uuid is invalid");
        return bad_request("createVxlan failed, controller uuid is invalid");
    }
    if instances.is_empty() {
        warn!("createVxlan failed, instance list is empty");
        return bad_request("createVxlan failed, instance list is empty");
    }
    for instance in &instances {
        if instance.vxlan_interfaces.is_empty() {
            warn!(instance = %instance.uuid, "createVxlan failed, interface list is empty");
            return bad_request("createVxlan failed, interface list is empty");
        }
        if instance.vxlan_tunnels.is_empty() {
            warn!(instance = %instance.uuid, "createVxlan failed, tunnel list is empty");
            return bad_request("createVxlan failed, tunnel list is empty");
        }
    }

    let by_device = convert::vxlan_device_models(&instances);
    for (device_id, models) in &by_device {
        if let Err(e) = state.vxlan.create_vxlan(&ctrl_uuid, device_id, models).await {
            warn!(device = %device_id, error = %e, "createVxlan failed in service");
            return (
                StatusCode::OK,
                Json(ResultRsp::failed_with(e.to_string(), instances)),
            );
        }
    }

    info!(count = instances.len(), "createVxlan succeeded");
    (StatusCode::OK, Json(ResultRsp::ok(instances)))
}

/// Delete one VxLAN instance.
pub async fn delete_vxlan(
    State(state): State<AppState>,
    Path((ctrl_uuid, instance_id)): Path<(String, String)>,
) -> (StatusCode, Json<ResultRsp<String>>) {
    if !is_valid_uuid(&ctrl_uuid) {
        warn!("deleteVxlan failed, controller uuid is invalid");
        return bad_request("deleteVxlan failed, controller uuid is invalid");
    }
    if !is_valid_uuid(&instance_id) {
        warn!("deleteVxlan failed, instance id is invalid");
        return bad_request("deleteVxlan failed, instance id is invalid");
    }

    match state.vxlan.delete_vxlan(&ctrl_uuid, &instance_id).await {
        Ok(()) => (StatusCode::OK, Json(ResultRsp::ok(instance_id))),
        Err(e) => {
            warn!(instance = %instance_id, error = %e, "deleteVxlan failed in service");
            (StatusCode::OK, Json(ResultRsp::failed(e.to_string())))
        }
    }
}
