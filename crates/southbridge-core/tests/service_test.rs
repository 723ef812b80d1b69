#![allow(clippy::unwrap_used)]
// Integration tests for the device-operation services against a wiremock
// controller, wired through a real `DriverProxy` and `StaticRegistry`.

use std::collections::HashMap;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use southbridge_api::transport::TransportConfig;
use southbridge_api::DriverProxy;
use southbridge_core::{
    ControllerEntry, CoreError, IpsecService, StaticRegistry, VxlanDeviceModel, VxlanService,
    WanInterfaceService, WanUsedType,
};

const CTRL: &str = "6e29f6ae-372e-4d4c-89c1-1a4b3d9f2a01";

async fn setup() -> (MockServer, Arc<DriverProxy>) {
    let server = MockServer::start().await;

    let mut controllers = HashMap::new();
    controllers.insert(
        CTRL.to_owned(),
        ControllerEntry {
            url: server.uri(),
            username: "admin".into(),
            password: SecretString::from("secret".to_owned()),
        },
    );
    let registry = Arc::new(StaticRegistry::new(controllers));
    let proxy = Arc::new(DriverProxy::new(registry, &TransportConfig::default()).unwrap());
    (server, proxy)
}

// ── WAN sub-interfaces ──────────────────────────────────────────────

#[tokio::test]
async fn wan_query_filters_unnumbered_ports() {
    let (server, proxy) = setup().await;

    let envelope = serde_json::json!({
        "errcode": "0",
        "data": [
            {
                "name": "GigabitEthernet0/0/1",
                "alias": "wan-primary",
                "ipAddr": "192.0.2.10",
                "mask": "255.255.255.0",
                "ceLowVlan": 100
            },
            {
                "name": "GigabitEthernet0/0/2"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/acbranch/v1/device/dev-1/ports"))
        .and(query_param("usedType", "VXLAN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .expect(1)
        .mount(&server)
        .await;

    let service = WanInterfaceService::new(proxy);
    let wans = service
        .query_wan_interfaces(CTRL, "dev-1", WanUsedType::Vxlan)
        .await
        .unwrap();

    assert_eq!(wans.len(), 1);
    assert_eq!(wans[0].name, "wan-primary");
    assert_eq!(wans[0].ip_address.as_deref(), Some("192.0.2.10"));
}

// ── VxLAN ───────────────────────────────────────────────────────────

#[tokio::test]
async fn vxlan_create_posts_payload_and_unwraps_echo() {
    let (server, proxy) = setup().await;

    let models = vec![VxlanDeviceModel {
        vni_id: 5001,
        local_address: "192.0.2.10".into(),
        vxlan_interface_list: vec!["GigabitEthernet0/0/1.100".into()],
        vxlan_tunnel_list: Vec::new(),
    }];

    let echo = serde_json::json!({
        "errcode": "0",
        "data": [{
            "vniId": 5001,
            "localAddress": "192.0.2.10",
            "vxlanInterfaceList": ["GigabitEthernet0/0/1.100"],
            "vxlanTunnelList": []
        }]
    });

    Mock::given(method("POST"))
        .and(path("/acbranch/v1/device/dev-1/vxlan/instances"))
        .and(body_json(serde_json::json!([{
            "vniId": 5001,
            "localAddress": "192.0.2.10",
            "vxlanInterfaceList": ["GigabitEthernet0/0/1.100"],
            "vxlanTunnelList": []
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(&echo))
        .expect(1)
        .mount(&server)
        .await;

    let service = VxlanService::new(proxy);
    let created = service.create_vxlan(CTRL, "dev-1", &models).await.unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].vni_id, 5001);
}

#[tokio::test]
async fn vxlan_create_survives_session_expiry_transparently() {
    let (server, proxy) = setup().await;

    let logout_body = "session ended, continue at https://controller/sso/logout";

    // First push hits a dead session; the proxy relogs and replays, and the
    // service never notices.
    Mock::given(method("POST"))
        .and(path("/acbranch/v1/device/dev-1/vxlan/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_string(logout_body))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sso/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "JSESSIONID=tok; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/acbranch/v1/device/dev-1/vxlan/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": "0",
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = VxlanService::new(proxy);
    let created = service.create_vxlan(CTRL, "dev-1", &[]).await.unwrap();
    assert!(created.is_empty());
}

#[tokio::test]
async fn vxlan_delete_checks_the_ack_envelope() {
    let (server, proxy) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/acbranch/v1/vxlan/instances/vx-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "errcode": "0" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = VxlanService::new(proxy);
    service.delete_vxlan(CTRL, "vx-1").await.unwrap();
}

// ── Failure surfacing ───────────────────────────────────────────────

#[tokio::test]
async fn controller_errcode_becomes_controller_op_error() {
    let (server, proxy) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/acbranch/v1/ipsec/connections/ipsec-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": "33002",
            "errmsg": "device not managed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = IpsecService::new(proxy);
    let err = service.delete_ipsec(CTRL, "ipsec-9").await.unwrap_err();

    match err {
        CoreError::ControllerOp { errcode, errmsg } => {
            assert_eq!(errcode, "33002");
            assert_eq!(errmsg, "device not managed");
        }
        other => panic!("expected ControllerOp, got: {other:?}"),
    }
}

#[tokio::test]
async fn unregistered_controller_surfaces_as_unreachable() {
    let (_server, proxy) = setup().await;

    let service = WanInterfaceService::new(proxy);
    let err = service
        .query_wan_interfaces("not-a-registered-controller", "dev-1", WanUsedType::Ipsec)
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::ControllerUnreachable));
}
