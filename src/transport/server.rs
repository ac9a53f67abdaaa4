use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{
    TransportBool, TransportError, TransportFloat, TransportText, TransportUint, decode_object,
    decode_object_map, lenient_u32, numeric_key, yes_no,
};
use crate::domain::{
    AppId, CreateServer, IsoId, OsId, PlanId, RegionId, ScriptId, Server, ServerId, SnapshotId,
    UserData,
};

#[derive(Debug, Clone, Deserialize)]
struct ServerJson {
    #[serde(rename = "SUBID")]
    id: TransportUint,
    os: String,
    ram: String,
    disk: String,
    main_ip: String,
    #[serde(deserialize_with = "lenient_u32")]
    vcpu_count: u32,
    location: String,
    #[serde(rename = "DCID")]
    region_id: TransportUint,
    default_password: String,
    date_created: String,
    pending_charges: TransportText,
    status: String,
    cost_per_month: TransportText,
    current_bandwidth_gb: TransportFloat,
    allowed_bandwidth_gb: TransportFloat,
    netmask_v4: String,
    gateway_v4: String,
    power_status: String,
    server_state: String,
    #[serde(rename = "VPSPLANID")]
    plan_id: TransportUint,
    label: String,
    internal_ip: String,
    kvm_url: String,
    auto_backups: TransportBool,
    #[serde(rename = "OSID")]
    os_id: TransportUint,
    #[serde(rename = "APPID")]
    app_id: TransportUint,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    v6_main_ip: Option<String>,
    #[serde(default)]
    v6_network: Option<String>,
    #[serde(default)]
    v6_network_size: Option<TransportText>,
    #[serde(default, rename = "FIREWALLGROUPID")]
    firewall_group_id: Option<TransportText>,
}

impl From<ServerJson> for Server {
    fn from(value: ServerJson) -> Self {
        Self {
            id: ServerId::new(value.id.0),
            os: value.os,
            ram: value.ram,
            disk: value.disk,
            main_ip: value.main_ip,
            vcpu_count: value.vcpu_count,
            location: value.location,
            region_id: RegionId::new(value.region_id.0),
            default_password: value.default_password,
            date_created: value.date_created,
            pending_charges: value.pending_charges.into_string(),
            status: value.status,
            cost_per_month: value.cost_per_month.into_string(),
            current_bandwidth_gb: value.current_bandwidth_gb.0,
            allowed_bandwidth_gb: value.allowed_bandwidth_gb.0,
            netmask_v4: value.netmask_v4,
            gateway_v4: value.gateway_v4,
            power_status: value.power_status,
            server_state: value.server_state,
            plan_id: PlanId::new(value.plan_id.0),
            label: value.label,
            internal_ip: value.internal_ip,
            kvm_url: value.kvm_url,
            auto_backups: value.auto_backups.0,
            os_id: OsId::new(value.os_id.0),
            app_id: AppId::new(value.app_id.0),
            tag: value.tag,
            v6_main_ip: value.v6_main_ip,
            v6_network: value.v6_network,
            v6_network_size: value.v6_network_size.map(TransportText::into_string),
            firewall_group_id: value.firewall_group_id.map(TransportText::into_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedServerJson {
    #[serde(rename = "SUBID")]
    id: TransportUint,
}

#[derive(Debug, Clone, Deserialize)]
struct UserDataJson {
    userdata: String,
}

pub fn encode_server_id_form(id: ServerId) -> Vec<(String, String)> {
    vec![(ServerId::FIELD.to_owned(), id.to_string())]
}

pub fn encode_create_server_form(request: &CreateServer) -> Vec<(String, String)> {
    let mut params = vec![
        (RegionId::FIELD.to_owned(), request.region.to_string()),
        (PlanId::FIELD.to_owned(), request.plan.to_string()),
        (OsId::FIELD.to_owned(), request.os.to_string()),
    ];

    let options = &request.options;
    if let Some(url) = options.ipxe_chain_url.as_ref() {
        params.push(("ipxe_chain_url".to_owned(), url.clone()));
    }
    if let Some(iso_id) = options.iso_id {
        params.push((IsoId::FIELD.to_owned(), iso_id.to_string()));
    }
    if let Some(script_id) = options.script_id {
        params.push((ScriptId::FIELD.to_owned(), script_id.to_string()));
    }
    if let Some(snapshot_id) = options.snapshot_id.as_ref() {
        params.push((SnapshotId::FIELD.to_owned(), snapshot_id.as_str().to_owned()));
    }
    push_flag(&mut params, "enable_ipv6", options.enable_ipv6);
    push_flag(
        &mut params,
        "enable_private_network",
        options.enable_private_network,
    );
    if let Some(label) = options.label.as_ref() {
        params.push(("label".to_owned(), label.clone()));
    }
    if let Some(ssh_key_id) = options.ssh_key_id.as_ref() {
        params.push(("SSHKEYID".to_owned(), ssh_key_id.clone()));
    }
    push_flag(&mut params, "auto_backups", options.auto_backups);
    if let Some(app_id) = options.app_id {
        params.push((AppId::FIELD.to_owned(), app_id.to_string()));
    }
    if let Some(user_data) = options.user_data.as_ref() {
        params.push(("userdata".to_owned(), user_data.clone()));
    }
    push_flag(&mut params, "notify_activate", options.notify_activate);
    push_flag(&mut params, "ddos_protection", options.ddos_protection);
    if let Some(sub_id) = options.floating_v4_sub_id {
        params.push(("floating_v4_SUBID".to_owned(), sub_id.to_string()));
    }
    if let Some(hostname) = options.hostname.as_ref() {
        params.push(("hostname".to_owned(), hostname.clone()));
    }

    params
}

fn push_flag(params: &mut Vec<(String, String)>, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        params.push((key.to_owned(), yes_no(value).to_owned()));
    }
}

pub fn decode_servers_json_response(
    json: &str,
) -> Result<BTreeMap<ServerId, Server>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(ServerId::new),
        |server: ServerJson| Ok(Server::from(server)),
    )
}

pub fn decode_created_server_json_response(json: &str) -> Result<ServerId, TransportError> {
    let parsed: CreatedServerJson = decode_object(json)?;
    Ok(ServerId::new(parsed.id.0))
}

pub fn decode_user_data_json_response(json: &str) -> Result<UserData, TransportError> {
    let parsed: UserDataJson = decode_object(json)?;
    Ok(UserData {
        userdata: parsed.userdata,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::CreateServerOptions;

    use super::*;

    const SERVER_LIST_JSON: &str = r#"
    {
      "576965": {
        "SUBID": "576965",
        "os": "CentOS 6 x64",
        "ram": "4096 MB",
        "disk": "Virtual 60 GB",
        "main_ip": "123.123.123.123",
        "vcpu_count": "2",
        "location": "New Jersey",
        "DCID": "1",
        "default_password": "nreqnusibni",
        "date_created": "2013-12-19 14:45:41",
        "pending_charges": "46.67",
        "status": "active",
        "cost_per_month": "10.05",
        "current_bandwidth_gb": 131.512,
        "allowed_bandwidth_gb": "1000",
        "netmask_v4": "255.255.255.248",
        "gateway_v4": "123.123.123.1",
        "power_status": "running",
        "server_state": "ok",
        "VPSPLANID": "28",
        "v6_main_ip": "2001:DB8:1000::100",
        "v6_network_size": "64",
        "v6_network": "2001:DB8:1000::",
        "label": "my new server",
        "internal_ip": "10.99.0.10",
        "kvm_url": "https://my.vultr.com/subs/novnc/api.php?data=eawxFVZw2mXnhGUV",
        "auto_backups": "yes",
        "tag": "mytag",
        "OSID": "127",
        "APPID": "0",
        "FIREWALLGROUPID": "0"
      },
      "0": "not a server"
    }
    "#;

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn has_key(params: &[(String, String)], key: &str) -> bool {
        params.iter().any(|(k, _)| k == key)
    }

    #[test]
    fn encode_create_server_form_sends_only_required_by_default() {
        let request = CreateServer::new(RegionId::new(1), PlanId::new(201), OsId::new(167));
        assert_eq!(
            encode_create_server_form(&request),
            vec![
                ("DCID".to_owned(), "1".to_owned()),
                ("VPSPLANID".to_owned(), "201".to_owned()),
                ("OSID".to_owned(), "167".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_create_server_form_serializes_flags_as_yes_no() {
        let request = CreateServer::new(RegionId::new(1), PlanId::new(201), OsId::new(167))
            .with_options(CreateServerOptions {
                enable_ipv6: Some(true),
                enable_private_network: Some(false),
                auto_backups: Some(true),
                notify_activate: Some(false),
                ..Default::default()
            });

        let params = encode_create_server_form(&request);
        assert_param(&params, "enable_ipv6", "yes");
        assert_param(&params, "enable_private_network", "no");
        assert_param(&params, "auto_backups", "yes");
        assert_param(&params, "notify_activate", "no");
        assert!(!has_key(&params, "ddos_protection"));
    }

    #[test]
    fn encode_create_server_form_maps_every_option() {
        let request = CreateServer::new(RegionId::new(1), PlanId::new(201), OsId::new(159))
            .with_options(CreateServerOptions {
                ipxe_chain_url: Some("https://example.com/boot.ipxe".to_owned()),
                iso_id: Some(IsoId::new(24)),
                script_id: Some(ScriptId::new(3)),
                snapshot_id: Some(SnapshotId::new("5359435d28b9a").unwrap()),
                enable_ipv6: None,
                enable_private_network: None,
                label: Some("web-1".to_owned()),
                ssh_key_id: Some("541b4960f23bd".to_owned()),
                auto_backups: None,
                app_id: Some(AppId::new(1)),
                user_data: Some("ZWNobyBoZWxsbw==".to_owned()),
                notify_activate: None,
                ddos_protection: Some(true),
                floating_v4_sub_id: Some(ServerId::new(1234)),
                hostname: Some("web-1.example.com".to_owned()),
            });

        let params = encode_create_server_form(&request);
        assert_param(&params, "ipxe_chain_url", "https://example.com/boot.ipxe");
        assert_param(&params, "ISOID", "24");
        assert_param(&params, "SCRIPTID", "3");
        assert_param(&params, "SNAPSHOTID", "5359435d28b9a");
        assert_param(&params, "label", "web-1");
        assert_param(&params, "SSHKEYID", "541b4960f23bd");
        assert_param(&params, "APPID", "1");
        assert_param(&params, "userdata", "ZWNobyBoZWxsbw==");
        assert_param(&params, "ddos_protection", "yes");
        assert_param(&params, "floating_v4_SUBID", "1234");
        assert_param(&params, "hostname", "web-1.example.com");
        assert!(!has_key(&params, "enable_ipv6"));
        assert!(!has_key(&params, "auto_backups"));
        assert_eq!(params.len(), 14);
    }

    #[test]
    fn decode_servers_maps_every_field_and_skips_non_objects() {
        let parsed = decode_servers_json_response(SERVER_LIST_JSON).unwrap();
        assert_eq!(parsed.len(), 1);

        let server = parsed.get(&ServerId::new(576965)).unwrap();
        assert_eq!(server.id, ServerId::new(576965));
        assert_eq!(server.os, "CentOS 6 x64");
        assert_eq!(server.ram, "4096 MB");
        assert_eq!(server.disk, "Virtual 60 GB");
        assert_eq!(server.main_ip, "123.123.123.123");
        assert_eq!(server.vcpu_count, 2);
        assert_eq!(server.location, "New Jersey");
        assert_eq!(server.region_id, RegionId::new(1));
        assert_eq!(server.default_password, "nreqnusibni");
        assert_eq!(server.date_created, "2013-12-19 14:45:41");
        assert_eq!(server.pending_charges, "46.67");
        assert_eq!(server.status, "active");
        assert_eq!(server.cost_per_month, "10.05");
        assert_eq!(server.current_bandwidth_gb, 131.512);
        assert_eq!(server.allowed_bandwidth_gb, 1000.0);
        assert_eq!(server.netmask_v4, "255.255.255.248");
        assert_eq!(server.gateway_v4, "123.123.123.1");
        assert_eq!(server.power_status, "running");
        assert_eq!(server.server_state, "ok");
        assert_eq!(server.plan_id, PlanId::new(28));
        assert_eq!(server.label, "my new server");
        assert_eq!(server.internal_ip, "10.99.0.10");
        assert!(server.auto_backups);
        assert_eq!(server.os_id, OsId::new(127));
        assert_eq!(server.app_id, AppId::new(0));
        assert_eq!(server.tag.as_deref(), Some("mytag"));
        assert_eq!(server.v6_main_ip.as_deref(), Some("2001:DB8:1000::100"));
        assert_eq!(server.v6_network.as_deref(), Some("2001:DB8:1000::"));
        assert_eq!(server.v6_network_size.as_deref(), Some("64"));
        assert_eq!(server.firewall_group_id.as_deref(), Some("0"));
    }

    #[test]
    fn decode_created_server_reads_subid() {
        let parsed = decode_created_server_json_response(r#"{"SUBID": "1312965"}"#).unwrap();
        assert_eq!(parsed, ServerId::new(1312965));
    }

    #[test]
    fn decode_user_data_maps_payload() {
        let parsed =
            decode_user_data_json_response(r#"{"userdata": "ZWNobyBIZWxsbyBXb3JsZA=="}"#).unwrap();
        assert_eq!(parsed.userdata, "ZWNobyBIZWxsbyBXb3JsZA==");
    }
}
