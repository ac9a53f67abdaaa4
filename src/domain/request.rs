use std::net::IpAddr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AppId, DnsRecordType, DomainName, IsoId, OsId, PlanId, RecordId, RegionId, ScriptId,
    ScriptType, ServerId, SnapshotId,
};

/// Optional settings for [`CreateServer`].
///
/// Every field defaults to `None`, which omits the parameter from the request.
#[derive(Debug, Clone, Default)]
pub struct CreateServerOptions {
    /// Chainload URL for the `custom` operating system.
    pub ipxe_chain_url: Option<String>,
    /// ISO to mount for the `custom` operating system.
    pub iso_id: Option<IsoId>,
    /// Startup script to run on boot.
    pub script_id: Option<ScriptId>,
    /// Snapshot to restore for the `snapshot` operating system.
    pub snapshot_id: Option<SnapshotId>,
    pub enable_ipv6: Option<bool>,
    pub enable_private_network: Option<bool>,
    pub label: Option<String>,
    pub ssh_key_id: Option<String>,
    /// Automatic backups carry an extra charge.
    pub auto_backups: Option<bool>,
    /// Application to launch for the `application` operating system.
    pub app_id: Option<AppId>,
    /// Base64-encoded cloud-init user data.
    pub user_data: Option<String>,
    pub notify_activate: Option<bool>,
    /// DDOS protection carries an extra charge.
    pub ddos_protection: Option<bool>,
    /// Floating IPv4 subscription to attach.
    pub floating_v4_sub_id: Option<ServerId>,
    pub hostname: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateServer {
    pub region: RegionId,
    pub plan: PlanId,
    pub os: OsId,
    pub options: CreateServerOptions,
}

impl CreateServer {
    pub fn new(region: RegionId, plan: PlanId, os: OsId) -> Self {
        Self {
            region,
            plan,
            os,
            options: CreateServerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CreateServerOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreateSnapshot {
    pub server: ServerId,
    pub description: Option<String>,
}

impl CreateSnapshot {
    pub fn new(server: ServerId) -> Self {
        Self {
            server,
            description: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScript {
    name: String,
    script: String,
    script_type: ScriptType,
}

impl CreateScript {
    /// Wire key for the script name (`name`).
    pub const NAME_FIELD: &'static str = "name";
    /// Wire key for the script body (`script`).
    pub const SCRIPT_FIELD: &'static str = "script";

    /// Create a script request; `name` must be non-empty after trimming.
    pub fn new(
        name: impl Into<String>,
        script: impl Into<String>,
        script_type: ScriptType,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::NAME_FIELD,
            });
        }
        Ok(Self {
            name,
            script: script.into(),
            script_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn script_type(&self) -> ScriptType {
        self.script_type
    }
}

/// Partial update of a startup script; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateScript {
    pub id: ScriptId,
    pub name: Option<String>,
    pub script: Option<String>,
}

impl UpdateScript {
    pub fn new(id: ScriptId) -> Self {
        Self {
            id,
            name: None,
            script: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDnsDomain {
    pub domain: DomainName,
    /// Default IP used for the records Vultr creates with the zone.
    pub server_ip: IpAddr,
}

#[derive(Debug, Clone)]
pub struct CreateDnsRecord {
    pub domain: DomainName,
    /// Subdomain; empty for the zone apex.
    pub name: String,
    pub record_type: DnsRecordType,
    pub data: String,
    pub ttl: Option<u32>,
    /// Only meaningful for `MX` and `SRV` records.
    pub priority: Option<u32>,
}

impl CreateDnsRecord {
    pub fn new(
        domain: DomainName,
        name: impl Into<String>,
        record_type: DnsRecordType,
        data: impl Into<String>,
    ) -> Self {
        Self {
            domain,
            name: name.into(),
            record_type,
            data: data.into(),
            ttl: None,
            priority: None,
        }
    }
}

/// Partial update of a DNS record; `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateDnsRecord {
    pub domain: DomainName,
    pub id: RecordId,
    pub name: Option<String>,
    pub data: Option<String>,
    pub ttl: Option<u32>,
    pub priority: Option<u32>,
}

impl UpdateDnsRecord {
    pub fn new(domain: DomainName, id: RecordId) -> Self {
        Self {
            domain,
            id,
            name: None,
            data: None,
            ttl: None,
            priority: None,
        }
    }
}
