use crate::domain::value::{
    AppId, Continent, DnsRecordType, DomainName, IsoId, OsId, PlanId, RecordId, RegionId,
    ScriptId, ScriptType, ServerId, SnapshotId,
};

/// Account balance summary (`v1/account/info`).
///
/// Money values keep the provider's exact token (`"-5519.11"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub balance: String,
    pub pending_charges: String,
    pub last_payment_date: String,
    pub last_payment_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub country: String,
    pub continent: Continent,
    pub state: String,
    pub ddos_protection: bool,
    pub block_storage: Option<bool>,
    pub region_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub vcpu_count: u32,
    /// Memory in MB.
    pub ram: u64,
    /// Disk size in GB.
    pub disk: u64,
    /// Monthly transfer in TB, as returned (`"1.00"`).
    pub bandwidth: String,
    pub price_per_month: String,
    pub windows: bool,
    pub plan_type: Option<String>,
    pub available_locations: Vec<RegionId>,
}

/// A virtual machine subscription.
///
/// `ram`, `disk` and `os` are the provider's display strings (`"4096 MB"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: ServerId,
    pub os: String,
    pub ram: String,
    pub disk: String,
    pub main_ip: String,
    pub vcpu_count: u32,
    pub location: String,
    pub region_id: RegionId,
    pub default_password: String,
    pub date_created: String,
    pub pending_charges: String,
    pub status: String,
    pub cost_per_month: String,
    pub current_bandwidth_gb: f64,
    pub allowed_bandwidth_gb: f64,
    pub netmask_v4: String,
    pub gateway_v4: String,
    pub power_status: String,
    pub server_state: String,
    pub plan_id: PlanId,
    pub label: String,
    pub internal_ip: String,
    pub kvm_url: String,
    pub auto_backups: bool,
    pub os_id: OsId,
    pub app_id: AppId,
    pub tag: Option<String>,
    pub v6_main_ip: Option<String>,
    pub v6_network: Option<String>,
    pub v6_network_size: Option<String>,
    pub firewall_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: SnapshotId,
    pub date_created: String,
    pub description: String,
    /// Size in bytes.
    pub size: u64,
    pub status: String,
    pub os_id: OsId,
    pub app_id: AppId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso {
    pub id: IsoId,
    pub date_created: String,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    pub md5sum: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub id: ScriptId,
    pub date_created: String,
    pub date_modified: String,
    pub name: String,
    pub script_type: ScriptType,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Os {
    pub id: OsId,
    pub name: String,
    pub arch: String,
    pub family: String,
    pub windows: bool,
    /// Extra monthly charge; only present on OS-change lists.
    pub surcharge: Option<String>,
}

/// Cloud-init user data attached to a server, base64-encoded as returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub userdata: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsDomain {
    pub domain: DomainName,
    pub date_created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub id: RecordId,
    pub record_type: DnsRecordType,
    pub name: String,
    pub data: String,
    pub priority: u32,
    pub ttl: u32,
}
