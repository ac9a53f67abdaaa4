//! Domain layer: strong types with validation and invariants (no I/O).

mod entity;
mod request;
mod validation;
mod value;

pub use entity::{
    AccountInfo, DnsDomain, DnsRecord, Iso, Os, Plan, Region, Script, Server, Snapshot, UserData,
};
pub use request::{
    CreateDnsDomain, CreateDnsRecord, CreateScript, CreateServer, CreateServerOptions,
    CreateSnapshot, UpdateDnsRecord, UpdateScript,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, AppId, Continent, DnsRecordType, DomainName, IsoId, OsId, PlanId, RecordId, RegionId,
    ScriptId, ScriptType, ServerId, SnapshotId,
};
