//! Typed Rust client for the Vultr v1 HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! that absorbs the API's wire-format quirks (numbers sent as strings, `"yes"`
//! flags, `[]` in place of an empty object), and a small client layer that
//! issues requests and caches plan lookups.
//!
//! ```rust,no_run
//! use vultr::{ApiKey, CreateServer, OsId, PlanId, RegionId, VultrClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vultr::VultrError> {
//!     let client = VultrClient::new(ApiKey::new("...")?);
//!     let plan = client.plan(PlanId::new(201)).await?;
//!     println!("{} costs {}/month", plan.name, plan.price_per_month);
//!
//!     let request = CreateServer::new(RegionId::new(1), plan.id, OsId::new(167));
//!     let server = client.create_server(request).await?;
//!     println!("created {} at {}", server.id, server.main_ip);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{VultrClient, VultrClientBuilder, VultrError};
pub use domain::{
    AccountInfo, ApiKey, AppId, Continent, CreateDnsDomain, CreateDnsRecord, CreateScript,
    CreateServer, CreateServerOptions, CreateSnapshot, DnsDomain, DnsRecord, DnsRecordType,
    DomainName, Iso, IsoId, Os, OsId, Plan, PlanId, RecordId, Region, RegionId, Script, ScriptId,
    ScriptType, Server, ServerId, Snapshot, SnapshotId, UpdateDnsRecord, UpdateScript, UserData,
    ValidationError,
};
