//! Client layer: performs HTTP calls and maps transport ↔ domain.

mod cache;

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AccountInfo, ApiKey, CreateDnsDomain, CreateDnsRecord, CreateScript, CreateServer,
    CreateSnapshot, DnsDomain, DnsRecord, DomainName, Iso, IsoId, Os, OsId, Plan, PlanId,
    RecordId, Region, RegionId, Script, ScriptId, Server, ServerId, Snapshot, SnapshotId,
    UpdateDnsRecord, UpdateScript, UserData, ValidationError,
};
use crate::transport;

use self::cache::PlanCache;

const DEFAULT_BASE_URL: &str = "https://api.vultr.com/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type TransportResult = Result<HttpResponse, Box<dyn StdError + Send + Sync>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str, api_key: &'a ApiKey) -> BoxFuture<'a, TransportResult>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, TransportResult>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn read(response: reqwest::Response) -> TransportResult {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str, api_key: &'a ApiKey) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header(ApiKey::HEADER, api_key.as_str())
                .send()
                .await?;
            Self::read(response).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(ApiKey::HEADER, api_key.as_str())
                .form(&params)
                .send()
                .await?;
            Self::read(response).await
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VultrClient`].
///
/// Failures fall into two groups:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - malformed responses (unexpected JSON shape, missing fields, or an
///   entity that should exist but does not).
pub enum VultrError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A resource that the response implied should exist was not found.
    #[error("{kind} {id} not found in the provider's listing")]
    MissingResource { kind: &'static str, id: String },

    /// The configured base URL or a derived endpoint URL is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn parse_error(err: transport::TransportError) -> VultrError {
    VultrError::Parse(Box::new(err))
}

fn missing(kind: &'static str, id: impl ToString) -> VultrError {
    VultrError::MissingResource {
        kind,
        id: id.to_string(),
    }
}

#[derive(Debug, Clone)]
/// Builder for [`VultrClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct VultrClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VultrClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://api.vultr.com/`).
    ///
    /// Endpoint paths such as `v1/server/list` are resolved against it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VultrClient`].
    pub fn build(self) -> Result<VultrClient, VultrError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VultrError::Transport(Box::new(err)))?;

        Ok(VultrClient {
            api_key: self.api_key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
            plan_cache: Arc::new(PlanCache::default()),
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, url::ParseError> {
    // `Url::join` drops the last path segment unless it ends with a slash.
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

#[derive(Clone)]
/// High-level Vultr v1 client.
///
/// Every method issues one request (create operations issue a second one to
/// read the created resource back) and maps the JSON body into domain types.
/// Clones share the underlying HTTP client and the plan cache.
pub struct VultrClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
    plan_cache: Arc<PlanCache>,
}

impl VultrClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`VultrClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            plan_cache: Arc::new(PlanCache::default()),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> VultrClientBuilder {
        VultrClientBuilder::new(api_key)
    }

    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<String, VultrError> {
        let mut url = Url::parse(&self.base_url)?.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url.into())
    }

    async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<String, VultrError> {
        let url = self.endpoint(path, &query)?;
        tracing::debug!(method = "GET", %url, "sending Vultr API request");

        let response = self
            .http
            .get(&url, &self.api_key)
            .await
            .map_err(VultrError::Transport)?;

        check_status(path, response)
    }

    async fn post(&self, path: &str, params: Vec<(String, String)>) -> Result<String, VultrError> {
        let url = self.endpoint(path, &[])?;
        tracing::debug!(method = "POST", %url, params = params.len() as u64, "sending Vultr API request");

        let response = self
            .http
            .post_form(&url, &self.api_key, params)
            .await
            .map_err(VultrError::Transport)?;

        check_status(path, response)
    }

    /// Retrieve balance information for the current account (`v1/account/info`).
    pub async fn account_info(&self) -> Result<AccountInfo, VultrError> {
        let body = self.get("v1/account/info", Vec::new()).await?;
        transport::decode_account_info_json_response(&body).map_err(parse_error)
    }

    /// List all regions (`v1/regions/list`).
    pub async fn regions(&self) -> Result<BTreeMap<RegionId, Region>, VultrError> {
        let body = self.get("v1/regions/list", Vec::new()).await?;
        transport::decode_regions_json_response(&body).map_err(parse_error)
    }

    /// List all operating systems available for new servers (`v1/os/list`).
    pub async fn os_list(&self) -> Result<BTreeMap<OsId, Os>, VultrError> {
        let body = self.get("v1/os/list", Vec::new()).await?;
        transport::decode_os_list_json_response(&body).map_err(parse_error)
    }

    /// List all active plans (`v1/plans/list`).
    ///
    /// This always hits the network; see [`VultrClient::plan`] for the cached lookup.
    pub async fn plans(&self) -> Result<BTreeMap<PlanId, Plan>, VultrError> {
        let body = self.get("v1/plans/list", Vec::new()).await?;
        transport::decode_plans_json_response(&body).map_err(parse_error)
    }

    /// Look up a single plan, fetching the plan list only on the first request for `id`.
    ///
    /// Errors:
    /// - [`VultrError::MissingResource`] when the plan list does not contain `id`.
    pub async fn plan(&self, id: PlanId) -> Result<Plan, VultrError> {
        self.plan_cache
            .get_or_fetch(id, |id| async move {
                let mut plans = self.plans().await?;
                plans.remove(&id).ok_or_else(|| missing("plan", id))
            })
            .await
    }

    /// Plans the given server can be upgraded to (`v1/server/upgrade_plan_list`).
    ///
    /// Each returned id is resolved through the plan cache.
    pub async fn upgrade_plan_list(&self, server: ServerId) -> Result<Vec<Plan>, VultrError> {
        let body = self
            .get(
                "v1/server/upgrade_plan_list",
                transport::encode_server_id_form(server),
            )
            .await?;
        let ids = transport::decode_plan_ids_json_response(&body).map_err(parse_error)?;

        let mut plans = Vec::with_capacity(ids.len());
        for id in ids {
            plans.push(self.plan(id).await?);
        }
        Ok(plans)
    }

    /// List all active or pending servers (`v1/server/list`).
    pub async fn servers(&self) -> Result<BTreeMap<ServerId, Server>, VultrError> {
        let body = self.get("v1/server/list", Vec::new()).await?;
        transport::decode_servers_json_response(&body).map_err(parse_error)
    }

    /// Create a server (`v1/server/create`) and read it back from the server list.
    ///
    /// The create call only returns the new `SUBID`; exactly one follow-up
    /// `v1/server/list` call resolves the full record.
    ///
    /// Errors:
    /// - [`VultrError::MissingResource`] when the new server is not listed yet.
    pub async fn create_server(&self, request: CreateServer) -> Result<Server, VultrError> {
        let body = self
            .post(
                "v1/server/create",
                transport::encode_create_server_form(&request),
            )
            .await?;
        let id = transport::decode_created_server_json_response(&body).map_err(parse_error)?;
        tracing::debug!(server_id = %id, "server created");

        let mut servers = self.servers().await?;
        servers.remove(&id).ok_or_else(|| missing("server", id))
    }

    /// Destroy a server (`v1/server/destroy`).
    pub async fn destroy_server(&self, id: ServerId) -> Result<(), VultrError> {
        self.post("v1/server/destroy", transport::encode_server_id_form(id))
            .await?;
        Ok(())
    }

    /// Retrieve the cloud-init user data of a server (`v1/server/get_user_data`).
    pub async fn user_data(&self, server: ServerId) -> Result<UserData, VultrError> {
        let body = self
            .get(
                "v1/server/get_user_data",
                transport::encode_server_id_form(server),
            )
            .await?;
        transport::decode_user_data_json_response(&body).map_err(parse_error)
    }

    /// Operating systems the given server can be reinstalled with (`v1/server/os_change_list`).
    pub async fn os_change_list(&self, server: ServerId) -> Result<BTreeMap<OsId, Os>, VultrError> {
        let body = self
            .get(
                "v1/server/os_change_list",
                transport::encode_server_id_form(server),
            )
            .await?;
        transport::decode_os_list_json_response(&body).map_err(parse_error)
    }

    /// List all snapshots on the account (`v1/snapshot/list`).
    pub async fn snapshots(&self) -> Result<BTreeMap<SnapshotId, Snapshot>, VultrError> {
        let body = self.get("v1/snapshot/list", Vec::new()).await?;
        transport::decode_snapshots_json_response(&body).map_err(parse_error)
    }

    /// Snapshot a server (`v1/snapshot/create`), returning the new snapshot id.
    pub async fn create_snapshot(&self, request: CreateSnapshot) -> Result<SnapshotId, VultrError> {
        let body = self
            .post(
                "v1/snapshot/create",
                transport::encode_create_snapshot_form(&request),
            )
            .await?;
        transport::decode_created_snapshot_json_response(&body).map_err(parse_error)
    }

    /// Destroy a snapshot (`v1/snapshot/destroy`).
    pub async fn destroy_snapshot(&self, id: &SnapshotId) -> Result<(), VultrError> {
        self.post(
            "v1/snapshot/destroy",
            transport::encode_destroy_snapshot_form(id),
        )
        .await?;
        Ok(())
    }

    /// List ISOs available on the account (`v1/iso/list`).
    pub async fn isos(&self) -> Result<BTreeMap<IsoId, Iso>, VultrError> {
        let body = self.get("v1/iso/list", Vec::new()).await?;
        transport::decode_isos_json_response(&body).map_err(parse_error)
    }

    /// List startup scripts (`v1/startupscript/list`).
    pub async fn scripts(&self) -> Result<BTreeMap<ScriptId, Script>, VultrError> {
        let body = self.get("v1/startupscript/list", Vec::new()).await?;
        transport::decode_scripts_json_response(&body).map_err(parse_error)
    }

    /// Create a startup script (`v1/startupscript/create`) and read it back.
    ///
    /// Errors:
    /// - [`VultrError::MissingResource`] when the new script is not listed yet.
    pub async fn create_script(&self, request: CreateScript) -> Result<Script, VultrError> {
        let body = self
            .post(
                "v1/startupscript/create",
                transport::encode_create_script_form(&request),
            )
            .await?;
        let id = transport::decode_created_script_json_response(&body).map_err(parse_error)?;

        let mut scripts = self.scripts().await?;
        scripts.remove(&id).ok_or_else(|| missing("script", id))
    }

    /// Update a startup script's name and/or body (`v1/startupscript/update`).
    ///
    /// Older bindings posted updates to `v1/startupscript/destroy`; this
    /// method uses the documented update endpoint, which has not yet been
    /// verified against the live API.
    pub async fn update_script(&self, request: UpdateScript) -> Result<(), VultrError> {
        self.post(
            "v1/startupscript/update",
            transport::encode_update_script_form(&request),
        )
        .await?;
        Ok(())
    }

    /// Destroy a startup script (`v1/startupscript/destroy`).
    pub async fn destroy_script(&self, id: ScriptId) -> Result<(), VultrError> {
        self.post(
            "v1/startupscript/destroy",
            transport::encode_destroy_script_form(id),
        )
        .await?;
        Ok(())
    }

    /// List DNS domains (`v1/dns/list`).
    pub async fn dns_domains(&self) -> Result<Vec<DnsDomain>, VultrError> {
        let body = self.get("v1/dns/list", Vec::new()).await?;
        transport::decode_domains_json_response(&body).map_err(parse_error)
    }

    /// Create a DNS domain (`v1/dns/create_domain`) and read it back from the domain list.
    pub async fn create_dns_domain(
        &self,
        request: CreateDnsDomain,
    ) -> Result<DnsDomain, VultrError> {
        self.post(
            "v1/dns/create_domain",
            transport::encode_create_domain_form(&request),
        )
        .await?;

        self.dns_domains()
            .await?
            .into_iter()
            .find(|domain| domain.domain.matches(&request.domain))
            .ok_or_else(|| missing("domain", &request.domain))
    }

    /// Delete a DNS domain and all of its records (`v1/dns/delete_domain`).
    pub async fn delete_dns_domain(&self, domain: &DomainName) -> Result<(), VultrError> {
        self.post(
            "v1/dns/delete_domain",
            transport::encode_domain_form(domain),
        )
        .await?;
        Ok(())
    }

    /// List records of a DNS domain (`v1/dns/records`).
    pub async fn dns_records(&self, domain: &DomainName) -> Result<Vec<DnsRecord>, VultrError> {
        let body = self
            .get("v1/dns/records", transport::encode_domain_form(domain))
            .await?;
        transport::decode_records_json_response(&body).map_err(parse_error)
    }

    /// Add a record to a DNS domain (`v1/dns/create_record`).
    pub async fn create_dns_record(&self, request: CreateDnsRecord) -> Result<(), VultrError> {
        self.post(
            "v1/dns/create_record",
            transport::encode_create_record_form(&request),
        )
        .await?;
        Ok(())
    }

    /// Update a DNS record (`v1/dns/update_record`); unset fields are left unchanged.
    pub async fn update_dns_record(&self, request: UpdateDnsRecord) -> Result<(), VultrError> {
        self.post(
            "v1/dns/update_record",
            transport::encode_update_record_form(&request),
        )
        .await?;
        Ok(())
    }

    /// Delete a DNS record (`v1/dns/delete_record`).
    pub async fn delete_dns_record(
        &self,
        domain: &DomainName,
        id: RecordId,
    ) -> Result<(), VultrError> {
        self.post(
            "v1/dns/delete_record",
            transport::encode_delete_record_form(domain, id),
        )
        .await?;
        Ok(())
    }
}

fn check_status(path: &str, response: HttpResponse) -> Result<String, VultrError> {
    if (200..=299).contains(&response.status) {
        tracing::debug!(path, status = response.status, "Vultr API request succeeded");
        return Ok(response.body);
    }

    tracing::warn!(path, status = response.status, "Vultr API request failed");
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    Err(VultrError::HttpStatus {
        status: response.status,
        body,
    })
}
