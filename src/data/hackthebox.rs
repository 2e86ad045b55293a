//! HackTheBox catalog client.
//!
//! Read-only access to the machine catalog. All requests are idempotent GETs against a
//! fixed, versioned base path and are authenticated with a static bearer token. Responses
//! are decoded by pure functions (`parse_machine_list`, `running_machine_name`,
//! `parse_profile`) so the shape rules can be tested without a network. No retries are
//! performed; every failure propagates to the caller.

use dioxus_logger::tracing;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use serenity::async_trait;
use url::Url;

use crate::{error::catalog::CatalogError, model::machine::MachineRecord};

/// The catalog API rejects requests without a browser-like user agent.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:98.0) Gecko/20100101 Firefox/98.0";

/// Page size requested from the paginated active-machines endpoint.
///
/// Only the first page is fetched, so the active list is capped to this many machines.
pub const ACTIVE_MACHINES_PAGE_SIZE: u32 = 100;

/// Source of machine records.
#[async_trait]
pub trait MachineCatalog: Send + Sync {
    /// Fetches the machine currently running for the token's account, if any.
    async fn fetch_running_machine(&self) -> Result<Option<MachineRecord>, CatalogError>;

    /// Fetches machines scheduled for release, in the order the API returns them.
    async fn fetch_upcoming_machines(&self) -> Result<Vec<MachineRecord>, CatalogError>;

    /// Fetches the first page of currently active machines.
    async fn fetch_all_active_machines(&self) -> Result<Vec<MachineRecord>, CatalogError>;
}

/// `MachineCatalog` backed by the HackTheBox labs API.
pub struct HackTheBoxClient {
    /// Shared HTTP client; clones share the connection pool.
    http: reqwest::Client,
    /// Versioned API base, e.g. `https://labs.hackthebox.com/api/v4`.
    base_url: Url,
    /// Bearer token sent with every request.
    token: String,
}

impl HackTheBoxClient {
    pub fn new(http: reqwest::Client, base_url: Url, token: String) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded individually, so machine names containing spaces or
    /// slashes cannot escape their path position.
    ///
    /// # Arguments
    /// - `segments` - Path segments to append, in order
    ///
    /// # Returns
    /// - `Url` - Absolute endpoint URL without a query string
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Config rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn upcoming_machines_url(&self) -> Url {
        self.endpoint(&["machine", "unreleased"])
    }

    pub fn active_machines_url(&self) -> Url {
        let mut url = self.endpoint(&["machine", "paginated"]);
        url.query_pairs_mut()
            .append_pair("per_page", &ACTIVE_MACHINES_PAGE_SIZE.to_string());
        url
    }

    pub fn running_machine_url(&self) -> Url {
        self.endpoint(&["machine", "active"])
    }

    pub fn machine_profile_url(&self, name: &str) -> Url {
        self.endpoint(&["machine", "profile", name])
    }

    /// Builds an authenticated GET with the headers the catalog API expects.
    pub fn request(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
    }

    /// Performs an authenticated GET and decodes the body as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - Decoded response body
    /// - `Err(CatalogError::RemoteUnavailable)` - Transport failure, non-success status, or
    ///   a body that is not JSON
    async fn get_json(&self, url: Url) -> Result<Value, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self.request(url).send().await?.error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl MachineCatalog for HackTheBoxClient {
    /// The active-machine endpoint only returns a summary, so a second request fetches the
    /// full profile of the running machine by name.
    async fn fetch_running_machine(&self) -> Result<Option<MachineRecord>, CatalogError> {
        let active = self.get_json(self.running_machine_url()).await?;

        let Some(name) = running_machine_name(&active)? else {
            return Ok(None);
        };

        let profile = self.get_json(self.machine_profile_url(name)).await?;

        Ok(Some(parse_profile(&profile)?))
    }

    async fn fetch_upcoming_machines(&self) -> Result<Vec<MachineRecord>, CatalogError> {
        let body = self.get_json(self.upcoming_machines_url()).await?;
        parse_machine_list(&body)
    }

    async fn fetch_all_active_machines(&self) -> Result<Vec<MachineRecord>, CatalogError> {
        let body = self.get_json(self.active_machines_url()).await?;
        parse_machine_list(&body)
    }
}

/// Decodes a `{"data": [...]}` list response into machine records.
///
/// # Returns
/// - `Ok(Vec<MachineRecord>)` - Records in response order
/// - `Err(CatalogError::MissingField("data"))` - No `data` array in the body
/// - `Err(CatalogError)` - Any entry failed to normalize
pub fn parse_machine_list(body: &Value) -> Result<Vec<MachineRecord>, CatalogError> {
    body.get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::MissingField("data".to_string()))?
        .iter()
        .map(MachineRecord::from_json)
        .collect()
}

/// Extracts the payload of an `{"info": ...}` single-machine response.
///
/// # Returns
/// - `Ok(Some(&Value))` - The `info` object
/// - `Ok(None)` - `info` is present but `null`
/// - `Err(CatalogError::MissingField("info"))` - No `info` key in the body
pub fn parse_info(body: &Value) -> Result<Option<&Value>, CatalogError> {
    match body.get("info") {
        None => Err(CatalogError::MissingField("info".to_string())),
        Some(Value::Null) => Ok(None),
        Some(info) => Ok(Some(info)),
    }
}

/// Reads the name of the running machine from an active-machine response.
///
/// # Returns
/// - `Ok(Some(&str))` - Name to look up the full profile with
/// - `Ok(None)` - Nothing is running; no profile request is needed
/// - `Err(CatalogError::MissingField)` - No `info` key, or `info` without a string `name`
pub fn running_machine_name(body: &Value) -> Result<Option<&str>, CatalogError> {
    let Some(info) = parse_info(body)? else {
        return Ok(None);
    };

    info.get("name")
        .and_then(Value::as_str)
        .map(Some)
        .ok_or_else(|| CatalogError::MissingField("info.name".to_string()))
}

/// Decodes a machine profile response into a record.
///
/// A profile always describes a machine, so a null `info` is an error here.
pub fn parse_profile(body: &Value) -> Result<MachineRecord, CatalogError> {
    let machine =
        parse_info(body)?.ok_or_else(|| CatalogError::MissingField("info".to_string()))?;

    MachineRecord::from_json(machine)
}
