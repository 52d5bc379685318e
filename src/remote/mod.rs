//! Remote data store client.
//!
//! Talks to a PostgREST-style endpoint: five read-only collection queries
//! plus one counter RPC. Every call is a single attempt; degradation
//! decisions (static fallback, endorsement rollback) belong to the callers,
//! so no retry loop lives here.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::RemoteConfig;
use crate::content::{Education, Experience, Profile, Project, Skill};
use crate::error::{FolioError, Result};

/// Client timeout; the only bound on a hung remote query.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote portfolio store.
pub struct RemoteStore {
    base_url: String,
    key: String,
    configured: bool,
    http_client: reqwest::Client,
}

impl RemoteStore {
    /// Create a client from config. Placeholder credentials still yield a
    /// client, but one that reports `is_configured() == false` and is never
    /// expected to be queried.
    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FolioError::Config(format!("HTTP client error: {e}")))?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            configured: config.is_configured(),
            http_client,
        })
    }

    /// Build a client against an explicit endpoint (tests).
    pub fn new(base_url: &str, key: &str) -> Result<Self> {
        Self::from_config(&RemoteConfig {
            url: base_url.to_string(),
            key: key.to_string(),
        })
    }

    /// Whether a real endpoint is behind this client.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Fetch the singleton profile row.
    pub async fn fetch_profile(&self) -> Result<Profile> {
        let rows: Vec<Profile> = self.get_rows("profile", None, Some(1)).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| FolioError::RemoteQuery("profile: empty result".to_string()))
    }

    /// Fetch all skills, ascending by id.
    pub async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        self.get_rows("skills", Some("id.asc"), None).await
    }

    /// Fetch all experience rows, ascending by id.
    pub async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        self.get_rows("experiences", Some("id.asc"), None).await
    }

    /// Fetch all projects, descending by id (newest first).
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get_rows("projects", Some("id.desc"), None).await
    }

    /// Fetch all education rows, descending by id.
    pub async fn fetch_education(&self) -> Result<Vec<Education>> {
        self.get_rows("education", Some("id.desc"), None).await
    }

    /// Increment a skill's endorsement counter by one.
    ///
    /// Idempotency is the caller's responsibility; the server applies
    /// every accepted call.
    pub async fn increment_love(&self, skill_id: i64) -> Result<()> {
        let request_id = new_request_id();
        let url = format!("{}/rest/v1/rpc/increment_love", self.base_url);
        debug!(request_id = %request_id, skill_id, "remote counter increment");

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("X-Request-ID", &request_id)
            .json(&serde_json::json!({ "skill_id": skill_id }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FolioError::RemoteQuery(format!(
                "increment_love({skill_id}): HTTP {status}"
            )))
        }
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<T>> {
        let request_id = new_request_id();
        let url = format!("{}/rest/v1/{table}", self.base_url);
        debug!(request_id = %request_id, table, order, "remote collection query");

        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        if let Some(order) = order {
            query.push(("order", order.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("X-Request-ID", &request_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::RemoteQuery(format!("{table}: HTTP {status}")));
        }

        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStore")
            .field("base_url", &self.base_url)
            .field("configured", &self.configured)
            .finish_non_exhaustive()
    }
}

fn new_request_id() -> String {
    format!(
        "folio-{}",
        Uuid::new_v4().to_string().split('-').next().unwrap_or("0")
    )
}

/// Drive a future to completion on a current-thread runtime.
///
/// All application logic stays on one logical thread; the runtime only
/// interleaves the I/O completions of the fan-out queries.
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| FolioError::Runtime(format!("build runtime: {err}")))?;
    Ok(runtime.block_on(future))
}
