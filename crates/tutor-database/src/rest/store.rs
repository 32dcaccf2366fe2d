//! User lookups through a PostgREST-compatible HTTP endpoint.
//!
//! Requests are made with the caller's own access token so that row-level
//! security on the remote side applies to the authenticated user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use tutor_core::config::RestStoreConfig;
use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_entity::user::UserRecord;

use crate::store::UserStore;

/// Media type requesting a single object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST error code for "single object requested, zero rows returned".
const NO_ROWS_CODE: &str = "PGRST116";

/// Error payload returned by PostgREST.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// User store that queries a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct RestUserStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestUserStore {
    /// Creates a REST store from configuration.
    pub fn new(config: &RestStoreConfig) -> AppResult<Self> {
        if config.url.is_empty() {
            return Err(AppError::configuration(
                "database.rest.url is required for the rest user store",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build REST client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl UserStore for RestUserStore {
    async fn find_user(&self, handle: &LookupHandle) -> AppResult<Option<UserRecord>> {
        let user_id = handle.user_id().as_str();
        let id_filter = format!("eq.{user_id}");

        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "id,credits"), ("id", id_filter.as_str())])
            .header("apikey", &self.api_key)
            .header("Accept", SINGLE_OBJECT)
            .bearer_auth(handle.access_token())
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Lookup, e.to_string(), e))?;

        let status = response.status();
        if status.is_success() {
            let record = response
                .json::<UserRecord>()
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Lookup, e.to_string(), e))?;
            debug!(user_id = %user_id, "REST user lookup hit");
            return Ok(Some(record));
        }

        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<RestErrorBody>(&body).ok();

        if is_no_rows(status, parsed.as_ref()) {
            debug!(user_id = %user_id, "REST user lookup miss");
            return Ok(None);
        }

        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("User lookup failed with status {status}"));
        warn!(user_id = %user_id, status = %status, message = %message, "REST user lookup failed");
        Err(AppError::lookup(message))
    }

    fn backend(&self) -> &'static str {
        "rest"
    }
}

/// A single-object query with zero matches is a miss, not a failure.
fn is_no_rows(status: StatusCode, body: Option<&RestErrorBody>) -> bool {
    status == StatusCode::NOT_ACCEPTABLE
        && body
            .and_then(|b| b.code.as_deref())
            .is_some_and(|code| code == NO_ROWS_CODE)
}
