use crate::shared::config::SupabaseConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

use super::error::map_error_response;
use super::query::TableQuery;
use super::retry::{RetryConfig, RetryUtil};

/// Thin client for the hosted store's REST tables
///
/// Reads are retried on transient failures; writes are sent exactly once so
/// that store-side constraints (unique keys, RLS) decide the outcome.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: String,
    api_key: String,
    access_token: Option<String>,
    read_retry: RetryConfig,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent("InfluencerFlow/1.0")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            api_key: config.anon_key.clone(),
            access_token: config.access_token.clone(),
            read_retry: RetryConfig::default(),
        })
    }

    pub fn table_url(&self, table: &str, query: &TableQuery) -> String {
        if query.is_empty() {
            format!("{}/{}", self.rest_url, table)
        } else {
            format!("{}/{}?{}", self.rest_url, table, query.to_query_string())
        }
    }

    fn request(&self, method: Method, table: &str, query: &TableQuery) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        self.http
            .request(method, self.table_url(table, query))
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
            .header(header::ACCEPT, "application/json")
    }

    /// Read rows from a table
    pub async fn select<T>(&self, table: &str, query: &TableQuery) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        LogContext::store_operation("select", table, None);
        let started = Instant::now();

        let rows = RetryUtil::with_retry(
            || async move {
                let response = self
                    .request(Method::GET, table, query)
                    .send()
                    .await
                    .map_err(AppError::from)?;
                Self::decode_rows::<T>(response, table).await
            },
            &self.read_retry,
            &format!("select {}", table),
        )
        .await?;

        LogContext::store_operation("select", table, Some(started.elapsed().as_millis() as u64));
        debug!("Fetched {} row(s) from {}", rows.len(), table);
        Ok(rows)
    }

    /// Insert one row and return the stored representation
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> AppResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        LogContext::store_operation("insert", table, None);
        let response = self
            .request(Method::POST, table, &TableQuery::new())
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::decode_rows(response, table).await
    }

    /// Patch rows matched by `query` and return them
    pub async fn update<B, T>(&self, table: &str, query: &TableQuery, body: &B) -> AppResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        LogContext::store_operation("update", table, None);
        let response = self
            .request(Method::PATCH, table, query)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::decode_rows(response, table).await
    }

    /// Delete rows matched by `query`; returns how many were removed
    pub async fn delete(&self, table: &str, query: &TableQuery) -> AppResult<usize> {
        if query.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Refusing unfiltered delete on {}",
                table
            )));
        }
        LogContext::store_operation("delete", table, None);
        let response = self
            .request(Method::DELETE, table, query)
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let removed: Vec<serde_json::Value> = Self::decode_rows(response, table).await?;
        Ok(removed.len())
    }

    async fn decode_rows<T>(response: Response, table: &str) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_response(status, &body, table));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice::<Vec<T>>(&bytes).map_err(|e| {
            AppError::SerializationError(format!("Failed to parse {} rows: {}", table, e))
        })
    }
}
