//! API client and the request executor shared by every endpoint.

use currconv_types::{
    Convert, ConvertCompact, ConvertHistorical, ConvertHistoricalCompact,
    ConvertHistoricalRequest, ConvertRequest, Countries, Currencies, DATE_FORMAT, ErrorResponse,
    Usage,
};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ClientError;

/// Query parameters in insertion order.
type QueryParams = Vec<(&'static str, String)>;

const API_ROOT: &str = "api";

/// Currency converter API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http: Client,
}

impl ApiClient {
    /// Creates a new client.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Replaces the HTTP client, e.g. to set timeouts or a proxy.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the latest conversion rate for each `FROM_TO` pair.
    pub async fn convert(&self, req: &ConvertRequest) -> Result<Convert, ClientError> {
        self.call(true, "convert", |q| {
            req.validate()?;
            q.push(("q", req.query()));
            Ok(())
        })
        .await
    }

    /// Returns the latest rates as a flat pair to rate map.
    pub async fn convert_compact(
        &self,
        req: &ConvertRequest,
    ) -> Result<ConvertCompact, ClientError> {
        self.call(true, "convert", |q| {
            req.validate()?;
            q.push(("q", req.query()));
            q.push(("compact", "ultra".to_string()));
            Ok(())
        })
        .await
    }

    /// Returns historical rates for a date or date range.
    pub async fn convert_historical(
        &self,
        req: &ConvertHistoricalRequest,
    ) -> Result<ConvertHistorical, ClientError> {
        self.call(true, "convert", |q| historical_params(req, q)).await
    }

    /// Returns historical rates as a pair to date to rate map.
    pub async fn convert_historical_compact(
        &self,
        req: &ConvertHistoricalRequest,
    ) -> Result<ConvertHistoricalCompact, ClientError> {
        self.call(true, "convert", |q| {
            historical_params(req, q)?;
            q.push(("compact", "ultra".to_string()));
            Ok(())
        })
        .await
    }

    /// Lists all supported currencies.
    pub async fn currencies(&self) -> Result<Currencies, ClientError> {
        self.call(true, "currencies", |_| Ok(())).await
    }

    /// Lists all supported countries.
    pub async fn countries(&self) -> Result<Countries, ClientError> {
        self.call(true, "countries", |_| Ok(())).await
    }

    /// Returns the current usage of the configured API key.
    pub async fn usage(&self) -> Result<Usage, ClientError> {
        self.call(false, "others/usage", |_| Ok(())).await
    }

    /// Performs one GET against `path` and decodes the body as `T`.
    ///
    /// `params` adds the endpoint's query parameters; when it fails nothing is
    /// sent.
    async fn call<T, F>(&self, prefix_api: bool, path: &str, params: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(&mut QueryParams) -> Result<(), ClientError>,
    {
        let mut url = self.endpoint_url(prefix_api, path)?;

        let mut query = QueryParams::new();
        params(&mut query)?;
        query.push(("apiKey", self.config.api_key.clone()));
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

        tracing::debug!(path, "sending request");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;
        tracing::debug!(path, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(remote_error(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint_url(&self, prefix_api: bool, path: &str) -> Result<Url, ClientError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base).map_err(|e| {
            ClientError::InvalidConfiguration(format!("cannot parse base URL {base:?}: {e}"))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ClientError::InvalidConfiguration(format!("base URL {base:?} cannot have a path"))
            })?;
            segments.pop_if_empty();
            if prefix_api {
                segments.push(API_ROOT);
                segments.extend(split_path(&self.config.version));
            }
            segments.extend(split_path(path));
        }

        Ok(url)
    }
}

fn historical_params(
    req: &ConvertHistoricalRequest,
    q: &mut QueryParams,
) -> Result<(), ClientError> {
    let date = req.validate()?;
    q.push(("q", req.query()));
    q.push(("date", date.format(DATE_FORMAT).to_string()));
    if let Some(end_date) = req.end_date {
        q.push(("endDate", end_date.format(DATE_FORMAT).to_string()));
    }
    Ok(())
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Builds the error for a non-200 response, falling back to the raw body
/// when it is not a JSON error envelope.
fn remote_error(status: StatusCode, body: String) -> ClientError {
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) => body,
    };
    ClientError::Remote {
        status: status.as_u16(),
        message,
    }
}
