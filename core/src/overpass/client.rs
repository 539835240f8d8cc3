use std::{error::Error as StdError, fmt};

use super::model::OverpassResponse;

const BODY_PREVIEW_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverpassHttpErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Status,
    Unknown,
}

impl OverpassHttpErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Decode => "decode",
            Self::Status => "status",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OverpassHttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct OverpassHttpError {
    kind: OverpassHttpErrorKind,
    status: Option<u16>,
    url: Option<String>,
    message: String,
    source: Option<anyhow::Error>,
}

impl OverpassHttpError {
    pub fn kind(&self) -> OverpassHttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn from_reqwest(err: reqwest::Error, url: String) -> Self {
        let kind = if err.is_timeout() {
            OverpassHttpErrorKind::Timeout
        } else if err.is_connect() {
            OverpassHttpErrorKind::Connect
        } else if err.is_request() {
            OverpassHttpErrorKind::Request
        } else if err.is_body() {
            OverpassHttpErrorKind::Body
        } else if err.is_decode() {
            OverpassHttpErrorKind::Decode
        } else {
            OverpassHttpErrorKind::Unknown
        };
        let status = err.status().map(|s| s.as_u16());
        let message = err.to_string();
        OverpassHttpError {
            kind,
            status,
            url: Some(url),
            message,
            source: Some(anyhow::Error::new(err)),
        }
    }

    fn status_error(status: u16, url: String, preview: String) -> Self {
        OverpassHttpError {
            kind: OverpassHttpErrorKind::Status,
            status: Some(status),
            url: Some(url),
            message: preview,
            source: None,
        }
    }

    fn decode_error(status: u16, url: String, err: serde_json::Error, preview: String) -> Self {
        let message = format!("failed to decode response body: {} | body={}", err, preview);
        OverpassHttpError {
            kind: OverpassHttpErrorKind::Decode,
            status: Some(status),
            url: Some(url),
            message,
            source: Some(anyhow::Error::new(err)),
        }
    }
}

impl fmt::Display for OverpassHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overpass http error kind={}", self.kind)?;
        if let Some(status) = self.status {
            write!(f, " status={}", status)?;
        }
        if let Some(url) = &self.url {
            write!(f, " url={}", url)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl StdError for OverpassHttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out = String::new();
    let mut truncated = false;
    for (idx, ch) in trimmed.chars().enumerate() {
        if idx >= BODY_PREVIEW_LIMIT {
            truncated = true;
            break;
        }
        out.push(ch);
    }

    if truncated {
        out.push_str("...");
    }

    out
}

async fn parse_overpass_response(resp: reqwest::Response) -> anyhow::Result<OverpassResponse> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp
        .text()
        .await
        .map_err(|err| OverpassHttpError::from_reqwest(err, url.clone()))?;

    if !status.is_success() {
        let preview = preview_body(&body);
        return Err(OverpassHttpError::status_error(status.as_u16(), url, preview).into());
    }

    serde_json::from_str::<OverpassResponse>(&body).map_err(|err| {
        let preview = preview_body(&body);
        OverpassHttpError::decode_error(status.as_u16(), url, err, preview).into()
    })
}

/// Thin client for the Overpass API interpreter endpoint.
///
/// Queries are posted as a raw QL string; the query itself must request
/// JSON output with `[out:json]`.
#[derive(Clone)]
pub struct OverpassClient {
    endpoint: String,
    http: reqwest::Client,
}

impl OverpassClient {
    pub fn new(endpoint: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub async fn fetch(&self, query: &str) -> anyhow::Result<OverpassResponse> {
        let url = &self.endpoint;
        tracing::debug!(
            target: "geest.overpass",
            stage = "overpass.http.fetch.in",
            url = %url,
            query_len = query.len()
        );
        let resp = self
            .http
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(query.to_string())
            .send()
            .await
            .map_err(|err| OverpassHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let parsed = parse_overpass_response(resp).await?;
        tracing::debug!(
            target: "geest.overpass",
            stage = "overpass.http.fetch.out",
            status = %status,
            elements = parsed.elements.len()
        );
        Ok(parsed)
    }
}
