//! HTTP client for the spreadsheet gviz endpoint.

use super::types::{GvizResponse, Row};
use super::RowSource;
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, GVIZ_BASE_URL};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Row source backed by the public gviz JSON endpoint
pub struct GvizClient {
    client: Client,
    base_url: String,
}

impl GvizClient {
    /// Create a client against the public spreadsheet host
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(GVIZ_BASE_URL)
    }

    /// Create a client against another host (mirrors, local fixtures)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL of one tab in gviz JSON form
    pub fn tab_url(&self, sheet_id: &str, tab_id: &str) -> String {
        format!(
            "{}{}/gviz/tq?tqx=out:json&gid={}",
            self.base_url, sheet_id, tab_id
        )
    }
}

impl RowSource for GvizClient {
    fn fetch_rows(&self, sheet_id: &str, tab_id: &str) -> Result<Vec<Row>, FetchError> {
        let url = self.tab_url(sheet_id, tab_id);

        info!("Fetching sheet {} tab {}", sheet_id, tab_id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        decode_rows(&body)
    }
}

/// Cut the JSON object out of the script wrapper gviz puts around it
///
/// The body looks like
/// `/*O_o*/\ngoogle.visualization.Query.setResponse({...});`.
pub fn extract_json_payload(body: &str) -> Result<&str, FetchError> {
    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(FetchError::InvalidResponse(
            "No JSON object in response body".to_string(),
        )),
    }
}

/// Decode a gviz response body into typed rows
///
/// **Public** - exposed for tests and offline fixtures
///
/// # Errors
/// * `FetchError::InvalidResponse` - no JSON payload, gviz error status, or no table
/// * `FetchError::JsonError` - payload is not a gviz response
pub fn decode_rows(body: &str) -> Result<Vec<Row>, FetchError> {
    let payload = extract_json_payload(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    if response.status.as_deref() == Some("error") {
        let reasons: Vec<String> = response.errors.iter().map(|e| e.describe()).collect();
        return Err(FetchError::InvalidResponse(format!(
            "gviz error: {}",
            if reasons.is_empty() {
                "unknown error".to_string()
            } else {
                reasons.join("; ")
            }
        )));
    }

    let table = response
        .table
        .ok_or_else(|| FetchError::InvalidResponse("Missing table field".to_string()))?;

    let rows: Vec<Row> = table.rows.into_iter().map(|r| r.into_cells()).collect();
    debug!("Decoded {} rows", rows.len());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::CellValue;

    const WRAPPED: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse({\"version\":\"0.6\",\"status\":\"ok\",\"table\":{\"cols\":[],\"rows\":[{\"c\":[null,{\"v\":\"Lose Control\"}]},{\"c\":[{\"v\":\"2/13/25\"},{\"v\":100.0}]}]}});";

    #[test]
    fn test_tab_url() {
        let client = GvizClient::with_base_url("http://sheets.local/d/").unwrap();
        assert_eq!(
            client.tab_url("abc", "42"),
            "http://sheets.local/d/abc/gviz/tq?tqx=out:json&gid=42"
        );
    }

    #[test]
    fn test_extract_json_payload() {
        let payload = extract_json_payload(WRAPPED).unwrap();
        assert!(payload.starts_with('{'));
        assert!(payload.ends_with('}'));
        assert!(extract_json_payload("<html>denied</html>").is_err());
    }

    #[test]
    fn test_decode_rows() {
        let rows = decode_rows(WRAPPED).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], CellValue::Empty);
        assert_eq!(rows[0][1], CellValue::Text("Lose Control".to_string()));
        assert_eq!(rows[1][1], CellValue::Number(100.0));
    }

    #[test]
    fn test_decode_gviz_error_status() {
        let body = r#"setResponse({"status":"error","errors":[{"reason":"access_denied","message":"Access denied"}]});"#;
        match decode_rows(body) {
            Err(FetchError::InvalidResponse(msg)) => assert!(msg.contains("Access denied")),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_table() {
        let result = decode_rows(r#"setResponse({"status":"ok"});"#);
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[test]
    fn test_decode_garbage_json() {
        let result = decode_rows("setResponse({not json});");
        assert!(matches!(result, Err(FetchError::JsonError(_))));
    }
}
