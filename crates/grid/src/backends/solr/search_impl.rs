//! SearchEngine implementation for the Solr engine.

use async_trait::async_trait;
use serde_json::Value;

use crate::engine::SearchEngine;
use crate::error::{EngineError, GridResult};
use crate::types::{ResultSet, SelectRequest};

use super::backend::{ENGINE_NAME, SolrEngine};
use super::params::select_params;

#[async_trait]
impl SearchEngine for SolrEngine {
    fn engine_name(&self) -> &'static str {
        ENGINE_NAME
    }

    async fn execute(&self, request: &SelectRequest) -> GridResult<ResultSet> {
        let params = select_params(request, self.config().max_rows);

        let response = self
            .client()
            .post(self.select_url().clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| EngineError::ConnectionFailed {
                engine_name: ENGINE_NAME.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| EngineError::ConnectionFailed {
            engine_name: ENGINE_NAME.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
            tracing::debug!(status = status.as_u16(), %message, "Solr rejected select request");
            return Err(EngineError::QueryFailed {
                engine_name: ENGINE_NAME.to_string(),
                status: Some(status.as_u16()),
                message,
            }
            .into());
        }

        parse_select_response(&body)
    }
}

/// Parses a JSON `/select` response body.
///
/// Reads `response.numFound` and `response.docs`; documents that are not
/// JSON objects are skipped.
pub fn parse_select_response(body: &str) -> GridResult<ResultSet> {
    let value: Value = serde_json::from_str(body)?;

    let response = value
        .get("response")
        .ok_or_else(|| serialization_error("missing 'response' object"))?;

    let num_found = response
        .get("numFound")
        .and_then(Value::as_u64)
        .ok_or_else(|| serialization_error("missing or invalid 'response.numFound'"))?;

    let documents = response
        .get("docs")
        .and_then(Value::as_array)
        .ok_or_else(|| serialization_error("missing or invalid 'response.docs'"))?
        .iter()
        .filter_map(|doc| doc.as_object().cloned())
        .collect();

    Ok(ResultSet::new(num_found, documents))
}

fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("msg")?
        .as_str()
        .map(str::to_string)
}

fn serialization_error(message: &str) -> crate::error::GridError {
    EngineError::Serialization {
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use serde_json::json;

    #[test]
    fn test_parse_select_response() {
        let body = json!({
            "responseHeader": {"status": 0, "QTime": 3},
            "response": {
                "numFound": 57,
                "start": 0,
                "docs": [
                    {"name": "Ann", "age": 42},
                    {"name": "Bob"}
                ]
            }
        })
        .to_string();

        let result = parse_select_response(&body).unwrap();
        assert_eq!(result.num_found, 57);
        assert_eq!(result.documents.len(), 2);
        assert_eq!(result.documents[0].get("age"), Some(&json!(42)));
    }

    #[test]
    fn test_parse_rejects_missing_response() {
        let err = parse_select_response(r#"{"responseHeader": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            GridError::Engine(EngineError::Serialization { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_select_response("<html>").unwrap_err();
        assert!(matches!(
            err,
            GridError::Engine(EngineError::Serialization { .. })
        ));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = json!({"error": {"msg": "undefined field foo", "code": 400}}).to_string();
        assert_eq!(error_message(&body).as_deref(), Some("undefined field foo"));
        assert_eq!(error_message("not json"), None);
    }
}
