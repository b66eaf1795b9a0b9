//! Request extraction.
//!
//! A use case never sees the raw request. It declares which sections it
//! reads and receives a record with exactly those keys:
//!
//! ```text
//! axum Request → RawRequest (all sections) → extract(fields) → ExtractedRequest → U::Input
//! ```
//!
//! `locals` is server-side state written by middleware, not client input.

use std::collections::BTreeMap;

use axum::extract::{FromRequestParts, Path, Query, Request};
use axum::extract::rejection::PathRejection;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::DomainError;

/// Largest request body that will be buffered.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// A section of the incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestField {
    Body,
    Params,
    Query,
    Headers,
    Locals,
}

impl RequestField {
    pub const ALL: [RequestField; 5] = [
        RequestField::Body,
        RequestField::Params,
        RequestField::Query,
        RequestField::Headers,
        RequestField::Locals,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RequestField::Body => "body",
            RequestField::Params => "params",
            RequestField::Query => "query",
            RequestField::Headers => "headers",
            RequestField::Locals => "locals",
        }
    }
}

impl std::fmt::Display for RequestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-scoped server state, carried in request extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locals(pub Map<String, Value>);

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Every section of a request, read once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRequest {
    /// Parsed JSON body. `Null` when the body is empty.
    pub body: Value,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    /// Header values that are valid UTF-8, keyed by lower-case name.
    pub headers: BTreeMap<String, String>,
    pub locals: Locals,
}

impl RawRequest {
    /// Reads all sections of an axum request, buffering at most
    /// [`DEFAULT_BODY_LIMIT`] bytes of body.
    ///
    /// # Errors
    ///
    /// `ValidationError` for malformed path params, an unreadable body, or a
    /// body that is not JSON.
    pub async fn from_request(request: Request) -> Result<Self, DomainError> {
        Self::from_request_with_limit(request, DEFAULT_BODY_LIMIT).await
    }

    pub async fn from_request_with_limit(
        request: Request,
        body_limit: usize,
    ) -> Result<Self, DomainError> {
        let (mut parts, body) = request.into_parts();

        let params = match Path::<BTreeMap<String, String>>::from_request_parts(&mut parts, &())
            .await
        {
            Ok(Path(params)) => params,
            Err(PathRejection::MissingPathParams(_)) => BTreeMap::new(),
            Err(rejection) => return Err(DomainError::validation(rejection.body_text())),
        };

        let query = Query::<BTreeMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .map_err(|rejection| DomainError::validation(rejection.body_text()))?;

        let mut headers = BTreeMap::new();
        for (name, value) in &parts.headers {
            let Ok(value) = value.to_str() else {
                continue;
            };
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing: &mut String| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        let locals = parts.extensions.remove::<Locals>().unwrap_or_default();

        let bytes = axum::body::to_bytes(body, body_limit)
            .await
            .map_err(|e| DomainError::validation("Request body could not be read").with_cause(e))?;
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| DomainError::validation("Request body is not valid JSON").with_cause(e))?
        };

        Ok(Self {
            body,
            params,
            query,
            headers,
            locals,
        })
    }

    fn section(&self, field: RequestField) -> Value {
        fn strings(map: &BTreeMap<String, String>) -> Value {
            Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            )
        }

        match field {
            RequestField::Body => self.body.clone(),
            RequestField::Params => strings(&self.params),
            RequestField::Query => strings(&self.query),
            RequestField::Headers => strings(&self.headers),
            RequestField::Locals => Value::Object(self.locals.0.clone()),
        }
    }
}

/// The record handed to a use case: exactly the requested sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRequest(BTreeMap<RequestField, Value>);

impl ExtractedRequest {
    pub fn get(&self, field: RequestField) -> Option<&Value> {
        self.0.get(&field)
    }

    pub fn keys(&self) -> impl Iterator<Item = RequestField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The record as a JSON object keyed by section name.
    pub fn into_value(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(field, value)| (field.as_str().to_string(), value))
                .collect(),
        )
    }

    /// Decodes the record into a use case's typed input.
    ///
    /// # Errors
    ///
    /// `ValidationError` naming the mismatch when the record does not have
    /// the shape of `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, DomainError> {
        serde_json::from_value(self.into_value()).map_err(|e| {
            DomainError::validation(format!("Invalid request: {}", e)).with_cause(e)
        })
    }
}

/// Projects the requested sections out of `request`. Pure; no validation.
pub fn extract(fields: &[RequestField], request: &RawRequest) -> ExtractedRequest {
    ExtractedRequest(
        fields
            .iter()
            .map(|&field| (field, request.section(field)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorTag;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;

    fn sample() -> RawRequest {
        let mut locals = Locals::new();
        locals.insert("requestId", "req-1");
        RawRequest {
            body: json!({ "productId": "rye", "quantity": 2 }),
            params: BTreeMap::from([("id".to_string(), "rye".to_string())]),
            query: BTreeMap::from([("name".to_string(), "Rye".to_string())]),
            headers: BTreeMap::from([("x-request-id".to_string(), "req-1".to_string())]),
            locals,
        }
    }

    #[test]
    fn extracts_exactly_requested_keys() {
        let record = extract(&[RequestField::Body, RequestField::Params], &sample());

        assert_eq!(record.keys().collect::<Vec<_>>(), vec![RequestField::Body, RequestField::Params]);
        assert_eq!(record.get(RequestField::Params), Some(&json!({ "id": "rye" })));
        assert!(record.get(RequestField::Query).is_none());
    }

    #[test]
    fn empty_field_list_yields_empty_record() {
        let record = extract(&[], &sample());
        assert!(record.is_empty());
        assert_eq!(record.into_value(), json!({}));
    }

    #[test]
    fn every_field_is_copied_verbatim() {
        let record = extract(&RequestField::ALL, &sample());

        assert_eq!(record.len(), 5);
        assert_eq!(
            record.into_value(),
            json!({
                "body": { "productId": "rye", "quantity": 2 },
                "params": { "id": "rye" },
                "query": { "name": "Rye" },
                "headers": { "x-request-id": "req-1" },
                "locals": { "requestId": "req-1" },
            })
        );
    }

    #[test]
    fn decode_reports_shape_mismatch_as_validation() {
        #[derive(Debug, Deserialize)]
        struct NeedsParams {
            #[allow(dead_code)]
            params: BTreeMap<String, String>,
        }

        let record = extract(&[RequestField::Body], &sample());
        let error = record.decode::<NeedsParams>().unwrap_err();

        assert_eq!(error.tag(), ErrorTag::ValidationError);
        assert!(error.message().contains("params"));
    }

    #[tokio::test]
    async fn reads_sections_from_axum_request() {
        let mut request = Request::builder()
            .uri("/products?name=Rye&sort=asc")
            .header("x-request-id", "abc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"quantity":1}"#))
            .unwrap();
        let mut locals = Locals::new();
        locals.insert("seen", true);
        request.extensions_mut().insert(locals);

        let raw = RawRequest::from_request(request).await.unwrap();

        assert_eq!(raw.body, json!({ "quantity": 1 }));
        assert_eq!(raw.query.get("name").map(String::as_str), Some("Rye"));
        assert_eq!(raw.headers.get("x-request-id").map(String::as_str), Some("abc"));
        assert_eq!(raw.locals.get("seen"), Some(&json!(true)));
        assert!(raw.params.is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_null() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let raw = RawRequest::from_request(request).await.unwrap();

        assert_eq!(raw.body, Value::Null);
    }

    #[tokio::test]
    async fn malformed_json_is_validation_error() {
        let request = Request::builder()
            .uri("/orders")
            .body(Body::from("{not json"))
            .unwrap();

        let error = RawRequest::from_request(request).await.unwrap_err();

        assert_eq!(error.tag(), ErrorTag::ValidationError);
        assert!(error.cause().is_some());
    }
}
