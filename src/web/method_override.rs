//! HTTP method override for HTML forms.
//!
//! Browsers only submit forms as GET or POST. A POST may name the verb it
//! stands for, checked in this order:
//!
//! 1. the `X-HTTP-Method-Override` header
//! 2. a `_method` query parameter (`/posts/abc?_method=DELETE`)
//! 3. a `_method` field in a URL-encoded form body
//!
//! Only PATCH, PUT and DELETE are honoured. The rewrite must happen before
//! routing, so this middleware wraps the whole router.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::components::METHOD_OVERRIDE_FIELD;

pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Largest form body buffered while looking for an override field.
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

/// Middleware entry point for [`axum::middleware::from_fn`].
pub async fn method_override(request: Request, next: Next) -> Response {
    match apply_override(request).await {
        Ok(request) => next.run(request).await,
        Err(response) => response,
    }
}

async fn apply_override(mut request: Request) -> Result<Request, Response> {
    if request.method() != Method::POST {
        return Ok(request);
    }

    let from_headers = header_override(request.headers());
    if let Some(method) = from_headers.or_else(|| query_override(request.uri())) {
        debug!(%method, uri = %request.uri(), "Applying method override");
        *request.method_mut() = method;
        return Ok(request);
    }

    if !is_urlencoded_form(request.headers()) {
        return Ok(request);
    }

    // The body has to be read to find the field; put it back for the handler.
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to buffer form body");
            (StatusCode::BAD_REQUEST, "Failed to read request body").into_response()
        })?;

    let method = form_override(&bytes);
    let mut request = Request::from_parts(parts, Body::from(bytes));
    if let Some(method) = method {
        debug!(%method, uri = %request.uri(), "Applying method override from form field");
        *request.method_mut() = method;
    }
    Ok(request)
}

fn parse_method(value: &str) -> Option<Method> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn header_override(headers: &HeaderMap) -> Option<Method> {
    headers
        .get(METHOD_OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_method)
}

fn query_override(uri: &Uri) -> Option<Method> {
    let query = uri.query()?;
    field_override(query.as_bytes())
}

fn form_override(body: &Bytes) -> Option<Method> {
    field_override(body)
}

fn field_override(encoded: &[u8]) -> Option<Method> {
    url::form_urlencoded::parse(encoded)
        .find(|(key, _)| key == METHOD_OVERRIDE_FIELD)
        .and_then(|(_, value)| parse_method(&value))
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("delete"), Some(Method::DELETE));
        assert_eq!(parse_method(" Patch "), Some(Method::PATCH));
        assert_eq!(parse_method("PUT"), Some(Method::PUT));
        assert_eq!(parse_method("GET"), None);
        assert_eq!(parse_method("POST"), None);
        assert_eq!(parse_method(""), None);
    }

    #[test]
    fn test_query_override() {
        let uri: Uri = "/posts/abc?_method=DELETE".parse().unwrap();
        assert_eq!(query_override(&uri), Some(Method::DELETE));

        let uri: Uri = "/posts/abc?other=1".parse().unwrap();
        assert_eq!(query_override(&uri), None);

        let uri: Uri = "/posts/abc".parse().unwrap();
        assert_eq!(query_override(&uri), None);
    }

    #[test]
    fn test_form_override() {
        let body = Bytes::from_static(b"_method=PATCH&content=Hello+there");
        assert_eq!(form_override(&body), Some(Method::PATCH));

        let body = Bytes::from_static(b"content=_method%3DDELETE");
        assert_eq!(form_override(&body), None);
    }

    #[test]
    fn test_header_override() {
        let mut headers = HeaderMap::new();
        assert_eq!(header_override(&headers), None);

        headers.insert(METHOD_OVERRIDE_HEADER, HeaderValue::from_static("put"));
        assert_eq!(header_override(&headers), Some(Method::PUT));
    }

    #[tokio::test]
    async fn test_apply_override_ignores_non_post() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/posts/abc?_method=DELETE")
            .body(Body::empty())
            .unwrap();

        let request = apply_override(request).await.unwrap();
        assert_eq!(request.method(), Method::GET);
    }

    #[tokio::test]
    async fn test_apply_override_keeps_form_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/posts/abc")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("_method=patch&content=new"))
            .unwrap();

        let request = apply_override(request).await.unwrap();
        assert_eq!(request.method(), Method::PATCH);

        let body = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"_method=patch&content=new");
    }

    #[tokio::test]
    async fn test_apply_override_header_wins_over_query() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/posts/abc?_method=PATCH")
            .header(METHOD_OVERRIDE_HEADER, "DELETE")
            .body(Body::empty())
            .unwrap();

        let request = apply_override(request).await.unwrap();
        assert_eq!(request.method(), Method::DELETE);
    }
}
