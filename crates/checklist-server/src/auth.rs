//! HTTP Basic authentication against one configured credential pair

use crate::config::Credentials;
use crate::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

/// Username and password carried by an `Authorization: Basic` header
pub(crate) fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Middleware rejecting requests without the configured credentials
pub async fn require_basic_auth(
    State(credentials): State<Arc<Credentials>>,
    request: Request,
    next: Next,
) -> Response {
    let authorised = basic_credentials(request.headers())
        .is_some_and(|(username, password)| credentials.matches(&username, &password));

    if authorised {
        next.run(request).await
    } else {
        tracing::warn!(method = %request.method(), uri = %request.uri(), "rejected credentials");
        ApiError::Unauthorised.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn decodes_basic_header() {
        let encoded = STANDARD.encode("test:pass");
        assert_eq!(
            basic_credentials(&headers(&format!("Basic {encoded}"))),
            Some(("test".to_string(), "pass".to_string()))
        );
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = STANDARD.encode("test:a:b");
        let (_, password) = basic_credentials(&headers(&format!("basic {encoded}"))).unwrap();
        assert_eq!(password, "a:b");
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert_eq!(basic_credentials(&headers("Bearer abc")), None);
        assert_eq!(basic_credentials(&headers("Basic !!!")), None);
        assert_eq!(basic_credentials(&HeaderMap::new()), None);

        let no_colon = STANDARD.encode("testpass");
        assert_eq!(basic_credentials(&headers(&format!("Basic {no_colon}"))), None);
    }
}
