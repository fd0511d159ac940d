//! Request header providers.
use super::Headers;

pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Supplies the headers attached to every management request.
pub trait HeaderProvider {
    fn headers(&self) -> Headers;
}

/// Sends no headers at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuth;

impl HeaderProvider for NoAuth {
    fn headers(&self) -> Headers {
        Headers::new()
    }
}

/// Attaches `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl HeaderProvider for BearerToken {
    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            HEADER_AUTHORIZATION.to_string(),
            format!("Bearer {}", self.0),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::{BearerToken, HeaderProvider, NoAuth, HEADER_AUTHORIZATION};

    #[test]
    fn no_auth_is_empty() {
        assert!(NoAuth.headers().is_empty());
    }

    #[test]
    fn bearer_sets_authorization() {
        let headers = BearerToken("abc123".to_string()).headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(HEADER_AUTHORIZATION).map(String::as_str),
            Some("Bearer abc123")
        );
    }
}
