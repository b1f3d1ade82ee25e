//! Target URL validation.
//!
//! A redirect target must be a well-formed absolute HTTP(S) URL. Validation
//! happens once at creation time; the stored value is the parsed URL's
//! canonical serialization.

use url::Url;

/// Errors that can occur while validating a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a redirect target and returns its canonical form.
///
/// Rejects relative URLs, malformed input, and non-HTTP(S) schemes such as
/// `javascript:`, `data:`, or `file:` which would turn the redirect into an
/// attack vector.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<String, TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(TargetUrlError::InvalidFormat("missing host".to_string()));
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        let result = validate_target_url("https://example.com/a");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://example.com/a");
    }

    #[test]
    fn test_valid_http_url() {
        assert!(validate_target_url("http://example.com").is_ok());
    }

    #[test]
    fn test_preserves_query_and_path() {
        let result = validate_target_url("https://example.com/search?q=rust&lang=en").unwrap();
        assert_eq!(result, "https://example.com/search?q=rust&lang=en");
    }

    #[test]
    fn test_not_a_url() {
        let result = validate_target_url("not a url");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_relative_url() {
        let result = validate_target_url("/just/a/path");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_missing_scheme() {
        let result = validate_target_url("example.com/page");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_empty_string() {
        assert!(validate_target_url("").is_err());
    }

    #[test]
    fn test_javascript_scheme_rejected() {
        let result = validate_target_url("javascript:alert('xss')");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_data_scheme_rejected() {
        let result = validate_target_url("data:text/plain,Hello");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_file_scheme_rejected() {
        let result = validate_target_url("file:///etc/passwd");
        assert!(matches!(
            result.unwrap_err(),
            TargetUrlError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_localhost_with_port() {
        let result = validate_target_url("http://localhost:3000/test");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "http://localhost:3000/test");
    }
}
