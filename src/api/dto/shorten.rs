//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (must be a non-empty absolute URL).
    #[validate(
        length(min = 1, message = "invalid url"),
        url(message = "Invalid URL format")
    )]
    pub url: String,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
        }
    }

    #[test]
    fn test_valid_absolute_url() {
        assert!(request("https://www.example.com/page").validate().is_ok());
        assert!(request("http://localhost:8080/a?b=c").validate().is_ok());
    }

    #[test]
    fn test_empty_url_is_rejected() {
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(request("not-a-valid-url").validate().is_err());
        assert!(request("/just/a/path").validate().is_err());
    }
}
