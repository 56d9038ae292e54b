//! Redaction wrapper for OAuth secrets and access tokens
//!
//! Client secrets and bearer tokens pass through configuration and the
//! backend boundary; wrapping them in `Sensitive<T>` keeps them out of
//! `Debug` output, `Display` output, and therefore out of every log line.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use ga4q_core_types::Sensitive;
///
/// let secret = Sensitive::new("GOCSPX-abc123");
/// assert_eq!(format!("{:?}", secret), "***REDACTED***");
/// assert_eq!(secret.expose(), &"GOCSPX-abc123");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value. Only the backend client should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Sensitive<String> {
    /// True when the wrapped string is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_secret_is_redacted() {
        let secret = Sensitive::new("GOCSPX-very-secret".to_string());
        let debug_str = format!("{:?}", secret);
        let display_str = format!("{}", secret);
        assert_eq!(debug_str, REDACTED);
        assert_eq!(display_str, REDACTED);
        assert!(!debug_str.contains("GOCSPX"));
    }

    #[test]
    fn test_expose_and_into_inner() {
        let token = Sensitive::new(String::from("ya29.token"));
        assert_eq!(token.expose(), "ya29.token");
        assert_eq!(token.into_inner(), "ya29.token");
    }

    #[test]
    fn test_is_blank() {
        assert!(Sensitive::new("   ".to_string()).is_blank());
        assert!(!Sensitive::new("id".to_string()).is_blank());
    }

    #[test]
    fn test_redacted_inside_settings_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct OAuthClient {
            client_id: String,
            client_secret: Sensitive<String>,
        }

        let client = OAuthClient {
            client_id: "1234.apps.googleusercontent.com".to_string(),
            client_secret: Sensitive::from("hunter2".to_string()),
        };

        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("1234.apps.googleusercontent.com"));
        assert!(debug_str.contains(REDACTED));
        assert!(!debug_str.contains("hunter2"));
    }
}
