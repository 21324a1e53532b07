use serde::{Deserialize, Serialize};

use crate::error::Error;

/// OAuth2 access/refresh token bundle plus issuance metadata.
///
/// Field names match the token JSON the Google token endpoint returns, so a
/// credential round-trips through `serde_json` unchanged. The facade never
/// persists credentials; callers serialize and store them wherever they
/// want and hand them back via `set_credential`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) at which the token was issued.
    pub created: i64,
    /// Token lifetime in seconds from `created`.
    pub expires_in: i64,
}

impl Credential {
    /// Instant (unix seconds) at which the access token stops being valid.
    pub fn expires_at(&self) -> i64 {
        self.created + self.expires_in
    }

    /// The token counts as expired at the boundary instant itself.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at() <= now
    }

    /// Parse a caller-supplied serialized credential.
    ///
    /// Rejects empty input, malformed JSON, and credentials missing a
    /// usable access token, creation timestamp, or lifetime.
    pub fn parse(json: &str) -> Result<Self, Error> {
        if json.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "serialized credential is empty".into(),
            ));
        }

        let credential: Credential = serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("malformed credential json: {e}")))?;
        credential.validate()?;
        Ok(credential)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.access_token.is_empty() {
            return Err(Error::InvalidArgument(
                "credential access_token is empty".into(),
            ));
        }
        if self.created <= 0 {
            return Err(Error::InvalidArgument(
                "credential created timestamp is missing".into(),
            ));
        }
        if self.expires_in <= 0 {
            return Err(Error::InvalidArgument(
                "credential expires_in is missing".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(created: i64, expires_in: i64) -> Credential {
        Credential {
            access_token: "token".into(),
            refresh_token: Some("refresh".into()),
            created,
            expires_in,
        }
    }

    #[test]
    fn test_expiry_arithmetic() {
        let c = credential(1_000, 3_600);
        assert_eq!(c.expires_at(), 4_600);
        assert!(!c.is_expired_at(4_599));
        assert!(c.is_expired_at(4_600)); // boundary instant is expired
        assert!(c.is_expired_at(4_601));
    }

    #[test]
    fn test_parse_valid_json() {
        let c = Credential::parse(
            r#"{"access_token":"a","refresh_token":"r","created":100,"expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(c.access_token, "a");
        assert_eq!(c.refresh_token.as_deref(), Some("r"));
        assert_eq!(c.expires_at(), 3_700);
    }

    #[test]
    fn test_parse_without_refresh_token() {
        let c =
            Credential::parse(r#"{"access_token":"a","created":100,"expires_in":3600}"#).unwrap();
        assert!(c.refresh_token.is_none());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            Credential::parse(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Credential::parse("   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            Credential::parse("{not json"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_required_fields() {
        // No access_token at all
        assert!(matches!(
            Credential::parse(r#"{"created":100,"expires_in":3600}"#),
            Err(Error::InvalidArgument(_))
        ));
        // Empty access_token
        assert!(matches!(
            Credential::parse(r#"{"access_token":"","created":100,"expires_in":3600}"#),
            Err(Error::InvalidArgument(_))
        ));
        // Missing created
        assert!(matches!(
            Credential::parse(r#"{"access_token":"a","expires_in":3600}"#),
            Err(Error::InvalidArgument(_))
        ));
        // Zero expires_in
        assert!(matches!(
            Credential::parse(r#"{"access_token":"a","created":100,"expires_in":0}"#),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serialization_round_trip() {
        let c = credential(100, 200);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(Credential::parse(&json).unwrap(), c);
    }
}
