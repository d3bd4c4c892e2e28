use crate::error::{Error, Result};

/// OAuth client credentials for the client-credentials grant.
///
/// Validated at construction so malformed values never reach the token
/// endpoint: the client ID is numeric, the secret is exactly 40
/// alphanumeric characters.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.is_empty() || !client_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidClientId(client_id));
        }
        if client_secret.len() != 40
            || !client_secret.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(Error::InvalidClientSecret);
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Read credentials from `OSU_API_CLIENT_ID` / `OSU_API_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("OSU_API_CLIENT_ID")
            .map_err(|_| Error::MissingCredentials("OSU_API_CLIENT_ID"))?;
        let client_secret = std::env::var("OSU_API_CLIENT_SECRET")
            .map_err(|_| Error::MissingCredentials("OSU_API_CLIENT_SECRET"))?;
        Self::new(client_id, client_secret)
    }

    /// Placeholder credentials for token caches that never perform an
    /// exchange.
    pub(crate) fn dummy() -> Self {
        Self {
            client_id: "12345".to_string(),
            client_secret: "0123456789012345678901234567890123456789".to_string(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "a1b2c3d4e5f6g7h8i9j0a1b2c3d4e5f6g7h8i9j0";

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::new("12345", SECRET).unwrap();
        assert_eq!(creds.client_id(), "12345");
        assert_eq!(creds.client_secret(), SECRET);
    }

    #[test]
    fn test_invalid_client_id() {
        assert!(matches!(
            Credentials::new("12a45", SECRET),
            Err(Error::InvalidClientId(_))
        ));
        assert!(matches!(
            Credentials::new("", SECRET),
            Err(Error::InvalidClientId(_))
        ));
    }

    #[test]
    fn test_invalid_client_secret() {
        // too short
        assert!(matches!(
            Credentials::new("12345", "abc123"),
            Err(Error::InvalidClientSecret)
        ));
        // right length, bad character
        let bad = format!("{}!", &SECRET[..39]);
        assert!(matches!(
            Credentials::new("12345", bad),
            Err(Error::InvalidClientSecret)
        ));
    }

    #[test]
    fn test_dummy_credentials_pass_validation() {
        let dummy = Credentials::dummy();
        assert!(Credentials::new(dummy.client_id(), dummy.client_secret()).is_ok());
    }
}
