use crate::error::{Result, StorageError};

/// Endpoints and credential for one remote storage account
///
/// An explicit value passed into [`DropboxClient::new`](crate::DropboxClient::new);
/// there is no process-wide configuration. Tests point `list_url` and
/// `upload_url` at a local mock server.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Listing endpoint (HTTP POST, JSON body)
    pub list_url: String,
    /// Upload endpoint (HTTP POST, octet-stream body)
    pub upload_url: String,
    /// Long-lived bearer token; provisioning and refresh are out of scope
    pub access_token: String,
}

impl StorageConfig {
    /// Create a config, rejecting empty URLs or an empty token
    pub fn new(
        list_url: impl Into<String>,
        upload_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            list_url: list_url.into(),
            upload_url: upload_url.into(),
            access_token: access_token.into(),
        };

        if config.list_url.is_empty() || config.upload_url.is_empty() {
            return Err(StorageError::InvalidConfig {
                message: "list and upload URLs must be non-empty".to_string(),
            });
        }
        if config.access_token.is_empty() {
            return Err(StorageError::InvalidConfig {
                message: "access token must be non-empty".to_string(),
            });
        }

        Ok(config)
    }

    /// Config for the real Dropbox endpoints
    pub fn dropbox(access_token: impl Into<String>) -> Result<Self> {
        Self::new(
            "https://api.dropboxapi.com/2/files/list_folder",
            "https://content.dropboxapi.com/2/files/upload",
            access_token,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_config() {
        let config = StorageConfig::new("http://l", "http://u", "token").unwrap();
        assert_eq!(config.list_url, "http://l");
        assert_eq!(config.upload_url, "http://u");
        assert_eq!(config.access_token, "token");
    }

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(
            StorageConfig::new("http://l", "http://u", ""),
            Err(StorageError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_empty_url() {
        assert!(matches!(
            StorageConfig::new("", "http://u", "token"),
            Err(StorageError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn dropbox_defaults_point_at_the_service() {
        let config = StorageConfig::dropbox("token").unwrap();
        assert!(config.list_url.contains("list_folder"));
        assert!(config.upload_url.contains("upload"));
    }
}
