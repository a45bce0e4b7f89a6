use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use crate::core::twitch_status::{ConfigError, TwitchStatusConfig};

/// Plugin options stored as a JSON object, e.g.
/// `{ "responseFormat": "%display_name% is live: %status%" }`.
pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// A missing file means "use the defaults".
    pub async fn load(&self) -> Result<TwitchStatusConfig, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No Twitch status config, using defaults");
            return Ok(TwitchStatusConfig::default());
        }

        let text = fs::read_to_string(&self.path).await?;
        let value: Value = serde_json::from_str(&text)?;
        TwitchStatusConfig::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::twitch_status::response_format::DEFAULT_RESPONSE_FORMAT;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_owned();
        drop(tmp);

        let config = JsonConfigFile::new(&path).load().await.unwrap();
        assert_eq!(config.response_format.as_str(), DEFAULT_RESPONSE_FORMAT);
    }

    #[tokio::test]
    async fn test_reads_response_format() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), r#"{"responseFormat": "%name%: %game%"}"#).unwrap();

        let config = JsonConfigFile::new(tmp.path()).load().await.unwrap();
        assert_eq!(config.response_format.as_str(), "%name%: %game%");
    }

    #[tokio::test]
    async fn test_non_string_format_fails_at_load() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), r#"{"responseFormat": 1}"#).unwrap();

        let err = JsonConfigFile::new(tmp.path()).load().await.unwrap_err();
        assert_eq!(err.code(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_fails_at_load() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "responseFormat = 'x'").unwrap();

        let err = JsonConfigFile::new(tmp.path()).load().await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
