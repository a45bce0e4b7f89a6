use serde_json::Value;
use thiserror::Error;

use super::response_format::ResponseFormat;

/// Key of the template option in the plugin config.
pub const RESPONSE_FORMAT_KEY: &str = "responseFormat";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("responseFormat must be a string")]
    InvalidResponseFormat,
    #[error("Config must be a JSON object")]
    NotAnObject,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Stable numeric code, kept so operators can match on it in logs.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::InvalidResponseFormat => 1,
            ConfigError::NotAnObject => 2,
            ConfigError::Io(_) => 3,
            ConfigError::Parse(_) => 4,
        }
    }
}

/// Options for the Twitch status plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitchStatusConfig {
    pub response_format: ResponseFormat,
}

impl TwitchStatusConfig {
    /// Validate raw plugin options. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let options = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(options) => options,
            _ => return Err(ConfigError::NotAnObject),
        };

        let response_format = match options.get(RESPONSE_FORMAT_KEY) {
            None | Some(Value::Null) => ResponseFormat::default(),
            Some(Value::String(format)) => ResponseFormat::new(format.clone()),
            Some(_) => return Err(ConfigError::InvalidResponseFormat),
        };

        Ok(Self { response_format })
    }

    /// Apply an override that came from the environment.
    pub fn with_response_format(mut self, format: Option<String>) -> Self {
        if let Some(format) = format {
            self.response_format = ResponseFormat::new(format);
        }
        self
    }
}
