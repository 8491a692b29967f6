use serde::{Deserialize, Serialize};

use crate::say::error::SayError;

const ENV_EXTENSION: &str = "SAY_NB_EXTENSION";
const ENV_SOUND_PREFIX: &str = "SAY_NB_SOUND_PREFIX";
const ENV_TIMEZONE: &str = "SAY_NB_TIMEZONE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SayConfig {
    /// Locale identifier the engine registers under.
    pub locale: String,
    /// Audio file extension appended to every resolved segment.
    pub extension: Option<String>,
    /// Directory prepended to every resolved segment.
    pub sound_prefix: Option<String>,
    /// Zone used when neither the request nor the caller names one.
    pub default_timezone: Option<String>,
}

impl Default for SayConfig {
    fn default() -> Self {
        Self {
            locale: "nb".into(),
            extension: None,
            sound_prefix: None,
            default_timezone: None,
        }
    }
}

impl SayConfig {
    pub fn from_env() -> Self {
        Self {
            extension: non_empty_var(ENV_EXTENSION),
            sound_prefix: non_empty_var(ENV_SOUND_PREFIX),
            default_timezone: non_empty_var(ENV_TIMEZONE),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SayError> {
        serde_json::from_str(raw).map_err(|err| SayError::Config(err.to_string()))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SayConfig::from_json(r#"{"extension":"wav"}"#).unwrap();
        assert_eq!(config.locale, "nb");
        assert_eq!(config.extension.as_deref(), Some("wav"));
        assert_eq!(config.default_timezone, None);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            SayConfig::from_json("{"),
            Err(SayError::Config(_))
        ));
    }
}
