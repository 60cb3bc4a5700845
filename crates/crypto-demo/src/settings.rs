//! Demo Settings
//!
//! Everything except the API key, read once from the environment.

use agent_core::{ApiKey, DEFAULT_MODEL};
use agent_runtime::OpenAiConfig;

/// Runtime settings for one demo run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoSettings {
    /// Chat model (`OPENAI_MODEL`)
    pub model: String,

    /// API base URL override (`OPENAI_BASE_URL`)
    pub base_url: Option<String>,

    /// Organization sent with every request (`OPENAI_ORG_ID`)
    pub organization: Option<String>,

    /// HTTP timeout in seconds (`OPENAI_TIMEOUT_SECS`)
    pub timeout_secs: u64,

    /// RNG seed for a reproducible run (`DEMO_SEED`)
    pub seed: Option<u64>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: None,
            organization: None,
            timeout_secs: 120,
            seed: None,
        }
    }
}

impl DemoSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup; unparsable numbers fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let model = non_empty("OPENAI_MODEL").unwrap_or(defaults.model);
        let base_url = non_empty("OPENAI_BASE_URL");
        let organization = non_empty("OPENAI_ORG_ID").map(|v| v.trim().to_string());
        let timeout_secs = non_empty("OPENAI_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.timeout_secs);
        let seed = non_empty("DEMO_SEED").and_then(|v| match v.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %v, "Ignoring DEMO_SEED that is not a u64");
                None
            }
        });

        Self { model, base_url, organization, timeout_secs, seed }
    }

    /// OpenAI client configuration for a validated key
    pub fn openai_config(&self, key: ApiKey) -> OpenAiConfig {
        let mut config = OpenAiConfig::new(key).with_timeout(self.timeout_secs);
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(org) = &self.organization {
            config = config.with_organization(org);
        }
        config
    }
}
