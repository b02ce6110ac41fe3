use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::validate_adapter_config;

/// How the external build tool reacts when pre-rendering hits a problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Warn,
    Fail,
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrerenderPolicy {
    pub handle_missing_id: FailurePolicy,
    pub handle_http_error: FailurePolicy,
}

/// Declarative descriptor consumed by the external static-site build tool.
/// Fully specified at authoring time; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdapterConfig {
    pub pages_dir: String,
    pub assets_dir: String,
    pub fallback_document: String,
    pub precompress: bool,
    pub strict: bool,
    pub prerender_policy: PrerenderPolicy,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            pages_dir: "build".to_string(),
            assets_dir: "build".to_string(),
            fallback_document: "index.html".to_string(),
            precompress: false,
            strict: true,
            prerender_policy: PrerenderPolicy::default(),
        }
    }
}

impl AdapterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_adapter_config(self)?;
        Ok(())
    }
}
