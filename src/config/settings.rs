//! Settings structures for Mini Perplexity configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub search: SearchProviderSettings,
    pub summarizer: SummarizerSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary variable lookup.
    ///
    /// Credentials accept the bare name first and the `REACT_APP_` prefixed
    /// name as a fallback, so an existing `.env` from the browser build works
    /// unchanged.
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |name: &str| {
            lookup(name)
                .or_else(|| lookup(&format!("REACT_APP_{}", name)))
                .filter(|v| !v.is_empty())
        };

        if let Some(val) = secret("GOOGLE_API_KEY") {
            self.search.api_key = Some(val);
        }
        if let Some(val) = secret("SEARCH_ENGINE_ID") {
            self.search.search_engine_id = Some(val);
        }
        if let Some(val) = secret("HUGGINGFACE_API_KEY") {
            self.summarizer.api_key = Some(val);
        }

        if let Some(val) = lookup("MINI_PERPLEXITY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("MINI_PERPLEXITY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }

    /// Names of credentials that are still unset
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.search.api_key.is_none() {
            missing.push("GOOGLE_API_KEY");
        }
        if self.search.search_engine_id.is_none() {
            missing.push("SEARCH_ENGINE_ID");
        }
        if self.summarizer.api_key.is_none() {
            missing.push("HUGGINGFACE_API_KEY");
        }
        missing
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Title shown on every page
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            instance_name: "Mini Perplexity System".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds; unset means provider calls may wait forever
    pub request_timeout: Option<f64>,
    /// User agent sent to both providers
    pub useragent: Option<String>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            useragent: None,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchProviderSettings {
    /// Provider kind
    pub provider: String,
    /// REST endpoint
    pub base_url: String,
    /// API key (usually supplied through the environment)
    pub api_key: Option<String>,
    /// Search scope identifier (Google `cx`)
    pub search_engine_id: Option<String>,
}

impl Default for SearchProviderSettings {
    fn default() -> Self {
        Self {
            provider: "google_cse".to_string(),
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key: None,
            search_engine_id: None,
        }
    }
}

/// Summarization provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    /// Provider kind
    pub provider: String,
    /// Inference endpoint prefix; the model id is appended
    pub base_url: String,
    /// Model id
    pub model: String,
    /// Bearer token (usually supplied through the environment)
    pub api_key: Option<String>,
    /// Hard cutoff for the joined snippet text, in characters
    pub max_input_chars: usize,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            provider: "huggingface".to_string(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            api_key: None,
            max_input_chars: 1000,
        }
    }
}
