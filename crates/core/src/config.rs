//! Configuration management for the Ask Our Docs bot.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Environment variables
//! - Command-line flags
//! - Config file (askdocs.yaml)
//!
//! Only the thin I/O surface is configurable here (corpus directory, model
//! provider, endpoints). Chunk window, overlap and retrieval depth are fixed
//! constants owned by the engine crate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// This struct holds all global options that affect CLI behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory containing the documentation corpus (.md files)
    pub docs_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Model provider (currently "ollama")
    pub provider: String,

    /// Generative model identifier
    pub model: String,

    /// Embedding model identifier
    pub embedding_model: String,

    /// Provider endpoint URL
    pub endpoint: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure (askdocs.yaml).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmSection>,
    documents: Option<DocumentsSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmSection {
    provider: Option<String>,
    model: Option<String>,
    #[serde(rename = "embeddingModel")]
    embedding_model: Option<String>,
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentsSection {
    dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("documents"),
            config_file: None,
            provider: "ollama".to_string(), // Local-first default
            model: "llama3.1".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `ASKDOCS_DOCS_DIR`: Corpus directory
    /// - `ASKDOCS_CONFIG`: Path to config file
    /// - `ASKDOCS_PROVIDER`: Model provider
    /// - `ASKDOCS_MODEL`: Generative model identifier
    /// - `ASKDOCS_EMBEDDING_MODEL`: Embedding model identifier
    /// - `ASKDOCS_ENDPOINT`: Provider endpoint URL
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(docs_dir) = std::env::var("ASKDOCS_DOCS_DIR") {
            config.docs_dir = PathBuf::from(docs_dir);
        }

        if let Ok(config_file) = std::env::var("ASKDOCS_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("askdocs.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("ASKDOCS_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("ASKDOCS_MODEL") {
            config.model = model;
        }

        if let Ok(embedding_model) = std::env::var("ASKDOCS_EMBEDDING_MODEL") {
            config.embedding_model = embedding_model;
        }

        if let Ok(endpoint) = std::env::var("ASKDOCS_ENDPOINT") {
            config.endpoint = endpoint;
        }

        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(docs) = config_file.documents {
            if let Some(dir) = docs.dir {
                result.docs_dir = PathBuf::from(dir);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                result.provider = provider;
            }
            if let Some(model) = llm.model {
                result.model = model;
            }
            if let Some(embedding_model) = llm.embedding_model {
                result.embedding_model = embedding_model;
            }
            if let Some(endpoint) = llm.endpoint {
                result.endpoint = endpoint;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the
    /// config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        docs_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(docs_dir) = docs_dir {
            self.docs_dir = docs_dir;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["ollama"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if !self.docs_dir.exists() {
            return Err(AppError::Config(format!(
                "Documents directory does not exist: {:?}",
                self.docs_dir
            )));
        }

        Ok(())
    }
}
