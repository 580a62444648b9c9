//! Configuration management for the recipe search form
//!
//! Separates the page layout (which elements the validator is bound to) from
//! the search settings (where a passing submission is sent).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Config file looked up relative to the working directory (`config.toml`).
const CONFIG_FILE: &str = "config";

/// Environment prefix, e.g. `RECIPE_SEARCH_SEARCH__API_KEY`.
const ENV_PREFIX: &str = "RECIPE_SEARCH";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub page: PageConfig,
    pub search: SearchConfig,
}

/// Stable element identifiers of the search page
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageConfig {
    /// Form whose submit event is intercepted
    pub form_id: String,

    /// The validated "must-have ingredients" input
    pub field_id: String,

    /// Region that receives the error message
    pub error_display_id: String,
}

/// Where submitted searches go
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Base URL of the site hosting the search page
    pub site_url: String,

    /// Route the search form submits to
    pub results_path: String,

    /// Recipe API base; endpoints are joined onto it, so it ends with '/'
    pub api_base: String,

    /// Recipe API key; left out of the request when empty
    #[serde(default)]
    pub api_key: String,

    /// Number of recipes requested per search
    pub result_count: u32,

    /// Number of random recipes shown on the home page
    pub random_count: u32,

    /// Number of similar recipes shown beside a recipe
    pub similar_count: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: "search_form".to_string(),
            field_id: "need_to_have".to_string(),
            error_display_id: "error_display".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site_url: "http://127.0.0.1:5000".to_string(),
            results_path: "/recipe/search/results".to_string(),
            api_base: "https://api.spoonacular.com/recipes/".to_string(),
            api_key: String::new(),
            result_count: 21,
            random_count: 12,
            similar_count: 3,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml (optional) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from the given config file (optional) with environment overrides
    pub fn load_from(config_file: &str) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let settings = Config::builder()
            .set_default("page.form_id", defaults.page.form_id)?
            .set_default("page.field_id", defaults.page.field_id)?
            .set_default("page.error_display_id", defaults.page.error_display_id)?
            .set_default("search.site_url", defaults.search.site_url)?
            .set_default("search.results_path", defaults.search.results_path)?
            .set_default("search.api_base", defaults.search.api_base)?
            .set_default("search.api_key", defaults.search.api_key)?
            .set_default("search.result_count", i64::from(defaults.search.result_count))?
            .set_default("search.random_count", i64::from(defaults.search.random_count))?
            .set_default("search.similar_count", i64::from(defaults.search.similar_count))?
            .add_source(File::with_name(config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = [
            ("form_id", &self.page.form_id),
            ("field_id", &self.page.field_id),
            ("error_display_id", &self.page.error_display_id),
        ];
        for (name, value) in ids {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{name} cannot be empty")));
            }
        }

        if !self.search.results_path.starts_with('/') {
            return Err(ConfigError::Message(
                "results_path must start with '/'".into(),
            ));
        }

        if !self.search.api_base.ends_with('/') {
            return Err(ConfigError::Message("api_base must end with '/'".into()));
        }

        let counts = [
            ("result_count", self.search.result_count),
            ("random_count", self.search.random_count),
            ("similar_count", self.search.similar_count),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::Message(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        Ok(())
    }
}
