use serde::{Serialize, Deserialize};

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub urls: UrlConfig,
}

/// Session defaults applied before command line flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default)]
    pub exclude_subdomains: bool,
    #[serde(default)]
    pub strict_queries: bool,
    #[serde(default)]
    pub reduce_noise: bool,
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub no_banner: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            exclude_subdomains: false,
            strict_queries: false,
            reduce_noise: false,
            no_color: false,
            no_banner: false,
        }
    }
}

/// Result display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    // Dorks shown per category before "... and N more"
    #[serde(default = "default_max_dorks")]
    pub max_dorks_per_category: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_dorks_per_category: default_max_dorks() }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_filename")]
    pub default_filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { default_filename: default_filename() }
    }
}

/// URL formatting settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    #[serde(default)]
    pub encode: bool,
}

// Default values
fn default_engine() -> String { "google".to_string() }
fn default_max_dorks() -> usize { 20 }
fn default_filename() -> String { "dorks.txt".to_string() }
