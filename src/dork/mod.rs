// src/dork/mod.rs - Dork categories, search engines and the generation engine
mod generator;
mod templates;
mod links;

use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::error::DorkError;

pub use generator::{generate, DorkOptions, GeneratedDorks, NOISE_TERMS};
pub use templates::templates_for;
pub use links::{format_url, format_url_encoded};

/// Characters dropped from display names before fuzzy matching
static NAME_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ &]").unwrap());

/// Reconnaissance theme owning a fixed list of dork templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    PanelsAuth,
    SensitiveFiles,
    ErrorsDebug,
    ApisEndpoints,
    Osint,
    Vulnerabilities,
    Backups,
    ConfigFiles,
    Directories,
    Database,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Category; 10] = [
        Category::PanelsAuth,
        Category::SensitiveFiles,
        Category::ErrorsDebug,
        Category::ApisEndpoints,
        Category::Osint,
        Category::Vulnerabilities,
        Category::Backups,
        Category::ConfigFiles,
        Category::Directories,
        Category::Database,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::PanelsAuth => "Panels & Auth",
            Category::SensitiveFiles => "Sensitive Files",
            Category::ErrorsDebug => "Errors & Debug",
            Category::ApisEndpoints => "APIs & Endpoints",
            Category::Osint => "OSINT",
            Category::Vulnerabilities => "Vulnerabilities",
            Category::Backups => "Backups & Logs",
            Category::ConfigFiles => "Configuration Files",
            Category::Directories => "Directory Listings",
            Category::Database => "Database Dumps",
        }
    }

    /// Templates for this category
    pub fn templates(&self) -> &'static [&'static str] {
        templates_for(*self)
    }

    /// Categories whose compacted display name contains `query`.
    ///
    /// The display name is lowercased with spaces and `&` removed, so
    /// `panels` matches "Panels & Auth" and `files` matches both
    /// "Sensitive Files" and "Configuration Files". The query itself is only
    /// lowercased.
    pub fn fuzzy_match(query: &str) -> Vec<Category> {
        let needle = query.to_lowercase();

        Self::ALL.iter()
            .copied()
            .filter(|cat| {
                let haystack = NAME_STRIP.replace_all(&cat.display_name().to_lowercase(), "").into_owned();
                haystack.contains(&needle)
            })
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A concrete search engine a dork URL can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    Yandex,
}

impl SearchEngine {
    pub fn key(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Yandex => "yandex",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Yandex => "Yandex",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Engine choice held by the session; `Both` expands to Google and Yandex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineSelection {
    #[default]
    Google,
    Yandex,
    Both,
}

impl EngineSelection {
    /// Menu order
    pub const ALL: [EngineSelection; 3] = [
        EngineSelection::Google,
        EngineSelection::Yandex,
        EngineSelection::Both,
    ];

    /// Concrete engines to format URLs for
    pub fn engines(&self) -> Vec<SearchEngine> {
        match self {
            EngineSelection::Google => vec![SearchEngine::Google],
            EngineSelection::Yandex => vec![SearchEngine::Yandex],
            EngineSelection::Both => vec![SearchEngine::Google, SearchEngine::Yandex],
        }
    }

    /// Selection covering exactly the given engines; empty falls back to Google
    pub fn from_engines(engines: &[SearchEngine]) -> Self {
        match engines {
            [] | [SearchEngine::Google] => EngineSelection::Google,
            [SearchEngine::Yandex] => EngineSelection::Yandex,
            [_, _, ..] => EngineSelection::Both,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EngineSelection::Google => "google",
            EngineSelection::Yandex => "yandex",
            EngineSelection::Both => "both",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EngineSelection::Google => "Google",
            EngineSelection::Yandex => "Yandex",
            EngineSelection::Both => "Both",
        }
    }
}

impl fmt::Display for EngineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EngineSelection {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(EngineSelection::Google),
            "yandex" => Ok(EngineSelection::Yandex),
            "both" => Ok(EngineSelection::Both),
            other => Err(DorkError::InvalidEngine(other.to_string())),
        }
    }
}
