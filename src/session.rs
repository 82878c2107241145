// src/session.rs - Mutable per-run state shared by flag mode and the menu
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Settings;
use crate::dork::{self, Category, DorkOptions, EngineSelection, GeneratedDorks};
use crate::error::{DorkError, DorkResult};
use crate::profile::Profile;

/// Everything a generation run needs, built up by flags or the menu
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub targets: Vec<String>,
    pub exclusions: Vec<String>,
    pub engine: EngineSelection,
    pub categories: BTreeSet<Category>,
    pub profile: Option<Profile>,
    pub options: DorkOptions,
    pub silent: bool,
    pub export_path: Option<PathBuf>,
    pub encode_urls: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session seeded with the defaults from settings
    pub fn from_settings(settings: &Settings) -> DorkResult<Self> {
        let defaults = &settings.defaults;

        Ok(Self {
            engine: defaults.engine.parse()
                .map_err(|e| DorkError::ConfigError(format!("defaults.engine: {}", e)))?,
            options: DorkOptions {
                exclude_subdomains: defaults.exclude_subdomains,
                strict_queries: defaults.strict_queries,
                reduce_noise: defaults.reduce_noise,
                disable_colors: defaults.no_color,
                no_banner: defaults.no_banner,
            },
            encode_urls: settings.urls.encode,
            ..Self::default()
        })
    }

    /// Overwrite categories, engine and the two query flags from a preset.
    ///
    /// Subdomain exclusion, colors and banner are left alone.
    pub fn apply_profile(&mut self, profile: Profile) {
        let preset = profile.preset();

        self.categories = preset.categories.iter().copied().collect();
        self.engine = EngineSelection::from_engines(preset.engines);
        self.options.strict_queries = preset.strict_queries;
        self.options.reduce_noise = preset.reduce_noise;
        self.profile = Some(profile);

        info!("Applied profile {} ({} categories, engine {})", profile, self.categories.len(), self.engine);
    }

    /// Replace the category set with every category matching any query.
    ///
    /// Returns false and keeps the current set when nothing matches.
    pub fn select_categories<S: AsRef<str>>(&mut self, queries: &[S]) -> bool {
        let matched: BTreeSet<Category> = queries.iter()
            .flat_map(|q| Category::fuzzy_match(q.as_ref()))
            .collect();

        if matched.is_empty() {
            debug!("No category matched {} queries", queries.len());
            return false;
        }

        self.categories = matched;
        true
    }

    /// Check that there is something to generate for
    pub fn validate(&self) -> DorkResult<()> {
        if self.targets.is_empty() {
            return Err(DorkError::MissingTargets);
        }
        if self.categories.is_empty() {
            return Err(DorkError::MissingCategories);
        }
        Ok(())
    }

    /// Validate, then generate dorks for the current state
    pub fn generate(&self) -> DorkResult<GeneratedDorks> {
        self.validate()?;

        let dorks = dork::generate(&self.targets, &self.exclusions, &self.categories, &self.options);
        info!("Generated {} dorks across {} categories", dorks.total(), dorks.category_count());

        Ok(dorks)
    }

    /// URL for a dork, honoring the encoding preference
    pub fn url_for(&self, dork: &str, engine: dork::SearchEngine) -> String {
        if self.encode_urls {
            dork::format_url_encoded(dork, engine)
        } else {
            dork::format_url(dork, engine)
        }
    }

    /// Profile key, or "Custom" when none is active
    pub fn profile_name(&self) -> &'static str {
        self.profile.map(|p| p.key()).unwrap_or("Custom")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_ctf_profile() {
        let mut session = Session::new();
        session.engine = EngineSelection::Both;
        session.options.reduce_noise = true;
        session.options.exclude_subdomains = true;
        session.options.no_banner = true;

        session.apply_profile(Profile::Ctf);

        let expected: BTreeSet<Category> = [
            Category::PanelsAuth,
            Category::SensitiveFiles,
            Category::Backups,
            Category::ConfigFiles,
            Category::Directories,
        ].into_iter().collect();

        assert_eq!(session.categories, expected);
        assert_eq!(session.engine, EngineSelection::Google);
        assert!(session.options.strict_queries);
        assert!(!session.options.reduce_noise);
        assert!(session.options.exclude_subdomains);
        assert!(session.options.no_banner);
        assert_eq!(session.profile, Some(Profile::Ctf));
    }

    #[test]
    fn test_two_engine_profile_selects_both() {
        let mut session = Session::new();
        session.apply_profile(Profile::Bugbounty);
        assert_eq!(session.engine, EngineSelection::Both);

        session.apply_profile(Profile::WebappBasic);
        assert_eq!(session.engine, EngineSelection::Google);
        assert_eq!(session.categories.len(), 3);
    }

    #[test]
    fn test_profile_overwrites_categories() {
        let mut session = Session::new();
        session.categories.insert(Category::Database);
        session.apply_profile(Profile::OsintCompany);
        assert!(!session.categories.contains(&Category::Database));
    }

    #[test]
    fn test_select_categories() {
        let mut session = Session::new();
        session.apply_profile(Profile::Ctf);

        assert!(!session.select_categories(&["zzz"]));
        assert_eq!(session.categories.len(), 5);

        assert!(session.select_categories(&["db", "errors"]));
        assert_eq!(
            session.categories.iter().copied().collect::<Vec<_>>(),
            vec![Category::ErrorsDebug]
        );
    }

    #[test]
    fn test_validate() {
        let mut session = Session::new();
        assert!(matches!(session.validate(), Err(DorkError::MissingTargets)));

        session.targets.push("example.com".to_string());
        assert!(matches!(session.generate(), Err(DorkError::MissingCategories)));

        session.categories.insert(Category::PanelsAuth);
        assert_eq!(session.generate().unwrap().total(), 5);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.defaults.engine = "yandex".to_string();
        settings.defaults.reduce_noise = true;
        settings.urls.encode = true;

        let session = Session::from_settings(&settings).unwrap();
        assert_eq!(session.engine, EngineSelection::Yandex);
        assert!(session.options.reduce_noise);
        assert!(session.encode_urls);
        assert!(session.targets.is_empty());

        settings.defaults.engine = "altavista".to_string();
        assert!(Session::from_settings(&settings).is_err());
    }

    #[test]
    fn test_profile_name() {
        let mut session = Session::new();
        assert_eq!(session.profile_name(), "Custom");
        session.apply_profile(Profile::FullScope);
        assert_eq!(session.profile_name(), "full-scope");
    }
}
