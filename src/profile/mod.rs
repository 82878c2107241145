// src/profile/mod.rs - Preset category/engine/option bundles
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::dork::{Category, SearchEngine};
use crate::error::DorkError;

/// Named preset selectable by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Bugbounty,
    OsintCompany,
    Ctf,
    WebappBasic,
    FullScope,
}

/// What applying a profile sets on the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePreset {
    pub engines: &'static [SearchEngine],
    pub categories: &'static [Category],
    pub strict_queries: bool,
    pub reduce_noise: bool,
}

const GOOGLE_ONLY: &[SearchEngine] = &[SearchEngine::Google];
const GOOGLE_AND_YANDEX: &[SearchEngine] = &[SearchEngine::Google, SearchEngine::Yandex];

impl Profile {
    /// Menu order
    pub const ALL: [Profile; 5] = [
        Profile::Bugbounty,
        Profile::OsintCompany,
        Profile::Ctf,
        Profile::WebappBasic,
        Profile::FullScope,
    ];

    /// Command line key
    pub fn key(&self) -> &'static str {
        match self {
            Profile::Bugbounty => "bugbounty",
            Profile::OsintCompany => "osint-company",
            Profile::Ctf => "ctf",
            Profile::WebappBasic => "webapp-basic",
            Profile::FullScope => "full-scope",
        }
    }

    /// Label shown in the profile menu
    pub fn label(&self) -> &'static str {
        match self {
            Profile::Bugbounty => "Bug Bounty (comprehensive)",
            Profile::OsintCompany => "OSINT Company (focused)",
            Profile::Ctf => "CTF (challenge-oriented)",
            Profile::WebappBasic => "Web App Basic (lightweight)",
            Profile::FullScope => "Full Scope (all categories)",
        }
    }

    pub fn preset(&self) -> ProfilePreset {
        match self {
            Profile::Bugbounty => ProfilePreset {
                engines: GOOGLE_AND_YANDEX,
                categories: &[
                    Category::PanelsAuth,
                    Category::SensitiveFiles,
                    Category::ApisEndpoints,
                    Category::Vulnerabilities,
                    Category::ConfigFiles,
                ],
                strict_queries: true,
                reduce_noise: true,
            },
            Profile::OsintCompany => ProfilePreset {
                engines: GOOGLE_ONLY,
                categories: &[
                    Category::Osint,
                    Category::SensitiveFiles,
                    Category::ApisEndpoints,
                ],
                strict_queries: false,
                reduce_noise: false,
            },
            Profile::Ctf => ProfilePreset {
                engines: GOOGLE_ONLY,
                categories: &[
                    Category::PanelsAuth,
                    Category::SensitiveFiles,
                    Category::Backups,
                    Category::ConfigFiles,
                    Category::Directories,
                ],
                strict_queries: true,
                reduce_noise: false,
            },
            Profile::WebappBasic => ProfilePreset {
                engines: GOOGLE_ONLY,
                categories: &[
                    Category::PanelsAuth,
                    Category::SensitiveFiles,
                    Category::ErrorsDebug,
                ],
                strict_queries: false,
                reduce_noise: false,
            },
            Profile::FullScope => ProfilePreset {
                engines: GOOGLE_AND_YANDEX,
                categories: &Category::ALL,
                strict_queries: false,
                reduce_noise: false,
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Profile {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| DorkError::InvalidProfile(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        for profile in Profile::ALL {
            assert_eq!(profile.key().parse::<Profile>().unwrap(), profile);
        }
        assert!(matches!("CTF".parse::<Profile>(), Err(DorkError::InvalidProfile(_))));
        assert!("recon".parse::<Profile>().is_err());
    }

    #[test]
    fn test_full_scope_covers_everything() {
        let preset = Profile::FullScope.preset();
        assert_eq!(preset.categories.len(), Category::ALL.len());
        assert_eq!(preset.engines.len(), 2);
    }

    #[test]
    fn test_bugbounty_flags() {
        let preset = Profile::Bugbounty.preset();
        assert!(preset.strict_queries);
        assert!(preset.reduce_noise);
        assert_eq!(preset.categories.len(), 5);
    }
}
