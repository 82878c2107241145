// src/dork/generator.rs - Template substitution and option transforms
use std::collections::{BTreeMap, BTreeSet};
use serde::{Serialize, Deserialize};
use tracing::debug;

use super::Category;
use super::templates::TARGET_PLACEHOLDER;

/// Terms appended by noise reduction
pub const NOISE_TERMS: [&str; 4] = ["-forum", "-blog", "-news", "-articles"];

const SITE_PATTERN: &str = "site:{target}";

/// Boolean switches that shape generation and presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DorkOptions {
    pub exclude_subdomains: bool,
    pub strict_queries: bool,
    pub reduce_noise: bool,
    pub disable_colors: bool,
    pub no_banner: bool,
}

impl DorkOptions {
    /// Menu labels, in toggle order
    pub const LABELS: [&'static str; 5] = [
        "Exclude subdomains",
        "Strict queries (more precise)",
        "Reduce noise (filter common results)",
        "Disable colors",
        "No banner",
    ];

    pub fn as_flags(&self) -> [bool; 5] {
        [
            self.exclude_subdomains,
            self.strict_queries,
            self.reduce_noise,
            self.disable_colors,
            self.no_banner,
        ]
    }

    /// Rebuild from the toggle indices picked in the menu
    pub fn from_selected(selected: &[usize]) -> Self {
        Self {
            exclude_subdomains: selected.contains(&0),
            strict_queries: selected.contains(&1),
            reduce_noise: selected.contains(&2),
            disable_colors: selected.contains(&3),
            no_banner: selected.contains(&4),
        }
    }

    /// Apply substitution and option transforms to one template
    pub fn render(&self, template: &str, target: &str) -> String {
        let mut dork = if self.exclude_subdomains {
            template.replace(SITE_PATTERN, &format!("site:{target} -site:*.{target}"))
        } else {
            template.replace(TARGET_PLACEHOLDER, target)
        };

        if self.strict_queries {
            dork = format!("\"{}\"", dork);
        }

        if self.reduce_noise {
            dork.push(' ');
            dork.push_str(&NOISE_TERMS.join(" "));
        }

        dork
    }
}

/// Generated dorks grouped by category, in category order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedDorks {
    by_category: BTreeMap<Category, Vec<String>>,
}

impl GeneratedDorks {
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Number of categories with at least one dork
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    pub fn total(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.by_category.get(&category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.by_category.iter().map(|(c, d)| (*c, d.as_slice()))
    }

    /// Every dork, category by category
    pub fn all_dorks(&self) -> impl Iterator<Item = &str> {
        self.by_category.values().flatten().map(String::as_str)
    }
}

/// Generate dorks for each selected category.
///
/// Targets containing any exclusion substring are skipped. Categories that end
/// up with no dorks are left out of the result.
pub fn generate(
    targets: &[String],
    exclusions: &[String],
    categories: &BTreeSet<Category>,
    options: &DorkOptions,
) -> GeneratedDorks {
    let mut by_category = BTreeMap::new();

    for category in categories {
        let mut dorks = Vec::new();

        for template in category.templates() {
            for target in targets {
                if exclusions.iter().any(|excl| target.contains(excl.as_str())) {
                    continue;
                }

                dorks.push(options.render(template, target));
            }
        }

        debug!("Generated {} dorks for {}", dorks.len(), category);

        if !dorks.is_empty() {
            by_category.insert(*category, dorks);
        }
    }

    GeneratedDorks { by_category }
}
