// src/export/json.rs
use std::collections::BTreeMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dork::{EngineSelection, GeneratedDorks};
use crate::error::DorkResult;
use crate::export::{ExportFormat, Exporter};
use crate::session::Session;

/// JSON export generator
pub struct JsonExporter;

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    generated_at: DateTime<Utc>,
    targets: &'a [String],
    exclusions: &'a [String],
    engine: EngineSelection,
    profile: Option<&'static str>,
    categories: Vec<JsonCategory>,
}

#[derive(Debug, Serialize)]
struct JsonCategory {
    name: &'static str,
    dorks: Vec<JsonDork>,
}

#[derive(Debug, Serialize)]
struct JsonDork {
    query: String,
    urls: BTreeMap<&'static str, String>,
}

#[async_trait]
impl Exporter for JsonExporter {
    fn render(&self, dorks: &GeneratedDorks, session: &Session) -> DorkResult<String> {
        let engines = session.engine.engines();

        let categories = dorks.iter()
            .map(|(category, list)| JsonCategory {
                name: category.display_name(),
                dorks: list.iter()
                    .map(|dork| JsonDork {
                        query: dork.clone(),
                        urls: engines.iter()
                            .map(|engine| (engine.key(), session.url_for(dork, *engine)))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let export = JsonExport {
            generated_at: Utc::now(),
            targets: &session.targets,
            exclusions: &session.exclusions,
            engine: session.engine,
            profile: session.profile.map(|p| p.key()),
            categories,
        };

        Ok(serde_json::to_string_pretty(&export)?)
    }

    fn supported_format(&self) -> ExportFormat {
        ExportFormat::JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dork::Category;
    use crate::profile::Profile;

    #[test]
    fn test_json_structure() {
        let mut session = Session::new();
        session.targets = vec!["example.com".to_string()];
        session.apply_profile(Profile::FullScope);
        session.categories = [Category::Backups].into_iter().collect();

        let dorks = session.generate().unwrap();
        let rendered = JsonExporter.render(&dorks, &session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["engine"], "both");
        assert_eq!(value["profile"], "full-scope");
        assert_eq!(value["targets"][0], "example.com");
        assert!(value["generated_at"].is_string());

        let category = &value["categories"][0];
        assert_eq!(category["name"], "Backups & Logs");

        let first = &category["dorks"][0];
        assert_eq!(first["query"], "site:example.com ext:bak | ext:old | ext:backup");
        assert_eq!(
            first["urls"]["google"],
            "https://www.google.com/search?q=site:example.com ext:bak | ext:old | ext:backup&hl=en"
        );
        assert!(first["urls"]["yandex"].is_string());
    }

    #[test]
    fn test_custom_profile_is_null() {
        let mut session = Session::new();
        session.targets = vec!["example.com".to_string()];
        session.categories.insert(Category::Osint);

        let dorks = session.generate().unwrap();
        let value: serde_json::Value = serde_json::from_str(&JsonExporter.render(&dorks, &session).unwrap()).unwrap();
        assert!(value["profile"].is_null());
        assert_eq!(value["exclusions"].as_array().unwrap().len(), 0);
    }
}
