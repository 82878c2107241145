// src/export/text.rs
use std::fmt::Write;
use async_trait::async_trait;

use crate::dork::GeneratedDorks;
use crate::error::{DorkError, DorkResult};
use crate::export::{ExportFormat, Exporter};
use crate::session::Session;

/// Plain text export: commented header, `## Category` sections, commented URLs
pub struct TextExporter;

#[async_trait]
impl Exporter for TextExporter {
    fn render(&self, dorks: &GeneratedDorks, session: &Session) -> DorkResult<String> {
        render_text(dorks, session)
            .map_err(|e| DorkError::SerializationError(format!("Failed to render text export: {}", e)))
    }

    fn supported_format(&self) -> ExportFormat {
        ExportFormat::Text
    }
}

fn render_text(dorks: &GeneratedDorks, session: &Session) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Dork Factory Export")?;
    writeln!(out, "# Targets: {}", session.targets.join(", "))?;
    writeln!(out, "# Engine: {}", session.engine)?;
    writeln!(out, "# Profile: {}", session.profile_name())?;
    writeln!(out, "#")?;
    writeln!(out)?;

    let engines = session.engine.engines();

    for (category, list) in dorks.iter() {
        writeln!(out, "## {}", category)?;
        for dork in list {
            writeln!(out, "{}", dork)?;
            for engine in &engines {
                writeln!(out, "# {}: {}", engine, session.url_for(dork, *engine))?;
            }
        }
        writeln!(out)?;
    }

    Ok(out)
}
