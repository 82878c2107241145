use colored::*;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::DorkResult;
use crate::export;
use crate::profile::Profile;
use crate::session::Session;

use super::args::Args;
use super::display;
use super::interactive::InteractiveShell;

/// The main application struct
pub struct App {
    settings: Settings,
    session: Session,
}

impl App {
    /// Create an application seeded from settings
    pub fn new(settings: Settings) -> DorkResult<Self> {
        let session = Session::from_settings(&settings)?;
        if session.options.disable_colors {
            display::disable_colors();
        }

        Ok(Self { settings, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply command line flags on top of the settings defaults.
    ///
    /// Order matters: a profile may overwrite `--engine`, and `--category`
    /// narrows whatever the profile selected.
    pub fn apply_flags(&mut self, args: &Args) -> DorkResult<()> {
        if !args.target.is_empty() {
            self.session.targets = args.target.clone();
        }
        if !args.exclude.is_empty() {
            self.session.exclusions = args.exclude.clone();
        }
        if let Some(engine) = args.engine {
            self.session.engine = engine;
        }
        if let Some(name) = &args.profile {
            let profile: Profile = name.parse()?;
            self.session.apply_profile(profile);
        }
        if !args.category.is_empty() && !self.session.select_categories(&args.category) {
            debug!("--category matched nothing, keeping {} categories", self.session.categories.len());
        }
        if args.no_banner {
            self.session.options.no_banner = true;
        }
        if args.silent {
            self.session.silent = true;
        }
        if args.no_color {
            self.session.options.disable_colors = true;
            display::disable_colors();
        }
        if args.encode_urls {
            self.session.encode_urls = true;
        }
        if let Some(path) = &args.export {
            self.session.export_path = Some(path.clone());
        }

        Ok(())
    }

    /// Run in flag mode or the interactive menu, depending on the flags
    pub async fn run(&mut self, args: &Args) -> DorkResult<()> {
        self.apply_flags(args)?;

        if args.is_flag_mode() {
            self.run_from_flags().await
        } else {
            info!("Starting interactive menu");
            let mut shell = InteractiveShell::new(self.session.clone(), self.settings.clone());
            shell.run().await
        }
    }

    async fn run_from_flags(&mut self) -> DorkResult<()> {
        let dorks = self.session.generate()?;

        if self.session.silent {
            display::print_silent(&dorks);
        } else {
            display::display_results(&dorks, &self.session, self.settings.display.max_dorks_per_category);
        }

        if let Some(path) = &self.session.export_path {
            match export::export_dorks(&dorks, &self.session, path).await {
                Ok(_) if !self.session.silent => {
                    println!("{}", format!("Dorks exported to {}", path.display()).green());
                }
                Ok(_) => {}
                Err(e) => eprintln!("{}", format!("Error exporting: {}", e).red()),
            }
        }

        Ok(())
    }
}
