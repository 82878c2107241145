// src/cli/interactive.rs
use std::collections::BTreeSet;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;
use colored::*;
use console::Term;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use tracing::{debug, info};

use crate::config::Settings;
use crate::dork::{Category, DorkOptions, EngineSelection};
use crate::error::{DorkError, DorkResult};
use crate::export;
use crate::profile::Profile;
use crate::session::Session;

use super::display;

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetTarget,
    SelectEngine,
    SelectCategories,
    UseProfile,
    AdvancedOptions,
    Generate,
    ShowConfiguration,
    Help,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1" => Ok(MenuChoice::SetTarget),
            "2" => Ok(MenuChoice::SelectEngine),
            "3" => Ok(MenuChoice::SelectCategories),
            "4" => Ok(MenuChoice::UseProfile),
            "5" => Ok(MenuChoice::AdvancedOptions),
            "6" => Ok(MenuChoice::Generate),
            "7" => Ok(MenuChoice::ShowConfiguration),
            "H" => Ok(MenuChoice::Help),
            "Q" => Ok(MenuChoice::Quit),
            other => Err(DorkError::InvalidSelection(other.to_string())),
        }
    }
}

/// Split a comma-separated exclusion list, dropping empty entries
pub fn parse_exclusions(input: &str) -> Vec<String> {
    input.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse "1, 3" into zero-based indices below `len`; None if any entry is not a number
fn parse_toggles(input: &str, len: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for part in input.split(',') {
        let n: usize = part.trim().parse().ok()?;
        if (1..=len).contains(&n) {
            indices.push(n - 1);
        }
    }
    Some(indices)
}

fn read_line(reader: &mut dyn BufRead) -> DorkResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(DorkError::Interrupted);
    }
    Ok(line)
}

/// Where menu answers come from: dialoguer widgets on a terminal, plain lines otherwise
enum Prompter {
    Terminal(Box<dyn Theme>),
    Lines(Box<dyn BufRead>),
}

impl Prompter {
    fn terminal(plain: bool) -> Self {
        if plain {
            Prompter::Terminal(Box::new(SimpleTheme))
        } else {
            Prompter::Terminal(Box::new(ColorfulTheme::default()))
        }
    }

    fn use_plain_theme(&mut self) {
        if let Prompter::Terminal(theme) = self {
            *theme = Box::new(SimpleTheme);
        }
    }

    /// One trimmed line; empty input yields `default` when given
    fn input(&mut self, prompt: &str, default: Option<&str>) -> DorkResult<String> {
        match self {
            Prompter::Terminal(theme) => {
                let mut input = Input::<String>::with_theme(&**theme)
                    .with_prompt(prompt)
                    .allow_empty(true);
                if let Some(default) = default {
                    input = input.default(default.to_string());
                }
                let line = input.interact_text()?;
                Ok(line.trim().to_string())
            }
            Prompter::Lines(reader) => {
                match default {
                    Some(default) => print!("{} [{}]\n> ", prompt, default),
                    None => print!("{}\n> ", prompt),
                }
                io::stdout().flush()?;

                let line = read_line(reader.as_mut())?;
                let line = line.trim();
                if line.is_empty() {
                    Ok(default.unwrap_or_default().to_string())
                } else {
                    Ok(line.to_string())
                }
            }
        }
    }

    /// Pick one item; `None` only when `skippable` and the user skipped
    fn select(&mut self, prompt: &str, items: &[&str], default: usize, skippable: bool) -> DorkResult<Option<usize>> {
        if let Prompter::Terminal(theme) = self {
            let select = Select::with_theme(&**theme)
                .with_prompt(prompt)
                .default(default)
                .items(items);
            return Ok(if skippable { select.interact_opt()? } else { Some(select.interact()?) });
        }

        for (i, item) in items.iter().enumerate() {
            println!("   {} {}", format!("[{}]", i + 1).yellow(), item);
        }
        println!();

        let range = format!("1-{}", items.len());
        let hint = if skippable { format!("{}, Enter to skip", range) } else { range.clone() };

        loop {
            let choice = self.input(&format!("{} ({})", prompt, hint), None)?;
            if choice.is_empty() {
                return Ok(if skippable { None } else { Some(default) });
            }
            match choice.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => println!("{}", format!("Invalid choice! Please enter {}.", range).red()),
            }
        }
    }

    /// Toggle any number of items starting from `defaults`
    fn multi_select(&mut self, prompt: &str, items: &[&str], defaults: &[bool]) -> DorkResult<Vec<usize>> {
        if let Prompter::Terminal(theme) = self {
            return Ok(MultiSelect::with_theme(&**theme)
                .with_prompt(prompt)
                .items(items)
                .defaults(defaults)
                .interact()?);
        }

        let mut selected: BTreeSet<usize> = defaults.iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect();

        loop {
            for (i, item) in items.iter().enumerate() {
                let mark = if selected.contains(&i) { "[x]".green() } else { "[ ]".normal() };
                println!("   {} {} {}", format!("{:>2}.", i + 1).yellow(), mark, item);
            }
            println!("{}", "Toggle with numbers (comma-separated), 'all', 'none', Enter or 'done' to finish".yellow());

            let choice = self.input(prompt, None)?.to_lowercase();
            match choice.as_str() {
                "" | "done" => return Ok(selected.into_iter().collect()),
                "all" => selected = (0..items.len()).collect(),
                "none" => selected.clear(),
                _ => match parse_toggles(&choice, items.len()) {
                    Some(indices) => {
                        for i in indices {
                            if !selected.remove(&i) {
                                selected.insert(i);
                            }
                        }
                    }
                    None => println!("{}", "Invalid input!".red()),
                },
            }
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> DorkResult<bool> {
        if let Prompter::Terminal(theme) = self {
            return Ok(Confirm::with_theme(&**theme)
                .with_prompt(prompt)
                .default(default)
                .interact()?);
        }

        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.input(&format!("{} ({})", prompt, hint), None)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

pub struct InteractiveShell {
    session: Session,
    settings: Settings,
    prompter: Prompter,
}

impl InteractiveShell {
    pub fn new(session: Session, settings: Settings) -> Self {
        let prompter = if io::stdin().is_terminal() && Term::stderr().is_term() {
            Prompter::terminal(session.options.disable_colors || !display::colors_enabled())
        } else {
            debug!("stdin is not a terminal, reading menu input line by line");
            Prompter::Lines(Box::new(BufReader::new(io::stdin())))
        };

        Self {
            session,
            settings,
            prompter,
        }
    }

    /// Menu driven by lines from `input` instead of the terminal
    pub fn with_input<R: BufRead + 'static>(session: Session, settings: Settings, input: R) -> Self {
        Self {
            session,
            settings,
            prompter: Prompter::Lines(Box::new(input)),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Menu loop; returns when the user quits, interrupts a prompt or input ends
    pub async fn run(&mut self) -> DorkResult<()> {
        loop {
            match self.step().await {
                Ok(true) => continue,
                Ok(false) => {
                    println!("{}", "Goodbye!".green());
                    return Ok(());
                }
                Err(e) if e.is_interrupt() => {
                    println!("\n{}", "Exiting...".red());
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and handle one choice; false means quit
    async fn step(&mut self) -> DorkResult<bool> {
        display::clear_screen();
        if !self.session.options.no_banner && !self.session.silent {
            display::print_banner();
        }
        display::print_main_menu();
        display::print_menu_status(&self.session);

        let choice = self.prompt("Select option")?;

        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::SetTarget) => self.set_targets()?,
            Ok(MenuChoice::SelectEngine) => self.select_engine()?,
            Ok(MenuChoice::SelectCategories) => self.select_categories()?,
            Ok(MenuChoice::UseProfile) => self.select_profile()?,
            Ok(MenuChoice::AdvancedOptions) => self.advanced_options()?,
            Ok(MenuChoice::Generate) => self.generate().await?,
            Ok(MenuChoice::ShowConfiguration) => {
                display::clear_screen();
                display::show_status(&self.session);
                self.pause("Press Enter to continue...")?;
            }
            Ok(MenuChoice::Help) => {
                display::clear_screen();
                display::show_help();
                self.pause("Press Enter to continue...")?;
            }
            Ok(MenuChoice::Quit) => return Ok(false),
            Err(e) => {
                debug!("{}", e);
                println!("{}", "Invalid option!".red());
                self.pause("Press Enter to continue...")?;
            }
        }

        Ok(true)
    }

    fn prompt(&mut self, prompt: &str) -> DorkResult<String> {
        self.prompter.input(prompt, None)
    }

    fn pause(&mut self, message: &str) -> DorkResult<()> {
        self.prompt(&message.yellow().to_string()).map(|_| ())
    }

    fn set_targets(&mut self) -> DorkResult<()> {
        display::clear_screen();
        display::print_header("Set Target(s)");
        println!("{}", "Enter target domains (supports wildcards like *.example.com):".yellow());
        println!("{}", "(Press Enter on empty line to finish)".yellow());
        println!();

        let mut targets = Vec::new();
        loop {
            let target = self.prompt(&format!("[{}]", targets.len() + 1))?;
            if target.is_empty() {
                break;
            }
            targets.push(target);
        }

        self.session.targets = targets;

        if self.session.targets.is_empty() {
            println!("{}", "No targets specified!".red());
            self.pause("Press Enter to continue...")?;
            return Ok(());
        }

        println!();
        let exclusions = self.prompt("Enter domains to exclude (comma-separated, optional)")?;
        if !exclusions.is_empty() {
            self.session.exclusions = parse_exclusions(&exclusions);
        }

        info!("{} targets, {} exclusions set", self.session.targets.len(), self.session.exclusions.len());
        Ok(())
    }

    fn select_engine(&mut self) -> DorkResult<()> {
        display::clear_screen();
        display::print_header("Select Search Engine");
        println!();

        let titles: Vec<&str> = EngineSelection::ALL.iter().map(|e| e.title()).collect();
        let current = EngineSelection::ALL.iter()
            .position(|e| *e == self.session.engine)
            .unwrap_or(0);

        if let Some(selection) = self.prompter.select("Select engine", &titles, current, false)? {
            self.session.engine = EngineSelection::ALL[selection];
        }
        Ok(())
    }

    fn select_categories(&mut self) -> DorkResult<()> {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();

        loop {
            display::clear_screen();
            display::print_header("Select Recon Categories");
            println!();

            let defaults: Vec<bool> = Category::ALL.iter()
                .map(|c| self.session.categories.contains(c))
                .collect();

            let selected = self.prompter.multi_select("Space to toggle, Enter to finish", &names, &defaults)?;

            if selected.is_empty() {
                println!("{}", "Please select at least one category!".red());
                self.pause("Press Enter to continue...")?;
                continue;
            }

            self.session.categories = selected.into_iter().map(|i| Category::ALL[i]).collect();
            return Ok(());
        }
    }

    fn select_profile(&mut self) -> DorkResult<()> {
        display::clear_screen();
        display::print_header("Use Profile");
        println!();

        let mut labels: Vec<&str> = Profile::ALL.iter().map(|p| p.label()).collect();
        labels.push("Custom (manual selection)");

        match self.prompter.select("Select profile", &labels, 0, true)? {
            None => Ok(()),
            Some(i) if i >= Profile::ALL.len() => {
                self.session.profile = None;
                Ok(())
            }
            Some(i) => {
                let profile = Profile::ALL[i];
                self.session.apply_profile(profile);
                println!("{}", format!("Profile '{}' applied!", profile).green());
                self.pause("Press Enter to continue...")
            }
        }
    }

    fn advanced_options(&mut self) -> DorkResult<()> {
        display::clear_screen();
        display::print_header("Advanced Options");
        println!();

        let selected = self.prompter.multi_select(
            "Space to toggle, Enter to finish",
            &DorkOptions::LABELS,
            &self.session.options.as_flags(),
        )?;

        self.session.options = DorkOptions::from_selected(&selected);

        if self.session.options.disable_colors {
            display::disable_colors();
            self.prompter.use_plain_theme();
        }

        debug!("Options now {:?}", self.session.options);
        Ok(())
    }

    async fn generate(&mut self) -> DorkResult<()> {
        match self.session.validate() {
            Err(DorkError::MissingTargets) => {
                println!("{}", "Please set targets first!".red());
                return self.pause("Press Enter to continue...");
            }
            Err(DorkError::MissingCategories) => {
                println!("{}", "Please select categories first!".red());
                return self.pause("Press Enter to continue...");
            }
            other => other?,
        }

        let dorks = self.session.generate()?;

        display::clear_screen();
        display::display_results(&dorks, &self.session, self.settings.display.max_dorks_per_category);

        if !dorks.is_empty() && !self.session.silent && self.prompter.confirm("Export to file?", false)? {
            let default_filename = self.settings.export.default_filename.clone();
            let filename = self.prompter.input("Filename", Some(default_filename.as_str()))?;

            let path = PathBuf::from(filename);
            match export::export_dorks(&dorks, &self.session, &path).await {
                Ok(_) => println!("{}", format!("Dorks exported to {}", path.display()).green()),
                Err(e) => println!("{}", format!("Error exporting: {}", e).red()),
            }
        }

        self.pause("Press Enter to return to main menu...")
    }
}
