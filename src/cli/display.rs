// src/cli/display.rs - Terminal rendering for menus and results
use std::io::{self, Write};
use colored::*;
use console::Term;

use crate::dork::{Category, GeneratedDorks};
use crate::error::DorkError;
use crate::session::Session;

const HEADER_WIDTH: usize = 77;
const CATEGORY_WIDTH: usize = 60;

/// Turn styled output off for the rest of the process
pub fn disable_colors() {
    colored::control::set_override(false);
}

pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

pub fn clear_screen() {
    let term = Term::stdout();
    if term.is_term() {
        let _ = term.clear_screen();
    }
}

pub fn print_banner() {
    let _ = write_banner(&mut io::stdout().lock());
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let lines = [
        r"  ____             _      _____          _                   ",
        r" |  _ \  ___  _ __| | __ |  ___|_ _  ___| |_ ___  _ __ _   _ ",
        r" | | | |/ _ \| '__| |/ / | |_ / _` |/ __| __/ _ \| '__| | | |",
        r" | |_| | (_) | |  |   <  |  _| (_| | (__| || (_) | |  | |_| |",
        r" |____/ \___/|_|  |_|\_\ |_|  \__,_|\___|\__\___/|_|   \__, |",
        r"                                                       |___/ ",
    ];

    for line in lines {
        writeln!(out, "{}", line.cyan())?;
    }
    writeln!(out, "{}", format!("        Passive Recon Query Generator | v{}", env!("CARGO_PKG_VERSION")).yellow())?;
    writeln!(out)
}

fn boxed(title: &str, width: usize) -> [String; 3] {
    let inner = width - 2;
    [
        format!("╔{}╗", "═".repeat(inner)),
        format!("║{:^inner$}║", title),
        format!("╚{}╝", "═".repeat(inner)),
    ]
}

pub fn print_header(title: &str) {
    let _ = write_header(&mut io::stdout().lock(), title);
}

fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    for line in boxed(title, HEADER_WIDTH) {
        writeln!(out, "{}", line.cyan().bold())?;
    }
    Ok(())
}

fn write_category_header<W: Write>(out: &mut W, category: Category) -> io::Result<()> {
    for line in boxed(category.display_name(), CATEGORY_WIDTH) {
        writeln!(out, "{}", line.magenta().bold())?;
    }
    Ok(())
}

pub fn print_main_menu() {
    print_header("D O R K   F A C T O R Y");
    println!();

    let entries = [
        ("1", "Set Target"),
        ("2", "Select Search Engine"),
        ("3", "Select Recon Categories"),
        ("4", "Use Profile"),
        ("5", "Advanced Options"),
        ("6", "Generate Dorks"),
        ("7", "Show Current Configuration"),
    ];
    for (key, label) in entries {
        println!("   {} {}", format!("[{}]", key).yellow(), label);
    }
    println!();
    println!("   {} Help        {} Quit", "[H]".yellow(), "[Q]".yellow());
    println!();
}

/// Short status lines shown under the main menu
pub fn print_menu_status(session: &Session) {
    if !session.targets.is_empty() {
        println!("{} {} set", "✓ Targets:".green(), session.targets.len());
    }
    if !session.categories.is_empty() {
        println!("{} {} selected", "✓ Categories:".green(), session.categories.len());
    }
    if let Some(profile) = session.profile {
        println!("{} {}", "✓ Profile:".green(), profile);
    }
    if !session.targets.is_empty() || !session.categories.is_empty() || session.profile.is_some() {
        println!();
    }
}

pub fn show_status(session: &Session) {
    print_header("Current Configuration");
    println!();

    println!("{}", "Targets:".yellow());
    for target in &session.targets {
        println!("  {} {}", "•".green(), target);
    }
    if !session.exclusions.is_empty() {
        println!("{}", "Exclusions:".yellow());
        for excl in &session.exclusions {
            println!("  {} {}", "•".red(), excl);
        }
    }
    println!();

    println!("{} {}", "Search Engine:".yellow(), session.engine.key().cyan());
    println!();

    println!("{}", "Categories:".yellow());
    for category in &session.categories {
        println!("  {} {}", "✓".green(), category);
    }
    println!();

    if let Some(profile) = session.profile {
        println!("{} {}", "Profile:".yellow(), profile.key().magenta());
        println!();
    }

    let options = [
        ("Exclude Subdomains", session.options.exclude_subdomains),
        ("Strict Queries", session.options.strict_queries),
        ("Reduce Noise", session.options.reduce_noise),
        ("Disable Colors", session.options.disable_colors),
        ("No Banner", session.options.no_banner),
    ];
    println!("{}", "Advanced Options:".yellow());
    for (label, on) in options {
        let status = if on { "ON".green() } else { "OFF".red() };
        println!("  {}: {}", label, status);
    }
    println!();
}

pub fn show_help() {
    print_header("Help & Information");
    println!();
    println!("{}", format!("Dork Factory v{}", env!("CARGO_PKG_VERSION")).yellow());
    println!("{}", "A passive reconnaissance tool for generating search engine dorks.".cyan());
    println!();
    println!("{}", "Usage:".green());
    println!("  Interactive mode: dorkfactory");
    println!("  Flag mode: dorkfactory --target example.com --profile bugbounty");
    println!();
    println!("{}", "Interactive Mode:".green());
    println!("  • Navigate using numbers and letters");
    println!("  • Space toggles entries in multi-select lists, Enter confirms");
    println!("  • Press Enter on an empty line to finish entering targets");
    println!("  • Esc skips the profile menu");
    println!();
    println!("{}", "Profiles:".green());
    println!("  • Bug Bounty: Comprehensive security testing");
    println!("  • OSINT Company: Focused on information gathering");
    println!("  • CTF: Challenge-oriented dorks");
    println!("  • Web App Basic: Lightweight web app reconnaissance");
    println!("  • Full Scope: All available categories");
    println!();
    println!("{}", "Safety Features:".green());
    println!("  • No scanning or automated requests");
    println!("  • No web scraping or crawling");
    println!("  • Pure query generation only");
    println!();
    println!("{} Always comply with search engine terms of service", "Note:".yellow());
    println!("and applicable laws when using generated dorks.");
    println!();
}

/// Full result listing with URLs per engine
pub fn display_results(dorks: &GeneratedDorks, session: &Session, max_per_category: usize) {
    let _ = write_results(&mut io::stdout().lock(), dorks, session, max_per_category);
}

/// Render the result listing, showing at most `max_per_category` dorks per category
pub fn write_results<W: Write>(
    out: &mut W,
    dorks: &GeneratedDorks,
    session: &Session,
    max_per_category: usize,
) -> io::Result<()> {
    if !session.options.no_banner && !session.silent {
        write_banner(out)?;
    }
    write_header(out, "Generated Dorks")?;
    writeln!(out)?;

    if dorks.is_empty() {
        return writeln!(out, "{}", "No dorks generated! Please check your configuration.".red());
    }

    let engines = session.engine.engines();

    for (category, list) in dorks.iter() {
        write_category_header(out, category)?;
        writeln!(out)?;

        for (i, dork) in list.iter().take(max_per_category).enumerate() {
            writeln!(out, "{} {}", format!("[{:02}]", i + 1).yellow(), dork)?;
            for engine in &engines {
                let url = session.url_for(dork, *engine);
                writeln!(out, "{}", format!("     ↳ {}: {}", engine.title(), url).cyan())?;
            }
            writeln!(out)?;
        }

        if list.len() > max_per_category {
            writeln!(out, "{}", format!("... and {} more dorks", list.len() - max_per_category).yellow())?;
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "{}",
        format!("✓ Generated {} dorks across {} categories", dorks.total(), dorks.category_count())
            .green()
            .bold()
    )?;
    writeln!(out)
}

/// One raw dork per line, nothing else
pub fn print_silent(dorks: &GeneratedDorks) {
    let _ = write_silent(&mut io::stdout().lock(), dorks);
}

pub fn write_silent<W: Write>(out: &mut W, dorks: &GeneratedDorks) -> io::Result<()> {
    for dork in dorks.all_dorks() {
        writeln!(out, "{}", dork)?;
    }
    Ok(())
}

/// Fatal flag-mode error with a usage hint where one helps
pub fn print_error(error: &DorkError) {
    match error {
        DorkError::MissingTargets => {
            eprintln!("{}", "Error: Target(s) required!".red());
            eprintln!("Use --target or run in interactive mode");
        }
        DorkError::MissingCategories => {
            eprintln!("{}", "Error: No categories selected!".red());
            eprintln!("Use --category, --profile, or run in interactive mode");
        }
        DorkError::InvalidProfile(_) => {
            eprintln!("{}", error.to_string().red());
        }
        other => {
            eprintln!("{}", format!("Error: {}", other).red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_centers_title() {
        let [top, middle, bottom] = boxed("Hi", 8);
        assert_eq!(top, "╔══════╗");
        assert_eq!(middle, "║  Hi  ║");
        assert_eq!(bottom, "╚══════╝");
    }

    fn session_for(targets: &[&str], category: Category) -> Session {
        let mut session = Session::new();
        session.targets = targets.iter().map(|t| t.to_string()).collect();
        session.categories.insert(category);
        session.options.no_banner = true;
        session
    }

    fn render(session: &Session, max_per_category: usize) -> String {
        let dorks = session.generate().unwrap();
        let mut out = Vec::new();
        write_results(&mut out, &dorks, session, max_per_category).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_results_are_capped_per_category() {
        let session = session_for(&["a.com", "b.com", "c.com"], Category::PanelsAuth);
        let text = render(&session, 4);

        assert!(text.contains("[04]"));
        assert!(!text.contains("[05]"));
        assert!(text.contains("... and 11 more dorks"));
        assert!(text.contains("Generated 15 dorks across 1 categories"));
        assert_eq!(text.matches("↳ Google: https://www.google.com/search?q=").count(), 4);
    }

    #[test]
    fn test_results_under_cap_have_no_remainder_line() {
        let session = session_for(&["a.com"], Category::Osint);
        let text = render(&session, 20);

        assert!(text.contains("[04]"));
        assert!(!text.contains("more dorks"));
        assert!(!text.contains("Passive Recon Query Generator"));
    }

    #[test]
    fn test_silent_output_is_raw_dorks_only() {
        let mut session = session_for(&["a.com", "b.com"], Category::Backups);
        session.engine = crate::dork::EngineSelection::Both;
        let dorks = session.generate().unwrap();

        let mut out = Vec::new();
        write_silent(&mut out, &dorks).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected: Vec<&str> = dorks.all_dorks().collect();
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
        assert_eq!(text.lines().count(), 8);
        assert!(!text.contains("http"));
        assert!(!text.contains('\x1b'));
    }
}
