use std::path::PathBuf;
use clap::Parser;

use crate::dork::EngineSelection;

const PROFILES_HELP: &str = "\
Profiles:
  bugbounty      Comprehensive security testing (Google + Yandex)
  osint-company  Focused on information gathering
  ctf            Challenge-oriented dorks
  webapp-basic   Lightweight web app reconnaissance
  full-scope     All available categories (Google + Yandex)

Run without flags (or with -i) for the interactive menu.";

#[derive(Parser, Debug, Default)]
#[command(name = "dorkfactory")]
#[command(version, about = "Dork Factory - Passive Recon Query Generator")]
#[command(after_help = PROFILES_HELP)]
pub struct Args {
    #[arg(short, long, help = "Force interactive mode")]
    pub interactive: bool,

    #[arg(long, help = "Disable banner")]
    pub no_banner: bool,

    #[arg(long, num_args = 1.., value_name = "DOMAIN", help = "Define target(s)")]
    pub target: Vec<String>,

    #[arg(long, num_args = 1.., value_name = "SUBSTRING", help = "Exclude targets containing any of these")]
    pub exclude: Vec<String>,

    #[arg(long, value_enum, help = "Search engine")]
    pub engine: Option<EngineSelection>,

    #[arg(long, num_args = 1.., value_name = "NAME", help = "Select categories (fuzzy match)")]
    pub category: Vec<String>,

    #[arg(long, value_name = "KEY", help = "Use preset profile")]
    pub profile: Option<String>,

    #[arg(long, value_name = "PATH", help = "Export output to file (.json for JSON)")]
    pub export: Option<PathBuf>,

    #[arg(long, help = "Print raw dorks only")]
    pub silent: bool,

    #[arg(long, help = "Disable colors")]
    pub no_color: bool,

    #[arg(long, help = "Percent-encode dorks inside search URLs")]
    pub encode_urls: bool,

    #[arg(short, long, value_name = "PATH", help = "Settings file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Verbose logging to stderr")]
    pub verbose: bool,
}

impl Args {
    /// Whether the flags describe a one-shot run instead of the menu
    pub fn is_flag_mode(&self) -> bool {
        if self.interactive {
            return false;
        }

        !self.target.is_empty()
            || self.engine.is_some()
            || !self.category.is_empty()
            || self.profile.is_some()
            || self.export.is_some()
            || self.silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dorkfactory").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_multi_value_flags() {
        let args = parse(&["--target", "a.com", "b.com", "--category", "panels", "files", "--engine", "both"]);
        assert_eq!(args.target, vec!["a.com", "b.com"]);
        assert_eq!(args.category, vec!["panels", "files"]);
        assert_eq!(args.engine, Some(EngineSelection::Both));
        assert!(args.is_flag_mode());
    }

    #[test]
    fn test_menu_mode_triggers() {
        assert!(!parse(&[]).is_flag_mode());
        assert!(!parse(&["--no-color", "--no-banner"]).is_flag_mode());
        assert!(!parse(&["--exclude", "dev"]).is_flag_mode());
        assert!(!parse(&["-i", "--target", "a.com"]).is_flag_mode());
        assert!(parse(&["--silent"]).is_flag_mode());
        assert!(parse(&["--profile", "ctf"]).is_flag_mode());
        assert!(parse(&["--export", "out.txt"]).is_flag_mode());
    }

    #[test]
    fn test_invalid_engine_rejected() {
        let result = Args::try_parse_from(["dorkfactory", "--engine", "bing"]);
        assert!(result.is_err());
    }
}
