pub mod cli;
pub mod config;
pub mod dork;
pub mod error;
pub mod export;
pub mod profile;
pub mod session;

// Re-export main types for easier access
pub use cli::{App, Args};
pub use config::Settings;
pub use dork::{
    Category,
    DorkOptions,
    EngineSelection,
    GeneratedDorks,
    SearchEngine,
    format_url,
    generate,
};
pub use error::{DorkError, DorkResult};
pub use profile::Profile;
pub use session::Session;
