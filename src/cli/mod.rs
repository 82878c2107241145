pub mod app;
mod args;
pub mod display;
mod interactive;

pub use app::App;
pub use args::Args;
pub use interactive::{InteractiveShell, MenuChoice};
