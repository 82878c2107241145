use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DorkError {
    #[error("Target(s) required!")]
    MissingTargets,

    #[error("No categories selected!")]
    MissingCategories,

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid engine: {0}")]
    InvalidEngine(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for DorkError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            // console reports Ctrl-C inside a prompt as Interrupted, closed stdin as UnexpectedEof
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => DorkError::Interrupted,
            _ => DorkError::Io(error),
        }
    }
}

impl From<dialoguer::Error> for DorkError {
    fn from(error: dialoguer::Error) -> Self {
        #[allow(unreachable_patterns)]
        match error {
            dialoguer::Error::IO(e) => e.into(),
            other => DorkError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
        }
    }
}

impl From<serde_json::Error> for DorkError {
    fn from(error: serde_json::Error) -> Self {
        DorkError::SerializationError(error.to_string())
    }
}

impl DorkError {
    /// Whether the error means the user asked to leave
    pub fn is_interrupt(&self) -> bool {
        matches!(self, DorkError::Interrupted)
    }
}

pub type DorkResult<T> = std::result::Result<T, DorkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_kinds_map_to_interrupted() {
        let err: DorkError = io::Error::new(io::ErrorKind::Interrupted, "read interrupted").into();
        assert!(err.is_interrupt());

        let err: DorkError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(err.is_interrupt());

        let err: DorkError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_interrupt());
    }

    #[test]
    fn test_messages() {
        assert_eq!(DorkError::InvalidProfile("nope".into()).to_string(), "Invalid profile: nope");
        assert_eq!(DorkError::MissingTargets.to_string(), "Target(s) required!");
    }
}
