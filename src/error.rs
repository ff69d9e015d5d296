use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("App name must not be empty.")]
    EmptyName,

    #[error("App path must not be empty.")]
    EmptyPath,

    #[error("Path '{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),

    /// The backing store was present but unusable; the registry starts empty.
    #[error("Could not load apps from '{}': {reason}", path.display())]
    LoadCorrupted { path: PathBuf, reason: String },

    #[error("Could not save apps to '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not launch '{}': {reason}", path.display())]
    LaunchFailed { path: PathBuf, reason: String },

    #[error("App '{0}' is not registered.")]
    UnknownApp(String),

    #[error("App name is required when omitting the 'launch' subcommand.")]
    MissingAppName,
}

impl Error {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::LoadCorrupted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_load_corruption_is_recoverable() {
        let corrupted = Error::LoadCorrupted {
            path: PathBuf::from("apps.json"),
            reason: "expected an object".to_string(),
        };
        assert!(corrupted.is_recoverable());
        assert!(!Error::EmptyName.is_recoverable());
        assert!(!Error::UnknownApp("Editor".to_string()).is_recoverable());
    }

    #[test]
    fn messages_name_the_offending_path() {
        let err = Error::PathNotFound(PathBuf::from("/does/not/exist"));
        assert_eq!(err.to_string(), "Path '/does/not/exist' does not exist.");
    }
}
