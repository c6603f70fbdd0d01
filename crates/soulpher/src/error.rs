//! Setup errors.
//!
//! Frame code never fails: lookups return `Option` and steering is total.
//! The only fallible path is startup (loading config, opening a surface),
//! and a failure there ends the program.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur before the first frame.
#[derive(Debug)]
pub enum SetupError {
    /// The requested drawing surface could not be opened.
    SurfaceUnavailable(String),
    /// Failed to read a config file.
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid JSON for the expected shape.
    ConfigParse(serde_json::Error),
    /// Config parsed but holds unusable values.
    InvalidConfig(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::SurfaceUnavailable(e) => write!(f, "surface unavailable: {e}"),
            SetupError::ConfigRead { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            SetupError::ConfigParse(e) => write!(f, "config parse failed: {e}"),
            SetupError::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::ConfigRead { source, .. } => Some(source),
            SetupError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(e: serde_json::Error) -> Self {
        SetupError::ConfigParse(e)
    }
}

/// Terminate on a fatal setup error.
pub trait OrExit<T> {
    /// Unwrap the value, or log the error and exit with status 1.
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, SetupError> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_messages() {
        let e = SetupError::SurfaceUnavailable("no display".into());
        assert_eq!(e.to_string(), "surface unavailable: no display");

        let e = SetupError::InvalidConfig("speed is negative".into());
        assert_eq!(e.to_string(), "invalid config: speed is negative");
    }

    #[test]
    fn read_error_keeps_path_and_source() {
        let e = SetupError::ConfigRead {
            path: PathBuf::from("demo.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.to_string().contains("demo.json"));
        assert!(e.source().is_some());
    }

    #[test]
    fn parse_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: SetupError = json_err.into();
        assert!(matches!(e, SetupError::ConfigParse(_)));
        assert!(e.source().is_some());
    }

    #[test]
    fn or_exit_passes_ok_through() {
        let ok: Result<u8, SetupError> = Ok(7);
        assert_eq!(ok.or_exit(), 7);
    }
}
