//! Locating Chatterino's data directory.
//!
//! Chatterino keeps its settings and plugins under a per-platform
//! application-data directory:
//! - Windows: `%APPDATA%\Chatterino2`
//! - Linux: `~/.local/share/chatterino`
//! - macOS: `~/Library/Application Support/chatterino`

use std::path::PathBuf;

use crate::{Error, Result};

/// The parts of the process environment the resolver reads.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Value of `APPDATA`, only consulted on Windows.
    pub appdata: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            appdata: std::env::var_os("APPDATA").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }
}

/// Resolve Chatterino's base directory for the given OS identifier
/// (as reported by `std::env::consts::OS`).
///
/// On Windows an unset `APPDATA` yields the relative path `Chatterino2`.
pub fn resolve_base_directory(os: &str, env: &Environment) -> Result<PathBuf> {
    match os {
        "windows" => Ok(env
            .appdata
            .clone()
            .unwrap_or_default()
            .join("Chatterino2")),
        "linux" => Ok(home(env)?.join(".local").join("share").join("chatterino")),
        "macos" => Ok(home(env)?
            .join("Library")
            .join("Application Support")
            .join("chatterino")),
        other => Err(Error::UnsupportedPlatform(other.to_string())),
    }
}

/// Resolve the base directory for the platform this binary runs on.
pub fn resolve_current(env: &Environment) -> Result<PathBuf> {
    resolve_base_directory(std::env::consts::OS, env)
}

fn home(env: &Environment) -> Result<PathBuf> {
    env.home.clone().ok_or(Error::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn env() -> Environment {
        Environment {
            appdata: Some(PathBuf::from("/appdata/Roaming")),
            home: Some(PathBuf::from("/home/user")),
        }
    }

    #[test]
    fn test_windows_uses_appdata() {
        let path = resolve_base_directory("windows", &env()).unwrap();
        assert_eq!(path, Path::new("/appdata/Roaming").join("Chatterino2"));
    }

    #[test]
    fn test_windows_without_appdata() {
        let env = Environment {
            appdata: None,
            ..env()
        };
        let path = resolve_base_directory("windows", &env).unwrap();
        assert_eq!(path, Path::new("Chatterino2"));
    }

    #[test]
    fn test_linux() {
        let path = resolve_base_directory("linux", &env()).unwrap();
        assert_eq!(path, Path::new("/home/user/.local/share/chatterino"));
        assert!(path.to_string_lossy().contains(".local/share/"));
    }

    #[test]
    fn test_macos() {
        let path = resolve_base_directory("macos", &env()).unwrap();
        assert_eq!(
            path,
            Path::new("/home/user/Library/Application Support/chatterino")
        );
    }

    #[test]
    fn test_missing_home() {
        let env = Environment {
            home: None,
            ..env()
        };
        assert!(matches!(
            resolve_base_directory("linux", &env),
            Err(Error::HomeDirNotFound)
        ));
        assert!(matches!(
            resolve_base_directory("macos", &env),
            Err(Error::HomeDirNotFound)
        ));
    }

    #[test]
    fn test_unsupported_platform() {
        for os in ["freebsd", "android", ""] {
            let result = resolve_base_directory(os, &env());
            assert!(matches!(result, Err(Error::UnsupportedPlatform(ref p)) if p == os));
        }
    }
}
