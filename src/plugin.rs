use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::{Error, Result};

/// A capability a Chatterino plugin declares in its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    FilesystemRead,
    FilesystemWrite,
    #[serde(rename = "HTTP")]
    Http,
}

impl Permission {
    /// Every permission, in the order they are offered to the user.
    pub const ALL: [Permission; 3] = [
        Permission::FilesystemRead,
        Permission::FilesystemWrite,
        Permission::Http,
    ];

    /// The name used in `info.json` and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::FilesystemRead => "FilesystemRead",
            Permission::FilesystemWrite => "FilesystemWrite",
            Permission::Http => "HTTP",
        }
    }

    /// Whether this permission grants any filesystem access.
    pub fn is_filesystem(self) -> bool {
        matches!(self, Permission::FilesystemRead | Permission::FilesystemWrite)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPermission(s.to_string()))
    }
}

/// Everything needed to generate one plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRequest {
    name: String,
    permissions: Vec<Permission>,
}

impl PluginRequest {
    /// Create a request. Permission order is kept and duplicates are not removed.
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Result<Self> {
        let name = name.into();
        validate_plugin_name(&name)?;
        Ok(Self { name, permissions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }
}

/// Check that `name` can be used as a single directory under `Plugins/`.
///
/// The name must be one plain path component: no separators, no `.` or
/// `..`, nothing absolute.
pub fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyPluginName);
    }

    // Backslash is a separator on Windows; reject it everywhere so a name
    // means the same directory on every platform
    if name.contains(['/', '\\']) {
        return Err(Error::InvalidPluginName(name.to_string()));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(Error::InvalidPluginName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permissions() {
        assert_eq!(
            "FilesystemRead".parse::<Permission>().unwrap(),
            Permission::FilesystemRead
        );
        assert_eq!(
            " FilesystemWrite ".parse::<Permission>().unwrap(),
            Permission::FilesystemWrite
        );
        assert_eq!("HTTP".parse::<Permission>().unwrap(), Permission::Http);
    }

    #[test]
    fn test_parse_unknown_permission() {
        let result = "Network".parse::<Permission>();
        assert!(matches!(result, Err(Error::UnknownPermission(p)) if p == "Network"));

        // Names are case-sensitive
        assert!("http".parse::<Permission>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for p in Permission::ALL {
            assert_eq!(p.to_string().parse::<Permission>().unwrap(), p);
        }
    }

    #[test]
    fn test_request_rejects_empty_name() {
        let result = PluginRequest::new("", vec![Permission::Http]);
        assert!(matches!(result, Err(Error::EmptyPluginName)));
    }

    #[test]
    fn test_request_rejects_path_like_names() {
        for name in ["/abs", "../x", "a/b", "a\\b", "..", ".", "C:\\x"] {
            let result = PluginRequest::new(name, vec![]);
            assert!(
                matches!(result, Err(Error::InvalidPluginName(ref n)) if n == name),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_accepts_plain_names() {
        for name in ["mybot", "my bot", "my-bot.v2", "..hidden"] {
            assert!(PluginRequest::new(name, vec![]).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_request_keeps_order_and_duplicates() {
        let request = PluginRequest::new(
            "mybot",
            vec![Permission::Http, Permission::FilesystemRead, Permission::Http],
        )
        .unwrap();
        assert_eq!(request.name(), "mybot");
        assert_eq!(
            request.permissions(),
            &[Permission::Http, Permission::FilesystemRead, Permission::Http]
        );
    }
}
