use serde::{Deserialize, Serialize};

use crate::plugin::Permission;
use crate::{Error, Result};

pub const DEFAULT_DESCRIPTION: &str = "A new Chatterino plugin.";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/yourusername/your-repo";
pub const DEFAULT_TAG: &str = "plugin";
pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_LICENSE: &str = "MIT";

/// A permission entry in info.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    #[serde(rename = "type")]
    pub kind: Permission,
}

/// The info.json manifest Chatterino reads to load a plugin.
///
/// Field order here is the key order in the serialized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    pub homepage: String,
    pub tags: Vec<String>,
    pub version: String,
    pub license: String,
    pub permissions: Vec<PermissionEntry>,
}

impl Manifest {
    /// Build a manifest with placeholder metadata.
    ///
    /// One permission entry is produced per input permission, in order,
    /// duplicates included.
    pub fn new(name: &str, permissions: &[Permission]) -> Self {
        Self {
            name: name.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            authors: vec![DEFAULT_AUTHOR.to_string()],
            homepage: DEFAULT_HOMEPAGE.to_string(),
            tags: vec![DEFAULT_TAG.to_string()],
            version: DEFAULT_VERSION.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            permissions: permissions
                .iter()
                .map(|&kind| PermissionEntry { kind })
                .collect(),
        }
    }

    /// Serialize as 2-space indented JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }
}
