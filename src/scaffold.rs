use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::conflict;
use crate::layout::PluginLayout;
use crate::manifest::Manifest;
use crate::platform::{self, Environment};
use crate::plugin::PluginRequest;
use crate::template::build_init_lua;
use crate::{Error, Result};

/// How a scaffold run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// A new plugin directory was created.
    Created(PluginLayout),
    /// The directory existed and the generated files were replaced.
    Overwritten(PluginLayout),
    /// The directory existed and the user declined to overwrite it.
    Aborted(PluginLayout),
}

impl ScaffoldOutcome {
    pub fn layout(&self) -> &PluginLayout {
        match self {
            ScaffoldOutcome::Created(layout)
            | ScaffoldOutcome::Overwritten(layout)
            | ScaffoldOutcome::Aborted(layout) => layout,
        }
    }
}

/// Writes plugin skeletons into a Chatterino base directory.
pub struct Scaffolder {
    base_dir: PathBuf,
}

impl Scaffolder {
    /// Create a scaffolder targeting the given Chatterino base directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Create a scaffolder for the platform's Chatterino data directory.
    pub fn for_current_platform() -> Result<Self> {
        let base_dir = platform::resolve_current(&Environment::from_process())?;
        Ok(Self { base_dir })
    }

    /// Generate info.json and init.lua for `request`.
    ///
    /// `confirm` is asked whether to overwrite when the plugin directory
    /// already exists. The two files are written one after the other; if the
    /// second write fails the first is left in place.
    #[instrument(skip(self, request, confirm), fields(plugin = request.name()))]
    pub fn scaffold<F>(&self, request: &PluginRequest, confirm: F) -> Result<ScaffoldOutcome>
    where
        F: FnOnce() -> Result<bool>,
    {
        let layout = PluginLayout::for_plugin(&self.base_dir, request.name());
        let exists = layout.plugin_dir().exists();
        debug!(path = %layout.plugin_dir().display(), exists, "resolved plugin directory");

        let resolution = conflict::resolve(exists, confirm)?;
        if !resolution.proceed {
            debug!("overwrite declined, leaving directory untouched");
            return Ok(ScaffoldOutcome::Aborted(layout));
        }

        std::fs::create_dir_all(layout.plugin_dir()).map_err(|e| Error::CreateDir {
            path: layout.plugin_dir().to_path_buf(),
            source: e,
        })?;

        let manifest = Manifest::new(request.name(), request.permissions()).to_json()?;
        write_file(layout.info_json(), &manifest)?;

        let script = build_init_lua(request.name(), request.permissions());
        write_file(layout.init_lua(), &script)?;

        if resolution.overwrite {
            Ok(ScaffoldOutcome::Overwritten(layout))
        } else {
            Ok(ScaffoldOutcome::Created(layout))
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    std::fs::write(path, content).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
