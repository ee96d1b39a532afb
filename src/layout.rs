use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// Directory under the Chatterino base directory that holds all plugins.
pub const PLUGINS_DIR: &str = "Plugins";
pub const INFO_JSON: &str = "info.json";
pub const INIT_LUA: &str = "init.lua";

/// Encapsulates the Chatterino plugin directory structure conventions.
///
/// Provides lazy-cached path accessors for the generated files:
/// - `<base>/Plugins/<name>/` - plugin directory
/// - `<base>/Plugins/<name>/info.json` - plugin manifest
/// - `<base>/Plugins/<name>/init.lua` - entry script
#[derive(Debug)]
pub struct PluginLayout {
    plugin_dir: PathBuf,
    info_json: OnceCell<PathBuf>,
    init_lua: OnceCell<PathBuf>,
}

impl Clone for PluginLayout {
    fn clone(&self) -> Self {
        Self::new(self.plugin_dir.clone())
    }
}

impl PartialEq for PluginLayout {
    fn eq(&self, other: &Self) -> bool {
        self.plugin_dir == other.plugin_dir
    }
}

impl Eq for PluginLayout {}

impl PluginLayout {
    /// Create a layout rooted at an existing plugin directory path.
    pub fn new(plugin_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            info_json: OnceCell::new(),
            init_lua: OnceCell::new(),
        }
    }

    /// Layout for plugin `name` inside a Chatterino base directory.
    pub fn for_plugin(base_dir: &Path, name: &str) -> Self {
        Self::new(base_dir.join(PLUGINS_DIR).join(name))
    }

    /// Returns reference to the plugin directory path.
    pub fn plugin_dir(&self) -> &Path {
        &self.plugin_dir
    }

    /// Returns reference to the info.json path.
    pub fn info_json(&self) -> &Path {
        self.info_json.get_or_init(|| self.plugin_dir.join(INFO_JSON))
    }

    /// Returns reference to the init.lua path.
    pub fn init_lua(&self) -> &Path {
        self.init_lua.get_or_init(|| self.plugin_dir.join(INIT_LUA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_plugin() {
        let layout = PluginLayout::for_plugin(Path::new("/data/chatterino"), "mybot");
        assert_eq!(
            layout.plugin_dir(),
            Path::new("/data/chatterino/Plugins/mybot")
        );
    }

    #[test]
    fn test_info_json() {
        let layout = PluginLayout::new("/data/chatterino/Plugins/mybot");
        assert_eq!(
            layout.info_json(),
            Path::new("/data/chatterino/Plugins/mybot/info.json")
        );
    }

    #[test]
    fn test_init_lua() {
        let layout = PluginLayout::new("/data/chatterino/Plugins/mybot");
        assert_eq!(
            layout.init_lua(),
            Path::new("/data/chatterino/Plugins/mybot/init.lua")
        );
    }

    #[test]
    fn test_paths_are_cached() {
        let layout = PluginLayout::new("/data/chatterino/Plugins/mybot");

        let info1 = layout.info_json();
        let info2 = layout.info_json();
        assert!(std::ptr::eq(info1, info2));

        let init1 = layout.init_lua();
        let init2 = layout.init_lua();
        assert!(std::ptr::eq(init1, init2));
    }

    #[test]
    fn test_clone_compares_by_dir() {
        let layout = PluginLayout::new("/data/chatterino/Plugins/mybot");
        let _ = layout.info_json();
        assert_eq!(layout.clone(), layout);
    }
}
