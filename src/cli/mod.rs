pub mod prompt;
pub mod style;

use clap::Parser;
use std::path::PathBuf;

use crate::plugin::{Permission, PluginRequest};
use crate::scaffold::{ScaffoldOutcome, Scaffolder};
use crate::Result;
use prompt::{LineReader, Terminal};

#[derive(Parser, Debug)]
#[command(name = "create-chatterino-plugin")]
#[command(about = "A CLI tool to create Chatterino plugins")]
#[command(version)]
pub struct Cli {
    /// Name of the plugin
    pub plugin_name: Option<String>,

    /// Plugin permissions (comma-separated: FilesystemRead, FilesystemWrite, HTTP)
    #[arg(short, long)]
    pub permissions: Option<String>,

    /// Chatterino data directory to create the plugin in (defaults to the platform location)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
}

/// The request a run settled on and what became of it.
#[derive(Debug)]
pub struct Generated {
    pub request: PluginRequest,
    pub outcome: ScaffoldOutcome,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut terminal = Terminal::new()?;
        let Generated { request, outcome } = self.execute(&mut terminal)?;

        match &outcome {
            ScaffoldOutcome::Created(_) | ScaffoldOutcome::Overwritten(_) => {
                let message = format!("Plugin \"{}\" created successfully!", request.name());
                println!("{}", style::success(&message));
                println!("  {}", outcome.layout().plugin_dir().display());
            }
            ScaffoldOutcome::Aborted(_) => {
                println!("{}", style::notice("Plugin creation aborted."));
            }
        }

        Ok(())
    }

    /// Collect whatever the arguments left out, then scaffold the plugin.
    pub fn execute(self, reader: &mut impl LineReader) -> Result<Generated> {
        // Validate flags before asking anything
        let permissions = self
            .permissions
            .as_deref()
            .filter(|list| !list.is_empty())
            .map(parse_permission_list)
            .transpose()?;

        let scaffolder = match self.base_dir {
            Some(dir) => Scaffolder::new(dir),
            None => Scaffolder::for_current_platform()?,
        };

        let name = match self.plugin_name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => prompt::ask_plugin_name(reader)?,
        };
        let permissions = match permissions {
            Some(permissions) => permissions,
            None => prompt::ask_permissions(reader)?,
        };

        let request = PluginRequest::new(name, permissions)?;
        let outcome =
            scaffolder.scaffold(&request, || prompt::confirm_overwrite(reader, request.name()))?;

        Ok(Generated { request, outcome })
    }
}

/// Parse a comma-separated permission list, rejecting unknown names.
pub fn parse_permission_list(list: &str) -> Result<Vec<Permission>> {
    list.split(',').map(str::parse::<Permission>).collect()
}
