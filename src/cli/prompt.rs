//! Interactive questions asked when the command line leaves something out.

use rustyline::DefaultEditor;

use crate::plugin::{validate_plugin_name, Permission};
use crate::{Error, Result};

/// Source of user answers.
///
/// Ctrl+C and Ctrl+D surface as [`crate::Error::Interrupted`].
pub trait LineReader {
    /// Show `prompt` and read one line of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show feedback that is not itself a question.
    fn message(&mut self, text: &str);
}

/// Line reader backed by the terminal.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Ok(self.editor.readline(prompt)?)
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Ask for the plugin name until a usable one is given.
pub fn ask_plugin_name(reader: &mut impl LineReader) -> Result<String> {
    loop {
        let name = reader.read_line("What is the name of your plugin? ")?;
        match validate_plugin_name(&name) {
            Ok(()) => return Ok(name),
            Err(Error::EmptyPluginName) => reader.message("Plugin name cannot be empty"),
            Err(Error::InvalidPluginName(_)) => {
                reader.message("Plugin name must be a single directory name")
            }
            Err(e) => return Err(e),
        }
    }
}

/// Let the user pick any number of permissions.
///
/// Accepts choice numbers or permission names separated by commas or
/// spaces. An empty answer selects nothing.
pub fn ask_permissions(reader: &mut impl LineReader) -> Result<Vec<Permission>> {
    reader.message("Select the permissions your plugin needs:");
    for (i, permission) in Permission::ALL.iter().enumerate() {
        reader.message(&format!("  {}) {}", i + 1, permission));
    }

    loop {
        let answer = reader.read_line("Permissions (e.g. 1,3; empty for none): ")?;
        match parse_selection(&answer) {
            Ok(selected) => return Ok(selected),
            Err(item) => reader.message(&format!("Unknown choice '{}'", item)),
        }
    }
}

/// Ask whether an existing plugin directory may be overwritten. Defaults to no.
pub fn confirm_overwrite(reader: &mut impl LineReader, name: &str) -> Result<bool> {
    let prompt = format!(
        "A directory named \"{}\" already exists. Do you want to overwrite it? (y/N) ",
        name
    );

    loop {
        let answer = reader.read_line(&prompt)?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "no" => return Ok(false),
            "y" | "yes" => return Ok(true),
            _ => reader.message("Please answer 'y' or 'n'"),
        }
    }
}

/// Parse a multi-select answer, returning the offending item on failure.
fn parse_selection(answer: &str) -> std::result::Result<Vec<Permission>, String> {
    let mut selected = Vec::new();

    for item in answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
    {
        let permission = match item.parse::<usize>() {
            Ok(n) if (1..=Permission::ALL.len()).contains(&n) => Permission::ALL[n - 1],
            Ok(_) => return Err(item.to_string()),
            Err(_) => item.parse::<Permission>().map_err(|_| item.to_string())?,
        };

        // A selection is a set; repeated picks count once
        if !selected.contains(&permission) {
            selected.push(permission);
        }
    }

    Ok(selected)
}
