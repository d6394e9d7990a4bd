use anyhow::{Result, anyhow};

use crate::categories::CategoryField;

/// One line typed into the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Replace the source text
    Text(String),
    /// Add a line to the source text
    Append(String),
    /// Empty the source text
    Clear,
    /// Choose an option for a field
    Set { field: CategoryField, key: String },
    /// Show the options of one field, or of all fields
    Options(Option<CategoryField>),
    Translate,
    Copy,
    /// Print the audit log
    Log { json: bool },
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  text <TEXT>          replace the source text
  append <TEXT>        add a line to the source text
  clear                empty the source text
  set <FIELD> <KEY>    choose a category option
  options [FIELD]      list category options
  translate            run the translation
  copy                 copy the translated text
  log [--json]         show translation history
  show                 redraw the form
  help                 show this help
  quit                 leave the session";

impl SessionCommand {
    /// Parse a session line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            // Text keeps its inner whitespace, only the separator is dropped
            "text" | "t" => Self::Text(rest.to_string()),
            "append" | "a" => Self::Append(rest.to_string()),
            "clear" => Self::Clear,
            "set" | "s" => {
                let mut parts = rest.split_whitespace();
                let field = parts
                    .next()
                    .ok_or_else(|| anyhow!("Usage: set <FIELD> <KEY>"))?
                    .parse::<CategoryField>()?;
                let key = parts
                    .next()
                    .ok_or_else(|| anyhow!("Usage: set <FIELD> <KEY>"))?
                    .to_string();
                if parts.next().is_some() {
                    return Err(anyhow!("Usage: set <FIELD> <KEY>"));
                }
                Self::Set { field, key }
            }
            "options" | "o" => match rest.trim() {
                "" => Self::Options(None),
                field => Self::Options(Some(field.parse()?)),
            },
            "translate" | "go" => Self::Translate,
            "copy" | "c" => Self::Copy,
            "log" | "history" => match rest.trim() {
                "" => Self::Log { json: false },
                "--json" | "json" => Self::Log { json: true },
                other => return Err(anyhow!("Unknown log option: {}", other)),
            },
            "show" | "ls" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(anyhow!("Unknown command: {} (type 'help')", other)),
        };
        Ok(Some(command))
    }
}
