//! Command-line configuration.

use std::io::{self, Read};
use std::path::PathBuf;

use lua_diagnostic::{display_filename, DEFAULT_FILENAME};
use thiserror::Error;

/// Where the chunk comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Everything a run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Name shown in diagnostics.
    pub filename: String,
    pub input: InputSource,
}

impl RunConfig {
    /// Read standard input, reporting as `./main.lua`.
    pub fn stdin() -> Self {
        RunConfig {
            filename: DEFAULT_FILENAME.to_string(),
            input: InputSource::Stdin,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        RunConfig {
            filename: display_filename(&path),
            input: InputSource::File(path),
        }
    }

    /// Read the whole chunk. Bytes that are not UTF-8 are replaced.
    pub fn read_source(&self) -> io::Result<String> {
        let bytes = match &self.input {
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes)?;
                bytes
            }
            InputSource::File(path) => std::fs::read(path)?,
        };
        Ok(match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::stdin()
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut path: Option<String> = None;
        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Ok(Command::Help);
            } else if arg == "-" && path.is_none() {
                // Explicit stdin.
                path = Some(arg);
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg));
            } else if path.is_none() {
                path = Some(arg);
            } else {
                return Err(ConfigError::UnexpectedArgument(arg));
            }
        }

        let config = match path.as_deref() {
            None | Some("-") => RunConfig::stdin(),
            Some(path) => RunConfig::file(path),
        };
        Ok(Command::Run(config))
    }
}

pub fn usage() -> &'static str {
    "Usage: luai [file]\n\
     \n\
     Evaluates a chunk of the Lua subset read from [file], or from standard\n\
     input when no file (or '-') is given.\n\
     \n\
     Options:\n\
     \x20 -h, --help    Print this message\n\
     \n\
     Set RUST_LOG (e.g. RUST_LOG=debug) for trace output on stderr."
}
