//! Clipboard capability
//!
//! The clipboard is detected once at startup and handed to the session as an
//! optional dependency. Copying pipes the prompt into an external command
//! (`pbcopy`, `wl-copy`, `xclip`, ...).

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while copying to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
}

/// Something that can take the generated prompt
pub trait Clipboard {
    /// Short name shown to the user
    fn name(&self) -> &str;

    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Whether to look for a clipboard at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardMode {
    #[default]
    Auto,
    Off,
}

impl fmt::Display for ClipboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Off => write!(f, "off"),
        }
    }
}

impl FromStr for ClipboardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "on" => Ok(Self::Auto),
            "off" | "none" => Ok(Self::Off),
            other => Err(format!("unknown clipboard mode '{}' (expected auto or off)", other)),
        }
    }
}

/// Copy commands in the order they are tried
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Clipboard backed by a command that reads the text from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
    name: String,
}

impl CommandClipboard {
    pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
            name,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Clipboard for CommandClipboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        debug!(program = %self.name, bytes = text.len(), "CommandClipboard::copy: called");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.name.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(source) = stdin.write_all(text.as_bytes())
        {
            drop(stdin);
            // reap the command so it does not linger as a zombie
            let _ = child.kill();
            let _ = child.wait();
            return Err(ClipboardError::Write {
                program: self.name.clone(),
                source,
            });
        }
        // stdin was dropped above so the command sees EOF

        let status = child.wait().map_err(|source| ClipboardError::Spawn {
            program: self.name.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ClipboardError::Status {
                program: self.name.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Look for a usable clipboard command on `PATH`
pub fn detect(mode: ClipboardMode) -> Option<Box<dyn Clipboard>> {
    match mode {
        ClipboardMode::Off => {
            info!("Clipboard disabled");
            None
        }
        ClipboardMode::Auto => {
            let found = detect_in_path(env::var_os("PATH"));
            match &found {
                Some(clipboard) => info!(
                    "Clipboard: {} {}",
                    clipboard.program().display(),
                    clipboard.args().join(" ")
                ),
                None => info!("No clipboard command found on PATH"),
            }
            found.map(|c| Box::new(c) as Box<dyn Clipboard>)
        }
    }
}

/// Search the directories of a `PATH`-style value for the first known copy command
pub fn detect_in_path(path: Option<OsString>) -> Option<CommandClipboard> {
    let dirs: Vec<PathBuf> = path.map(|p| env::split_paths(&p).collect()).unwrap_or_default();

    CANDIDATES.iter().find_map(|(program, args)| {
        dirs.iter()
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
            .map(|found| CommandClipboard::new(found, args))
    })
}
