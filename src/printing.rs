//! Sending bill text to a printing subsystem

use std::io::Write;
use std::process::{Command, Stdio};

/// Printing failure
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Nothing to print")]
    EmptyDocument,

    #[error("Failed to start print command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send document to printer: {0}")]
    Io(#[from] std::io::Error),

    #[error("Print command '{command}' exited with {status}")]
    CommandFailed { command: String, status: String },
}

/// A destination for printed bills
pub trait Printer: Send + Sync {
    fn print(&self, document: &str) -> Result<(), PrintError>;
}

/// Pipes documents to an external spooler command such as `lp`
#[derive(Debug, Clone)]
pub struct CommandPrinter {
    program: String,
    args: Vec<String>,
}

impl CommandPrinter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a whitespace-separated command line, e.g. `lp -d office`.
    ///
    /// Returns `None` for a blank command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Printer for CommandPrinter {
    fn print(&self, document: &str) -> Result<(), PrintError> {
        if document.trim().is_empty() {
            return Err(PrintError::EmptyDocument);
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PrintError::Spawn {
                command: self.command_line(),
                source,
            })?;

        // The pipe closes when `stdin` drops at the end of the match arm
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(document.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            // Kill and reap the spooler before reporting the write failure
            if let Err(kill_err) = child.kill() {
                tracing::debug!("Print command already exited: {}", kill_err);
            }
            child.wait()?;
            return Err(PrintError::Io(e));
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("Print command stderr: {}", stderr.trim());
            return Err(PrintError::CommandFailed {
                command: self.command_line(),
                status: output.status.to_string(),
            });
        }

        tracing::info!("Sent {} bytes to '{}'", document.len(), self.command_line());
        Ok(())
    }
}
