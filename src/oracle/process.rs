//! External process oracle
//!
//! Runs the configured program once per request and blocks until it exits.
//! A slow or hung program stalls the caller; wrap it in
//! [`super::AsyncOracle`] to keep the simulation responsive.

use std::io::Read;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use super::DecisionOracle;
use super::wire::{DecisionRequest, parse_reply, shell_quote};
use crate::error::OracleError;
use crate::sim::Decision;

/// How the request payload reaches the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArgMode {
    /// Raw JSON as the last argv entry, no shell involved
    #[default]
    Direct,
    /// Whole command line handed to the platform shell, payload shell-quoted
    Shell,
}

/// Oracle backed by an external program
#[derive(Debug, Clone)]
pub struct ProcessOracle {
    program: String,
    args: Vec<String>,
    mode: ArgMode,
}

impl ProcessOracle {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            mode: ArgMode::Direct,
        }
    }

    /// Arguments placed before the payload (e.g. the script path for an interpreter)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mode(mut self, mode: ArgMode) -> Self {
        self.mode = mode;
        self
    }

    fn command(&self, payload: &str) -> Command {
        match self.mode {
            ArgMode::Direct => {
                let mut command = Command::new(&self.program);
                command.args(&self.args).arg(payload);
                command
            }
            ArgMode::Shell => {
                let mut line = self.program.clone();
                for arg in &self.args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line.push(' ');
                line.push_str(&shell_quote(payload));

                #[cfg(windows)]
                let command = {
                    let mut command = Command::new("cmd");
                    command.arg("/C").arg(line);
                    command
                };
                #[cfg(not(windows))]
                let command = {
                    let mut command = Command::new("sh");
                    command.arg("-c").arg(line);
                    command
                };
                command
            }
        }
    }

    /// Run the program once and return everything it printed.
    ///
    /// The exit status is ignored.
    pub fn query(&self, request: &DecisionRequest) -> Result<String, OracleError> {
        let payload = request.to_json()?;

        let mut child = self
            .command(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| OracleError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut output = String::new();
        let read = match child.stdout.take() {
            Some(mut stdout) => stdout.read_to_string(&mut output).map(|_| ()),
            None => Ok(()),
        };
        // Reap the child even if reading failed
        if let Err(e) = child.wait() {
            log::debug!("Failed to wait on oracle process: {}", e);
        }
        read.map_err(OracleError::Read)?;

        Ok(output)
    }
}

impl DecisionOracle for ProcessOracle {
    fn decide(&mut self, request: &DecisionRequest) -> Decision {
        match self.query(request) {
            Ok(output) => parse_reply(&output),
            Err(e) => {
                log::warn!("{}; opponent stays", e);
                Decision::Stay
            }
        }
    }
}
