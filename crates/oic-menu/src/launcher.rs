//! Editor process launching
//!
//! Spawning is fire-and-forget: the child is detached and never waited on.
//! Once `spawn()` returns, the extension's responsibility ends regardless of
//! whether the editor later succeeds, crashes, or hangs.

use std::fmt;
use std::path::Path;
use std::process::Command;

use oic_core::prelude::*;

/// Seam between menu activation and process creation.
pub trait EditorLauncher: fmt::Debug + Send + Sync {
    /// Start the editor against `path` without waiting for it to exit.
    fn launch(&self, path: &Path) -> Result<()>;

    /// The command name used for launches (for diagnostics).
    fn command(&self) -> &str;
}

/// Launches the editor by invoking an executable with the target path as its
/// single argument.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    command: String,
}

impl CommandLauncher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Whether the configured command resolves on `PATH`.
    ///
    /// Informational only -- an unavailable command still builds menu items;
    /// activation reports the launch failure instead.
    pub fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }
}

impl EditorLauncher for CommandLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        // Child handle is dropped without wait(); the editor outlives us.
        Command::new(&self.command)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| Error::spawn(self.command.as_str(), e.to_string()))
    }

    fn command(&self) -> &str {
        &self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_executable_is_spawn_error() {
        let launcher = CommandLauncher::new("definitely-not-a-real-editor-xyz");
        let err = launcher.launch(Path::new("/tmp")).unwrap_err();
        match err {
            Error::Spawn { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-editor-xyz");
            }
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_detaches_immediately() {
        // `true` exits on its own; launch must return without waiting on it.
        let launcher = CommandLauncher::new("true");
        launcher.launch(&PathBuf::from("/tmp")).unwrap();
    }

    #[test]
    fn test_unknown_executable_not_available() {
        assert!(!CommandLauncher::new("definitely-not-a-real-editor-xyz").is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_standard_tool_available() {
        assert!(CommandLauncher::new("ls").is_available());
    }
}
