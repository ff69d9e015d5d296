use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::logger::{debug, info, warn};

/// Host families that open files differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Opens paths with the host's default handler. Built once at startup and
/// reused for every launch.
#[derive(Debug, Clone)]
pub struct Launcher {
    program: OsString,
}

impl Launcher {
    pub fn detect() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            // Explorer hands the path to the shell's default handler without
            // going through cmd, so `&` and `%VAR%` stay literal.
            Platform::Windows => Self::with_program("explorer"),
            Platform::MacOs => Self::with_program("open"),
            Platform::Other => Self::with_program("xdg-open"),
        }
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command_for(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(path);
        command
    }

    /// Spawns the opener and returns immediately. The child is neither
    /// awaited nor monitored.
    pub fn launch(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("launching '{}' via {:?}", path.display(), self.program);

        self.command_for(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|child| {
                info!("launched '{}' (pid {})", path.display(), child.id());
            })
            .map_err(|err| {
                warn!("launch of '{}' failed: {}", path.display(), err);
                Error::LaunchFailed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            })
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::detect()
    }
}
