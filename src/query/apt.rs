use std::io;
use std::process::Command;

use super::DependencySource;
use crate::constants::query::{DEPENDS_PREFIX, SUBCOMMAND};
use crate::error::DebGraphError;

/// Queries dependencies by running `<program> depends <package>`
#[derive(Debug, Clone)]
pub struct AptCacheSource {
    program: String,
}

impl AptCacheSource {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DependencySource for AptCacheSource {
    fn dependencies_of(&self, package: &str) -> Result<Vec<String>, DebGraphError> {
        // Exit status and stderr are ignored; unknown packages simply yield no
        // Depends lines.
        let output = Command::new(&self.program)
            .arg(SUBCOMMAND)
            .arg(package)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => DebGraphError::EnvironmentUnavailable {
                    program: self.program.clone(),
                },
                _ => DebGraphError::Io(e),
            })?;

        Ok(parse_depends(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Extract dependency names from `apt-cache depends` output.
///
/// Each line that starts with `Depends:` after trimming names one dependency.
/// Version constraints and alternatives are not interpreted.
pub fn parse_depends(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix(DEPENDS_PREFIX))
        .map(|dependency| dependency.trim().to_string())
        .collect()
}
