use std::fmt;

use thiserror::Error;

/// `unbound-control(8)` subcommands used to manage local zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSubcommand {
    /// Prints `<domain> <policy>` per line
    ListLocalZones,
    /// Reads domains from stdin
    LocalZonesRemove,
    /// Reads `<domain> <policy>` lines from stdin
    LocalZones,
}

impl ControlSubcommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlSubcommand::ListLocalZones => "list_local_zones",
            ControlSubcommand::LocalZonesRemove => "local_zones_remove",
            ControlSubcommand::LocalZones => "local_zones",
        }
    }
}

impl fmt::Display for ControlSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("'{subcommand}' exited with code {code}")]
    NonZeroExit { subcommand: ControlSubcommand, code: i32 },
    #[error("'{subcommand}' was terminated by a signal")]
    Terminated { subcommand: ControlSubcommand },
}

impl ControlError {
    pub fn subcommand(&self) -> ControlSubcommand {
        match self {
            ControlError::NonZeroExit { subcommand, .. }
            | ControlError::Terminated { subcommand } => *subcommand,
        }
    }
}

/// Builds the stdin payload for a subcommand: one line per item, each newline-terminated
pub fn encode_input<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().fold(String::new(), |mut input, line| {
        input.push_str(line.as_ref());
        input.push('\n');
        input
    })
}
