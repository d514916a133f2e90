use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use anyhow::Context as _;
use tokio::io::AsyncWriteExt as _;
use tokio::process::Command;
use unbound_blocker_lib::ControlSubcommand;

/// Captured result of a single control command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

/// Interface to the resolver's control utility.
///
/// Each call returns once the invoked process has exited.
#[allow(async_fn_in_trait)]
pub trait ControlCommand {
    async fn run(
        &self,
        subcommand: ControlSubcommand,
        input: Option<&str>,
    ) -> anyhow::Result<ControlOutput>;
}

/// Runs `unbound-control(8)` as a child process
#[derive(Debug, Clone)]
pub struct UnboundControl {
    path: PathBuf,
}

impl UnboundControl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UnboundControl { path: path.into() }
    }
}

impl ControlCommand for UnboundControl {
    async fn run(
        &self,
        subcommand: ControlSubcommand,
        input: Option<&str>,
    ) -> anyhow::Result<ControlOutput> {
        tracing::debug!(path = ?self.path, %subcommand, "Running the control command");

        let mut child = Command::new(&self.path)
            .arg(subcommand.as_str())
            .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn {:?}", self.path))?;

        // Feed stdin while collecting the output, so that neither side blocks on a full pipe
        let stdin = child.stdin.take();
        let write_input = async move {
            if let (Some(mut stdin), Some(input)) = (stdin, input) {
                stdin.write_all(input.as_bytes()).await?;
                // Closing the pipe signals EOF
                drop(stdin);
            }
            Ok::<_, std::io::Error>(())
        };
        let (write_result, output) = tokio::join!(write_input, child.wait_with_output());

        let output = output.with_context(|| format!("failed to wait for {:?}", self.path))?;
        match write_result {
            // The process exited without reading all of its input, its exit code tells the rest
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                tracing::debug!(%subcommand, "Control command closed its stdin early");
            }
            result => {
                result.with_context(|| format!("failed to write the input of '{}'", subcommand))?
            }
        }

        Ok(ControlOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
